// Domain layer module exports
// Pure in-memory model; no I/O happens below this module

pub mod errors;
pub mod names;
pub mod player;
pub mod team;

pub use errors::{DomainError, DomainResult};
