// Interactive adapter (menu controller)
// Reads choices from a line-oriented prompt and drives the domain

pub mod errors;
pub mod handlers;
pub mod menu;
pub mod prompt;
pub mod session;

pub use errors::{CliError, CliResult};
pub use prompt::Prompter;
pub use session::Session;
