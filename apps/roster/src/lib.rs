//! Team Roster Library
//!
//! In-memory management of a single sports team: roster, per-player stats,
//! match schedule and results, plus the interactive menu that drives them.

pub mod cli;
pub mod config;
pub mod domain;
