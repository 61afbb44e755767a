//! CLI module
//!
//! Command-line interface: flag parsing and the runner that wires the
//! credential file, routing table, HTTP client, page driver and renderer
//! together.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
