//! CLI module
//!
//! Command-line interface for the API.
//!
//! # Commands
//!
//! - `whoami` - Show the authenticated user
//! - `api-calls` - Stream your API call history
//! - `api-tokens` - List your API tokens
//! - `users` - Stream users
//! - `convert` - Convert a CAD file and save the results

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;

#[cfg(test)]
mod tests;
