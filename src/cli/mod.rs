//! CLI module
//!
//! Command-line interface for inspecting pagination headers.
//!
//! # Commands
//!
//! - `links` - Parse a pagination header
//! - `view` - Render the list header for a page
//! - `navigate` - Resolve a header action into a host command

mod commands;
mod runner;

pub use commands::{ActionArg, Cli, Commands, OutputFormat};
pub use runner::Runner;
