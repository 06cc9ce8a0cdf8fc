//! CLI commands and argument parsing

use crate::pagination::HeaderAction;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Event list pagination CLI
#[derive(Parser, Debug)]
#[command(name = "event-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pager configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a pagination header and show both directions
    Links {
        /// Raw header value
        header: String,

        /// Fail on malformed entries instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Render the list header for a page
    View {
        /// Current location (URL or path with query)
        #[arg(short, long)]
        location: String,

        /// Pagination header of the current page
        #[arg(long)]
        link: Option<String>,

        /// Items on the current page
        #[arg(long, default_value = "0")]
        items: u64,

        /// Items across all pages
        #[arg(long, default_value = "0")]
        total: u64,

        /// A new page is in flight
        #[arg(long)]
        loading: bool,
    },

    /// Resolve a header action into the command the host should apply
    Navigate {
        /// Action to trigger
        action: ActionArg,

        /// Current location (URL or path with query)
        #[arg(short, long)]
        location: String,

        /// Pagination header of the current page
        #[arg(long)]
        link: Option<String>,

        /// A new page is in flight
        #[arg(long)]
        loading: bool,
    },
}

/// Header action selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ActionArg {
    /// Go to the previous page
    #[value(alias = "prev")]
    Previous,
    /// Go to the next page
    Next,
    /// Close the event list
    Close,
}

impl From<ActionArg> for HeaderAction {
    fn from(action: ActionArg) -> Self {
        match action {
            ActionArg::Previous => HeaderAction::Previous,
            ActionArg::Next => HeaderAction::Next,
            ActionArg::Close => HeaderAction::Close,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
