//! event-pager CLI
//!
//! Inspect pagination headers and resolve header actions from the shell

use clap::Parser;
use event_pager::cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();
    let runner = match Runner::new(cli) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(runner.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
