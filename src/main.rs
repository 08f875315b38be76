//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use pro_football::{
    cli::ProFootball,
    commands::{common::CommandContext, run_command},
    config::Config,
    logging::setup_logging,
    Result,
};
use tracing::error;

/// Run the CLI.
fn main() -> Result<()> {
    let app = ProFootball::parse();
    let config = Config::load()?;

    // Held until exit so buffered log lines are flushed
    let _guard = setup_logging(&config.log_file(), app.verbose)?;

    let mut ctx = CommandContext::new(config, app.db)?;
    run_command(&mut ctx, app.command).inspect_err(|e| error!(error = %e, "Command failed"))
}
