//! propdoc CLI - component documentation from `@class` / `@prop` comments.
//!
//! This is the main entry point. It handles command-line argument parsing,
//! logging initialization, and dispatch to a one-shot build or watch mode.

use clap::Parser;
use propdoc_cli::{cli, commands, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    commands::execute(args.generate)
        .await
        .map_err(error::cli_error_to_miette)
}
