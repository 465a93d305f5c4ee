//! Command implementations.
//!
//! - [`generate`] builds the documentation once
//! - [`watch`] builds, then rebuilds on every relevant change until Ctrl+C

pub mod generate;
pub mod watch;

use crate::cli::{Cli, GenerateArgs};
use crate::config::PropdocConfig;
use crate::error::{CliError, Result};
use clap::CommandFactory;

/// Resolve the configuration for `args` and run the requested mode.
///
/// With no input paths from the flags, the config file or the environment, the
/// help text is printed and the run succeeds.
pub async fn execute(args: GenerateArgs) -> Result<()> {
    let config = PropdocConfig::load(&args)?;
    if config.paths.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }
    config.validate()?;

    if config.watch {
        return watch::execute(config).await;
    }

    tokio::task::spawn_blocking(move || generate::execute(&config))
        .await
        .map_err(|e| CliError::Custom(format!("documentation build panicked: {e}")))??;
    Ok(())
}
