//! Miette report conversion for CLI errors.

use crate::error::{CliError, ConfigError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Watch(e) => miette::miette!(
            "File watcher error: {}\n\nHint: Check that the inputs exist and the watch limit is not exhausted",
            e
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::InvalidValue { field, value, hint } => miette::miette!(
            help = hint,
            "Invalid value for '{}': {}",
            field,
            value
        ),
        ConfigError::MissingField { field, hint } => {
            miette::miette!(help = hint, "Missing required field: {}", field)
        }
        _ => miette::miette!("Configuration error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic as _;

    #[test]
    fn test_config_hint_becomes_help() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::MissingField {
            field: "paths".to_string(),
            hint: "Pass a directory".to_string(),
        }));

        assert_eq!(report.to_string(), "Missing required field: paths");
        assert_eq!(
            report.help().map(|help| help.to_string()).as_deref(),
            Some("Pass a directory")
        );
    }

    #[test]
    fn test_other_errors_keep_message() {
        let report = cli_error_to_miette(CliError::NoInputs);
        assert!(report.to_string().contains("No files were documented"));
    }
}
