use crate::config::PropdocConfig;
use crate::error::{ConfigError, Result};

/// Validate a configured file extension.
///
/// Config files may spell extensions with a leading dot; the walker strips it.
pub fn validate_extension(extension: &str) -> Result<()> {
    crate::cli::parse_extension(extension)
        .map(|_| ())
        .map_err(|hint| {
            ConfigError::InvalidValue {
                field: "extensions".to_string(),
                value: extension.to_string(),
                hint,
            }
            .into()
        })
}

impl PropdocConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.paths.is_empty() {
            return Err(ConfigError::MissingField {
                field: "paths".to_string(),
                hint: "Pass at least one file or directory, or set 'paths' in propdoc.config.json"
                    .to_string(),
            }
            .into());
        }

        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output".to_string(),
                value: String::new(),
                hint: "Output file cannot be empty".to_string(),
            }
            .into());
        }

        if self.output.is_dir() {
            return Err(ConfigError::InvalidValue {
                field: "output".to_string(),
                value: self.output.display().to_string(),
                hint: "Output must be a file, not a directory".to_string(),
            }
            .into());
        }

        if self.extensions.is_empty() {
            return Err(ConfigError::MissingField {
                field: "extensions".to_string(),
                hint: "List at least one extension, e.g. [\"js\", \"jsx\"]".to_string(),
            }
            .into());
        }

        for extension in &self.extensions {
            validate_extension(extension)?;
        }

        if let Some(separator) = &self.separator {
            if separator.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "separator".to_string(),
                    value: String::new(),
                    hint: "Separator cannot be empty; omit it to keep the platform separator"
                        .to_string(),
                }
                .into());
            }
        }

        if self.ignore.iter().any(|name| name.is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "ignore".to_string(),
                value: String::new(),
                hint: "Ignored directory names cannot be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
