//! Configuration system for propdoc with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod defaults;
mod loading;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::*;
pub use validation::*;

/// propdoc configuration - loaded from propdoc.config.json, `PROPDOC_*` or CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PropdocConfig {
    /// Files or directories to document
    #[serde(default)]
    pub paths: Vec<PathBuf>,

    /// Output file
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Separator substituted for the platform path separator in output keys
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    /// Pretty-print the JSON output
    #[serde(default)]
    pub pretty: bool,

    /// File extensions to consider, without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names skipped while walking inputs
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,

    /// Rebuild on changes
    #[serde(default)]
    pub watch: bool,

    /// Wrap the output as `module.exports = ...;`
    #[serde(default)]
    pub module: bool,

    /// Quiet period before a burst of file events triggers a rebuild
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}
