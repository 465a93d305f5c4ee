use std::path::PathBuf;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "propdoc.config.json";

/// Prefix of environment variables read into the configuration.
pub const ENV_PREFIX: &str = "PROPDOC_";

pub fn default_output() -> PathBuf {
    PathBuf::from("docs.json")
}

pub fn default_extensions() -> Vec<String> {
    vec!["js".to_string(), "jsx".to_string()]
}

pub fn default_ignore() -> Vec<String> {
    vec!["test".to_string(), "node_modules".to_string()]
}

pub fn default_debounce_ms() -> u64 {
    100
}
