use crate::cli::GenerateArgs;
use crate::config::{DEFAULT_CONFIG_FILE, ENV_PREFIX, PropdocConfig, defaults::*};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Keys read from `PROPDOC_*` variables; any other `PROPDOC_` variable is left alone.
const ENV_KEYS: &[&str] = &[
    "paths",
    "output",
    "separator",
    "pretty",
    "extensions",
    "ignore",
    "watch",
    "module",
    "debounce_ms",
];

/// Values given on the command line.
///
/// Only flags that were actually passed are serialized, so absent flags never
/// clobber values from the config file or the environment.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct CliOverrides {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    paths: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pretty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extensions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ignore: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    watch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    module: Option<bool>,
}

impl From<&GenerateArgs> for CliOverrides {
    fn from(args: &GenerateArgs) -> Self {
        Self {
            paths: args.paths.clone(),
            output: args.output.clone(),
            separator: args.separator.clone(),
            pretty: args.pretty.then_some(true),
            extensions: args.extensions.clone(),
            ignore: args.ignore.clone(),
            watch: args.watch.then_some(true),
            module: args.module.then_some(true),
        }
    }
}

impl PropdocConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(args: &GenerateArgs) -> Result<Self> {
        Self::load_with_fallback(args, Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Like [`PropdocConfig::load`], reading `fallback` when `--config` is absent
    /// and `fallback` exists.
    pub fn load_with_fallback(args: &GenerateArgs, fallback: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));

        let config_file = match &args.config {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.clone()).into());
            }
            Some(path) => Some(path.clone()),
            None => fallback.exists().then(|| fallback.to_path_buf()),
        };

        if let Some(path) = config_file {
            tracing::debug!(config = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        // PROPDOC_OUTPUT, PROPDOC_DEBOUNCE_MS, ...
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .only(ENV_KEYS)
                .map(|key| snake_to_camel(key.as_str()).into()),
        );

        figment = figment.merge(Serialized::defaults(CliOverrides::from(args)));

        figment.extract().map_err(|e| {
            let field = if e.path.is_empty() {
                "configuration".to_string()
            } else {
                e.path.join(".")
            };
            ConfigError::InvalidValue {
                field,
                value: e.kind.to_string(),
                hint: "Check propdoc.config.json syntax, PROPDOC_* variables and field types"
                    .to_string(),
            }
            .into()
        })
    }

    /// Get default configuration values.
    pub fn default_config() -> Self {
        Self {
            paths: Vec::new(),
            output: default_output(),
            separator: None,
            pretty: false,
            extensions: default_extensions(),
            ignore: default_ignore(),
            watch: false,
            module: false,
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// `debounce_ms` -> `debounceMs`, matching the config file's key style.
pub(crate) fn snake_to_camel(key: &str) -> String {
    let mut camel = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            camel.extend(c.to_uppercase());
            upper = false;
        } else {
            camel.push(c);
        }
    }
    camel
}
