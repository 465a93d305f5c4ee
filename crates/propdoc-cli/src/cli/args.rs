use clap::Args;
use std::path::PathBuf;

use crate::cli::validation::{parse_extension, parse_separator};

/// Arguments for a documentation build.
///
/// Options are optional on purpose: a flag that is not given leaves the value from
/// the config file, the environment, or the defaults in place.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Files or directories to document
    ///
    /// Directories are walked recursively. A single file path produces the bare
    /// record of that file instead of a path-keyed map.
    ///
    /// Examples:
    ///   propdoc src/components
    ///   propdoc src/Button.jsx
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output file [default: docs.json]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path separator used in output keys [default: platform separator]
    #[arg(short, long, value_name = "SEP", value_parser = parse_separator)]
    pub separator: Option<String>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// File extensions to consider [default: js,jsx]
    #[arg(
        short = 'x',
        long,
        value_name = "EXT",
        value_delimiter = ',',
        value_parser = parse_extension
    )]
    pub extensions: Option<Vec<String>>,

    /// Directory names to skip [default: test,node_modules]
    #[arg(short, long, value_name = "DIR", value_delimiter = ',')]
    pub ignore: Option<Vec<String>>,

    /// Watch the inputs and rebuild the documentation on changes
    #[arg(short, long)]
    pub watch: bool,

    /// Render as a CommonJS module (`module.exports = ...;`)
    #[arg(short, long)]
    pub module: bool,

    /// Config file [default: propdoc.config.json when present]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
