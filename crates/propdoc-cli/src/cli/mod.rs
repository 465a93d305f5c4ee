//! Command-line interface definition for propdoc.
//!
//! propdoc has a single job, so there are no subcommands: the global logging
//! flags sit next to the generation flags in [`GenerateArgs`].

mod args;
mod validation;

use clap::Parser;

pub use args::GenerateArgs;
pub use validation::{parse_extension, parse_separator};

/// propdoc - component documentation from `@class` / `@prop` comments
#[derive(Parser, Debug)]
#[command(
    name = "propdoc",
    version,
    about = "Generate JSON documentation from @class / @prop comment blocks",
    long_about = "propdoc scans JavaScript component sources for /** ... */ blocks tagged with\n\
                  @class, @extends, @example and @prop, and writes one JSON document that maps\n\
                  every documented file to its class record."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows every file as it is parsed, including files that document nothing.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Malformed-block warnings are hidden as well.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub generate: GenerateArgs,
}
