//! propdoc CLI - builds a JSON documentation tree from component sources.
//!
//! The `propdoc` engine turns one file's text into a class record. This crate does
//! everything around it: flags and configuration, walking input directories,
//! parsing files in parallel, writing the output document and rebuilding it when
//! sources change.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`config`] - configuration merged from defaults, file, environment and flags
//! - [`commands`] - one-shot generation and watch mode
//! - [`sources`] - input discovery and filtering
//! - [`watcher`] - file-system watcher feeding watch mode
//! - [`error`] - error types with actionable messages
//! - [`logger`] - structured logging with tracing
//! - [`ui`] - terminal status messages
//!
//! # Example
//!
//! ```rust,no_run
//! use propdoc_cli::{commands::generate, config::PropdocConfig};
//! use std::path::PathBuf;
//!
//! let config = PropdocConfig {
//!     paths: vec![PathBuf::from("src")],
//!     ..PropdocConfig::default_config()
//! };
//! generate::execute(&config).unwrap();
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod sources;
pub mod ui;
pub mod watcher;

pub use error::{CliError, ConfigError, Result, ResultExt};
