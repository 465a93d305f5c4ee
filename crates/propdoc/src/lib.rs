#![deny(clippy::all)]

//! Documentation extraction for component sources.
//!
//! This crate provides:
//! - A comment-block extractor that finds `/** ... */` bodies in raw text.
//! - A parser for `@class` / `@extends` / `@example` and `@prop` blocks, including
//!   `{@link ...}` resolution.
//! - An assembler that folds all blocks of one file into a [`ClassRecord`].
//! - A JSON generator for the aggregated [`Documentation`] tree.
//!
//! The engine never touches the file system: callers hand it the file content and a
//! label, and receive a record (or `None` when the file documents no class).
//!
//! ```
//! use propdoc::{parse_one, Diagnostic};
//!
//! let source = r#"
//! /**
//!  * @class Button
//!  * @extends React.Component
//!  *
//!  * A simple button.
//!  *
//!  * @example
//!  * <Button />
//!  */
//! "#;
//!
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let record = parse_one(source, "Button.jsx", &mut diagnostics).unwrap();
//! assert_eq!(record.name.as_deref(), Some("Button"));
//! assert!(diagnostics.is_empty());
//! ```

pub mod assembler;
pub mod clean;
pub mod comments;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod parser;

#[cfg(feature = "json")]
pub mod generators;

pub use assembler::parse_one;
pub use clean::{clean, resolve_links};
pub use comments::{comment_bodies, extract_comment_bodies};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, TracingSink};
pub use error::{ClassCoreError, DocsError, Result};
pub use model::{ClassRecord, DocOutput, Documentation, PropertyRecord};
pub use parser::{parse_class_core, parse_class_prop, BlockKind};

#[cfg(feature = "json")]
pub use generators::json::{render_json, JsonOptions};
