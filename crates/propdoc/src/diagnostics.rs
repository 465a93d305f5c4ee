//! Diagnostic reporting for malformed documentation blocks.
//!
//! The parser never prints. It hands every problem to a [`DiagnosticSink`] supplied by
//! the caller, which decides where the message ends up.

use std::fmt;

use crate::error::ClassCoreError;

/// What went wrong in a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A `@class` block lacks one of `@class Name`, `@extends` or `@example`.
    MalformedClass(ClassCoreError),
}

/// A non-fatal problem found while parsing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Label (usually the path) of the file being parsed.
    pub label: String,
    /// The problem.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Diagnostic for a class block that failed to scan.
    pub fn malformed_class(label: impl Into<String>, reason: ClassCoreError) -> Self {
        Self {
            label: label.into(),
            kind: DiagnosticKind::MalformedClass(reason),
        }
    }

    /// Message without the label.
    pub fn message(&self) -> String {
        match self.kind {
            DiagnosticKind::MalformedClass(reason) => format!(
                "couldn't find all core properties @class, @extends, @example ({reason})"
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.label, self.message())
    }
}

/// Receives diagnostics as they are found, in file order.
pub trait DiagnosticSink {
    /// Record one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Sink that logs every diagnostic at `warn` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(file = %diagnostic.label, "{}", diagnostic.message());
    }
}
