use thiserror::Error;

/// Result type alias for documentation rendering.
pub type Result<T> = std::result::Result<T, DocsError>;

/// Error variants for documentation generation.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Serializing the documentation tree failed.
    #[error("failed to serialize documentation: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reason a `@class` block could not be read.
///
/// Each variant names the first piece the scanner failed to find, so a
/// diagnostic can tell the author exactly what is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassCoreError {
    /// `@class` is not followed by an identifier.
    #[error("couldn't find a class name after @class")]
    MissingName,

    /// No `@extends` marker after the class name.
    #[error("couldn't find @extends after @class")]
    MissingExtends,

    /// No `@example` marker after `@extends`.
    #[error("couldn't find @example after @extends")]
    MissingExample,
}
