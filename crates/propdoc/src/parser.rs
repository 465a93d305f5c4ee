//! Class and property block parsing.
//!
//! Blocks are read with a small cursor rather than one large pattern: each step
//! locates a marker or captures a piece, and a missing piece is reported by name.

use crate::clean::{clean, resolve_links};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::ClassCoreError;
use crate::model::{ClassRecord, PropertyRecord};

/// Marks a class declaration block.
pub const CLASS_MARKER: &str = "@class";
/// Introduces the supertype inside a class block.
pub const EXTENDS_MARKER: &str = "@extends";
/// Introduces the usage example inside a class block.
pub const EXAMPLE_MARKER: &str = "@example";
/// Marks a property declaration block.
pub const PROP_MARKER: &str = "@prop";

/// What a comment body declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Contains `@class`.
    Class,
    /// Contains `@prop` (and no `@class`).
    Property,
    /// Neither; ignored.
    Other,
}

impl BlockKind {
    /// Classify a comment body. The class marker is checked first.
    pub fn classify(body: &str) -> Self {
        if body.contains(CLASS_MARKER) {
            Self::Class
        } else if body.contains(PROP_MARKER) {
            Self::Property
        } else {
            Self::Other
        }
    }
}

/// Raw pieces of a well-formed class block, borrowed from the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassCore<'a> {
    pub name: &'a str,
    pub extends: &'a str,
    pub description: &'a str,
    pub example: &'a str,
}

impl<'a> ClassCore<'a> {
    /// Scan `@class Name`, `@extends Base`, the description and `@example`.
    ///
    /// Identifiers are ASCII letters and dots. The supertype may be blank; the class
    /// name may not.
    pub fn scan(body: &'a str) -> Result<Self, ClassCoreError> {
        let mut cursor = Cursor::new(body);

        if !cursor.seek_tag(CLASS_MARKER) || cursor.skip_blanks() == 0 {
            return Err(ClassCoreError::MissingName);
        }
        let name = cursor.take_while(is_identifier_char);
        if name.is_empty() {
            return Err(ClassCoreError::MissingName);
        }

        if !cursor.seek_tag(EXTENDS_MARKER) {
            return Err(ClassCoreError::MissingExtends);
        }
        let extends = if cursor.skip_blanks() > 0 {
            cursor.take_while(is_identifier_char)
        } else {
            ""
        };

        let description = cursor
            .take_until_tag(EXAMPLE_MARKER)
            .ok_or(ClassCoreError::MissingExample)?;

        Ok(Self {
            name,
            extends,
            description,
            example: cursor.rest(),
        })
    }
}

/// Raw pieces of a well-formed `@prop {type} name [default] description` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropDecl<'a> {
    pub type_name: &'a str,
    pub name: &'a str,
    pub default: &'a str,
    pub description: &'a str,
}

impl<'a> PropDecl<'a> {
    /// Scan a property declaration; `None` when any piece is missing.
    ///
    /// The default runs to the last `]` on the `@prop` line, so it may itself contain
    /// brackets and commas.
    pub fn scan(body: &'a str) -> Option<Self> {
        let mut cursor = Cursor::new(body);

        if !cursor.seek_tag(PROP_MARKER) || cursor.skip_blanks() == 0 || !cursor.eat('{') {
            return None;
        }
        let type_name = cursor.take_until('}')?;

        if cursor.skip_blanks() == 0 {
            return None;
        }
        let name = cursor.take_while(|c| !c.is_whitespace());
        if name.is_empty() || cursor.skip_blanks() == 0 || !cursor.eat('[') {
            return None;
        }

        let line = cursor.rest_of_line();
        let close = line.rfind(']')?;
        cursor.advance(close + 1);

        Some(Self {
            type_name,
            name,
            default: &line[..close],
            description: cursor.rest(),
        })
    }
}

/// Apply a class declaration block to `record`.
///
/// On success the name, supertype, description and example replace whatever an
/// earlier block set. On failure the record comes back unchanged and one diagnostic
/// for `label` goes to `sink`.
pub fn parse_class_core(
    mut record: ClassRecord,
    body: &str,
    label: &str,
    sink: &mut dyn DiagnosticSink,
) -> ClassRecord {
    match ClassCore::scan(body) {
        Ok(core) => {
            record.name = Some(clean(core.name));
            record.extends = Some(clean(core.extends));
            record.comments = Some(resolve_links(&clean(core.description)));
            record.example = Some(clean(core.example));
        }
        Err(reason) => sink.report(Diagnostic::malformed_class(label, reason)),
    }
    record
}

/// Append the property declared in `body` to `record`.
///
/// Bodies that merely mention `@prop` without the full shape are skipped without a
/// diagnostic.
pub fn parse_class_prop(mut record: ClassRecord, body: &str, label: &str) -> ClassRecord {
    match PropDecl::scan(body) {
        Some(decl) => record.push_property(PropertyRecord::new(
            clean(decl.name),
            clean(decl.type_name),
            clean(decl.default),
            resolve_links(&clean(decl.description)),
        )),
        None => tracing::trace!(label, "skipping incomplete @prop block"),
    }
    record
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '.'
}

/// Forward-only position in a comment body.
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn advance(&mut self, bytes: usize) {
        self.pos += bytes;
    }

    /// Move past the next occurrence of `tag` that is not the prefix of a longer
    /// word (`@prop` does not match `@property`).
    fn seek_tag(&mut self, tag: &str) -> bool {
        let mut from = self.pos;
        while let Some(offset) = self.text[from..].find(tag) {
            let end = from + offset + tag.len();
            let at_boundary = self.text[end..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric());
            if at_boundary {
                self.pos = end;
                return true;
            }
            from = end;
        }
        false
    }

    /// Skip spaces and tabs; returns how many bytes were skipped.
    fn skip_blanks(&mut self) -> usize {
        let rest = self.rest();
        let skipped = rest.len() - rest.trim_start_matches([' ', '\t']).len();
        self.pos += skipped;
        skipped
    }

    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let end = rest.find(|c: char| !keep(c)).unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.rest().starts_with(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Text up to `delimiter`; the cursor ends up after the delimiter.
    fn take_until(&mut self, delimiter: char) -> Option<&'a str> {
        let rest = self.rest();
        let end = rest.find(delimiter)?;
        self.pos += end + delimiter.len_utf8();
        Some(&rest[..end])
    }

    /// Text up to the next `tag`; the cursor ends up after the tag.
    fn take_until_tag(&mut self, tag: &str) -> Option<&'a str> {
        let start = self.pos;
        if self.seek_tag(tag) {
            Some(&self.text[start..self.pos - tag.len()])
        } else {
            None
        }
    }

    fn rest_of_line(&self) -> &'a str {
        let rest = self.rest();
        rest.split('\n').next().unwrap_or(rest)
    }
}
