//! Folds the comment blocks of one file into a single [`ClassRecord`].

use crate::comments::comment_bodies;
use crate::diagnostics::DiagnosticSink;
use crate::model::ClassRecord;
use crate::parser::{parse_class_core, parse_class_prop, BlockKind, CLASS_MARKER};

/// Parse the documentation of one file.
///
/// Returns `None` when `content` never mentions `@class`; the comment extractor does
/// not run in that case. Otherwise every comment body is applied to a fresh record in
/// source order: class blocks overwrite the class fields (the last one wins) and
/// property blocks append. Malformed class blocks are reported to `sink` one by one
/// and never abort the file.
pub fn parse_one(
    content: &str,
    label: &str,
    sink: &mut dyn DiagnosticSink,
) -> Option<ClassRecord> {
    if !content.contains(CLASS_MARKER) {
        return None;
    }

    let record = comment_bodies(content).fold(ClassRecord::default(), |record, body| {
        match BlockKind::classify(body) {
            BlockKind::Class => parse_class_core(record, body, label, &mut *sink),
            BlockKind::Property => parse_class_prop(record, body, label),
            BlockKind::Other => record,
        }
    });

    tracing::debug!(
        file = label,
        properties = record.properties().len(),
        "parsed documentation"
    );
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostic;
    use crate::error::ClassCoreError;

    #[test]
    fn returns_none_without_class_marker() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        assert!(parse_one("/** @prop {bool} a [b] c */", "a.js", &mut sink).is_none());
        assert!(parse_one("", "a.js", &mut sink).is_none());
        assert!(sink.is_empty());
    }

    #[test]
    fn marker_outside_comments_gives_empty_record() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        let record = parse_one("// @class in a line comment", "a.js", &mut sink).unwrap();
        assert_eq!(record, ClassRecord::default());
    }

    #[test]
    fn properties_before_class_block_are_kept() {
        let source = "
            /** @prop {int} early [1] Early. */
            /** @class Late @extends Base Late comes last. @example <Late/> */
        ";
        let mut sink: Vec<Diagnostic> = Vec::new();
        let record = parse_one(source, "a.js", &mut sink).unwrap();
        assert_eq!(record.name.as_deref(), Some("Late"));
        assert_eq!(record.comments.as_deref(), Some("Late comes last."));
        assert_eq!(record.properties()[0].name, "early");
    }

    #[test]
    fn each_malformed_class_block_is_reported() {
        let source = "
            /** @class A */
            /** unrelated */
            /** @class B @extends C */
        ";
        let mut sink: Vec<Diagnostic> = Vec::new();
        let record = parse_one(source, "broken.js", &mut sink).unwrap();

        assert_eq!(record, ClassRecord::default());
        assert_eq!(
            sink,
            vec![
                Diagnostic::malformed_class("broken.js", ClassCoreError::MissingExtends),
                Diagnostic::malformed_class("broken.js", ClassCoreError::MissingExample),
            ]
        );
    }
}
