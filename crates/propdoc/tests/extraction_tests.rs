use propdoc::{parse_one, ClassCoreError, ClassRecord, Diagnostic, PropertyRecord};

const WIDGET: &str = r#"
import React from 'react';

/**
 * @class Widget
 * @extends Base
 *
 * A widget.
 *
 * @example
 * <Widget/>
 */
class Widget extends Base {
  static propTypes = {
    /**
     * @prop {bool} flag [false] Toggle.
     */
    flag: PropTypes.bool,

    /**
     * @prop {int} count [0] Count.
     */
    count: PropTypes.int,
  };
}
"#;

#[test]
fn extracts_class_with_properties() {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let record = parse_one(WIDGET, "src/Widget.jsx", &mut diagnostics).expect("documented class");

    assert!(diagnostics.is_empty());
    assert_eq!(
        record,
        ClassRecord {
            name: Some("Widget".to_string()),
            extends: Some("Base".to_string()),
            comments: Some("A widget.".to_string()),
            example: Some("<Widget/>".to_string()),
            properties: Some(vec![
                PropertyRecord::new("flag", "bool", "false", "Toggle."),
                PropertyRecord::new("count", "int", "0", "Count."),
            ]),
        }
    );
}

#[test]
fn serializes_with_legacy_keys() {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let record = parse_one(WIDGET, "src/Widget.jsx", &mut diagnostics).unwrap();
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "name": "Widget",
            "ext": "Base",
            "comments": "A widget.",
            "example": "<Widget/>",
            "properties": [
                { "name": "flag", "type": "bool", "def": "false", "comments": "Toggle." },
                { "name": "count", "type": "int", "def": "0", "comments": "Count." }
            ]
        })
    );
}

#[test]
fn class_without_properties_leaves_them_absent() {
    let source = "/**\n * @class Solo\n * @extends Base\n * Alone.\n * @example\n * <Solo/>\n */";
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let record = parse_one(source, "Solo.jsx", &mut diagnostics).unwrap();

    assert_eq!(record.name.as_deref(), Some("Solo"));
    assert_eq!(record.extends.as_deref(), Some("Base"));
    assert_eq!(record.comments.as_deref(), Some("Alone."));
    assert_eq!(record.example.as_deref(), Some("<Solo/>"));
    assert!(record.properties.is_none());
}

#[test]
fn missing_example_reports_once_and_keeps_empty_record() {
    let source = "/**\n * @class Broken\n * @extends Base\n * No example here.\n */";
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let record = parse_one(source, "Broken.jsx", &mut diagnostics).unwrap();

    assert_eq!(record, ClassRecord::default());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].label, "Broken.jsx");
    assert_eq!(
        diagnostics[0],
        Diagnostic::malformed_class("Broken.jsx", ClassCoreError::MissingExample)
    );
}

#[test]
fn last_class_block_wins() {
    let source = r#"
        /**
         * @class First
         * @extends One
         * First description.
         * @example
         * <First/>
         */
        /**
         * @class Second
         * @extends Two
         * Second description.
         * @example
         * <Second/>
         */
    "#;
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let record = parse_one(source, "Twice.jsx", &mut diagnostics).unwrap();

    assert_eq!(record.name.as_deref(), Some("Second"));
    assert_eq!(record.extends.as_deref(), Some("Two"));
    assert_eq!(record.comments.as_deref(), Some("Second description."));
    assert_eq!(record.example.as_deref(), Some("<Second/>"));
}

#[test]
fn malformed_class_block_after_good_one_keeps_good_values() {
    let source = r#"
        /** @class Good @extends Base Fine. @example <Good/> */
        /** @class Bad */
    "#;
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let record = parse_one(source, "Mixed.jsx", &mut diagnostics).unwrap();

    assert_eq!(record.name.as_deref(), Some("Good"));
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn malformed_property_blocks_are_silent() {
    let source = r#"
        /** @class A @extends B Desc. @example <A/> */
        /** @prop flag without type or default */
        /** @prop {bool} ok [true] Fine. */
    "#;
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let record = parse_one(source, "A.jsx", &mut diagnostics).unwrap();

    assert!(diagnostics.is_empty());
    let names: Vec<_> = record.properties().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["ok"]);
}

#[test]
fn descriptions_resolve_links() {
    let source = r#"
        /**
         * @class Link
         * @extends Base
         * Renders {@link https://example.com the site} and jumps to {@link #props}.
         * @example
         * <Link/>
         */
        /**
         * @prop {string} to [] Destination, see {@link #routing|routing}.
         */
    "#;
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let record = parse_one(source, "Link.jsx", &mut diagnostics).unwrap();

    assert_eq!(
        record.comments.as_deref(),
        Some(
            "Renders <a href=\"https://example.com\" target=\"_blank\">the site</a> \
             and jumps to <a href=\"#props\" target=\"_self\">#props</a>."
        )
    );
    let property = &record.properties()[0];
    assert_eq!(property.default, "");
    assert_eq!(
        property.comments,
        "Destination, see <a href=\"#routing\" target=\"_self\">routing</a>."
    );
}

#[test]
fn multi_line_fields_keep_their_lines() {
    let source = r#"
/**
 * @class List
 * @extends Base
 *
 * First paragraph line,
 * continued here.
 *
 * @example
 * <List>
 *   <Item />
 * </List>
 */
"#;
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let record = parse_one(source, "List.jsx", &mut diagnostics).unwrap();

    assert_eq!(
        record.comments.as_deref(),
        Some("First paragraph line,\ncontinued here.")
    );
    assert_eq!(
        record.example.as_deref(),
        Some("<List>\n  <Item />\n</List>")
    );
}

#[test]
fn keeps_markdown_emphasis_at_line_start() {
    let source = "/**\n * @class A\n * @extends B\n * **Note:** bold.\n * @example\n * <A/>\n */\n\
                  /**\n * @prop {string} a [''] *Deprecated*, use b.\n */\n";
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let record = parse_one(source, "A.jsx", &mut diagnostics).unwrap();

    assert!(diagnostics.is_empty());
    assert_eq!(record.comments.as_deref(), Some("**Note:** bold."));
    assert_eq!(record.properties()[0].comments, "*Deprecated*, use b.");
}
