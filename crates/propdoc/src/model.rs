use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Top-level documentation artifact: one record per documented file, keyed by path.
///
/// Files that document no class are omitted entirely.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Documentation {
    /// Records keyed by file path (or label), in insertion order.
    pub records: IndexMap<String, ClassRecord>,
}

impl Documentation {
    /// Returns `true` when no file produced a record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of documented files.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Adds the record for one file, replacing any previous entry for the same key.
    pub fn add_record(&mut self, key: impl Into<String>, record: ClassRecord) {
        self.records.insert(key.into(), record);
    }

    /// Looks up the record for a key.
    pub fn get(&self, key: &str) -> Option<&ClassRecord> {
        self.records.get(key)
    }
}

/// Parsed documentation for one source file.
///
/// Fields stay `None` until a block sets them. `properties` in particular is absent,
/// not empty, until the first `@prop` block is found.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Class name from `@class`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    /// Supertype from `@extends`; empty when the marker is present but blank.
    #[serde(rename = "ext", skip_serializing_if = "Option::is_none", default)]
    pub extends: Option<String>,
    /// Free-text description with `{@link}` directives resolved to markup.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comments: Option<String>,
    /// Usage example.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub example: Option<String>,
    /// Documented properties in source order.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub properties: Option<Vec<PropertyRecord>>,
}

impl ClassRecord {
    /// Appends a property, creating the property list on first use.
    pub fn push_property(&mut self, property: PropertyRecord) {
        self.properties.get_or_insert_with(Vec::new).push(property);
    }

    /// Documented properties, empty when none were found.
    pub fn properties(&self) -> &[PropertyRecord] {
        self.properties.as_deref().unwrap_or_default()
    }
}

/// One `@prop` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Property name.
    pub name: String,
    /// Type annotation from the braces.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Default value literal from the brackets.
    #[serde(rename = "def")]
    pub default: String,
    /// Description with `{@link}` directives resolved to markup.
    pub comments: String,
}

impl PropertyRecord {
    /// Creates a property record.
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        default: impl Into<String>,
        comments: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            default: default.into(),
            comments: comments.into(),
        }
    }
}

/// What gets written to the output file.
///
/// A single file input is written as its bare record (`null` when the file documents
/// nothing); everything else is written as the path-keyed tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocOutput {
    /// Output for a single input file.
    Single(Option<ClassRecord>),
    /// Output for directories or several inputs.
    Tree(Documentation),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_record_serializes_to_empty_object() {
        let value = serde_json::to_value(ClassRecord::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn record_uses_short_json_keys() {
        let mut record = ClassRecord {
            name: Some("Widget".into()),
            extends: Some("Base".into()),
            ..ClassRecord::default()
        };
        record.push_property(PropertyRecord::new("flag", "bool", "false", "Toggle."));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["ext"], "Base");
        assert_eq!(value["properties"][0]["type"], "bool");
        assert_eq!(value["properties"][0]["def"], "false");
        assert!(value.get("extends").is_none());
        assert!(value.get("comments").is_none());
    }

    #[test]
    fn properties_accessor_handles_absent_list() {
        let mut record = ClassRecord::default();
        assert!(record.properties().is_empty());
        assert!(record.properties.is_none());

        record.push_property(PropertyRecord::new("a", "int", "0", ""));
        assert_eq!(record.properties().len(), 1);
    }

    #[test]
    fn documentation_keeps_insertion_order() {
        let mut documentation = Documentation::default();
        documentation.add_record("b.js", ClassRecord::default());
        documentation.add_record("a.js", ClassRecord::default());

        let keys: Vec<_> = documentation.records.keys().cloned().collect();
        assert_eq!(keys, vec!["b.js", "a.js"]);
        assert_eq!(documentation.len(), 2);
    }

    #[test]
    fn single_output_of_absent_record_is_null() {
        let value = serde_json::to_value(DocOutput::Single(None)).unwrap();
        assert!(value.is_null());
    }
}
