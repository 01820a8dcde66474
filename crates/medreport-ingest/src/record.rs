//! Raw key/value records extracted from a report document.

use std::collections::BTreeSet;

use medreport_model::{RawValue, normalize_key};

/// Label/value pairs extracted from one document, keyed by normalized
/// label and kept in document order.
///
/// Insertion is first-write-wins: once a normalized key holds a value,
/// later occurrences of the same key are ignored, so a value extracted
/// early in the document is never overwritten by a weaker later match.
/// Document order matters downstream for the same reason, so iteration
/// preserves it instead of sorting.
#[derive(Debug, Default, Clone)]
pub struct RawRecord {
    entries: Vec<(String, RawValue)>,
    seen: BTreeSet<String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw label/value pair. The label is normalized first;
    /// pairs with an empty normalized label, a missing value, or an
    /// already-present key are dropped. Returns whether the pair was
    /// stored.
    pub fn insert(&mut self, raw_label: &str, value: RawValue) -> bool {
        if value.is_missing() {
            return false;
        }
        let key = normalize_key(raw_label);
        if key.is_empty() || self.seen.contains(&key) {
            return false;
        }
        self.seen.insert(key.clone());
        self.entries.push((key, value));
        true
    }

    pub fn contains(&self, normalized_key: &str) -> bool {
        self.seen.contains(normalized_key)
    }

    pub fn get(&self, normalized_key: &str) -> Option<&RawValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == normalized_key)
            .map(|(_, value)| value)
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_normalized_on_insert() {
        let mut record = RawRecord::new();
        assert!(record.insert("Blood Pressure (mm Hg)", RawValue::text("130")));
        assert_eq!(
            record.get("bloodpressure"),
            Some(&RawValue::Text("130".to_string()))
        );
    }

    #[test]
    fn first_value_wins_for_duplicate_keys() {
        let mut record = RawRecord::new();
        assert!(record.insert("Glucose", RawValue::text("150")));
        assert!(!record.insert("glucose", RawValue::text("999")));
        assert_eq!(
            record.get("glucose"),
            Some(&RawValue::Text("150".to_string()))
        );
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn missing_values_and_empty_keys_are_dropped() {
        let mut record = RawRecord::new();
        assert!(!record.insert("Glucose", RawValue::Missing));
        assert!(!record.insert("---", RawValue::text("150")));
        assert!(record.is_empty());
        // a missing value must not occupy the key
        assert!(record.insert("Glucose", RawValue::text("150")));
    }

    #[test]
    fn iteration_preserves_document_order() {
        let mut record = RawRecord::new();
        record.insert("Zinc", RawValue::text("12"));
        record.insert("Albumin", RawValue::text("4.2"));
        let keys: Vec<&str> = record.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["zinc", "albumin"]);
    }
}
