use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A cell or line value as produced by a format reader, before any
/// field-specific conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Empty cell, blank extraction, or unreadable value.
    Missing,
    Text(String),
    Number(f64),
}

impl RawValue {
    /// Build a text value from a raw cell, trimming whitespace and a
    /// leading BOM; blank cells become [`RawValue::Missing`].
    pub fn text(raw: &str) -> RawValue {
        let trimmed = raw.trim().trim_start_matches('\u{feff}').trim();
        if trimmed.is_empty() {
            RawValue::Missing
        } else {
            RawValue::Text(trimmed.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, RawValue::Missing)
    }

    /// Render the value as text for token matching or use as a label.
    /// Numbers use the shortest decimal form (`1.0` renders as "1"),
    /// so a numeric spreadsheet cell matches the same tokens as its
    /// CSV string twin. `Missing` has no text form.
    pub fn to_text(&self) -> Option<String> {
        match self {
            RawValue::Missing => None,
            RawValue::Text(text) => Some(text.clone()),
            RawValue::Number(number) => Some(number.to_string()),
        }
    }
}

/// A normalized field value ready for form autofill.
///
/// Serializes untagged so JSON output carries plain numbers and strings:
/// `{"age": 45, "bmi": 28.5, "gender": "Male"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::Float(value) => write!(f, "{value}"),
            FieldValue::Text(value) => write!(f, "{value}"),
        }
    }
}

/// Extracted values for one disease form, keyed by canonical field name.
pub type FormValues = BTreeMap<String, FieldValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_constructor_trims_and_drops_blanks() {
        assert_eq!(RawValue::text(" 150 mg/dL "), RawValue::Text("150 mg/dL".to_string()));
        assert_eq!(RawValue::text("   "), RawValue::Missing);
        assert_eq!(RawValue::text("\u{feff}Gender"), RawValue::Text("Gender".to_string()));
    }

    #[test]
    fn numbers_render_without_trailing_zeros() {
        assert_eq!(RawValue::Number(1.0).to_text().unwrap(), "1");
        assert_eq!(RawValue::Number(28.5).to_text().unwrap(), "28.5");
        assert_eq!(RawValue::Number(150.0).to_text().unwrap(), "150");
        assert!(RawValue::Missing.to_text().is_none());
    }

    #[test]
    fn field_values_serialize_untagged() {
        let mut values = FormValues::new();
        values.insert("age".to_string(), FieldValue::Integer(45));
        values.insert("bmi".to_string(), FieldValue::Float(28.5));
        values.insert("gender".to_string(), FieldValue::Text("Male".to_string()));
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"age": 45, "bmi": 28.5, "gender": "Male"})
        );
    }

    #[test]
    fn field_values_deserialize_by_shape() {
        let values: FormValues =
            serde_json::from_str(r#"{"age": 45, "bmi": 28.5, "gender": "Male"}"#).unwrap();
        assert_eq!(values["age"], FieldValue::Integer(45));
        assert_eq!(values["bmi"], FieldValue::Float(28.5));
        assert_eq!(values["gender"], FieldValue::Text("Male".to_string()));
    }
}
