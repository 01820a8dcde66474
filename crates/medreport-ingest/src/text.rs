//! Free-text report parsing.
//!
//! Text extracted from PDF lab reports arrives as loosely structured
//! lines: "label: value" pairs, "label value" runs, or a label on one
//! line with its value on the next. A single pending-key slot carries a
//! bare label forward until a following line supplies its value.

use std::sync::LazyLock;

use regex::Regex;

use medreport_model::RawValue;

use crate::record::RawRecord;

static INLINE_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9 /_%()-]+)\s+([-+]?\d+[\d.,]*)")
        .expect("Invalid inline pair regex")
});

static BARE_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9 /_%()-]+$").expect("Invalid bare label regex"));

/// Parse loosely structured report text into a raw record.
///
/// Per trimmed line, in order: separator pairs ("label: value" or
/// "label = value", first `:` preferred), inline numeric pairs
/// ("Hemoglobin 11.5"), consumption of a pending label's value, then
/// bare labels which become the new pending key. A separator line with
/// an empty value also leaves its label pending. Everything else is
/// ignored.
pub fn record_from_text(text: &str) -> RawRecord {
    let mut record = RawRecord::new();
    let mut pending_key: Option<&str> = None;

    for line in text.lines() {
        let cleaned = line.trim();
        if cleaned.is_empty() {
            continue;
        }

        if let Some((key, value)) = cleaned.split_once(':').or_else(|| cleaned.split_once('=')) {
            let value = value.trim();
            if value.is_empty() {
                pending_key = Some(key.trim());
            } else {
                record.insert(key, RawValue::text(value));
                pending_key = None;
            }
            continue;
        }

        if let Some(captures) = INLINE_PAIR_RE.captures(cleaned) {
            record.insert(&captures[1], RawValue::text(&captures[2]));
            pending_key = None;
            continue;
        }

        if let Some(key) = pending_key.take() {
            record.insert(key, RawValue::text(cleaned));
            continue;
        }

        if BARE_LABEL_RE.is_match(cleaned) {
            pending_key = Some(cleaned);
        }
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_lines_split_at_first_colon() {
        let record = record_from_text("Glucose: 150 mg/dL\nNote: ratio=3:1\n");
        assert_eq!(
            record.get("glucose"),
            Some(&RawValue::Text("150 mg/dL".to_string()))
        );
        assert_eq!(
            record.get("note"),
            Some(&RawValue::Text("ratio=3:1".to_string()))
        );
    }

    #[test]
    fn equals_separator_is_a_fallback() {
        let record = record_from_text("BMI = 28.5\n");
        assert_eq!(record.get("bmi"), Some(&RawValue::Text("28.5".to_string())));
    }

    #[test]
    fn pending_label_consumes_the_next_line() {
        let record = record_from_text("Hemoglobin (Hb)\n11.5 g/dL\n");
        assert_eq!(
            record.get("hemoglobin"),
            Some(&RawValue::Text("11.5 g/dL".to_string()))
        );
    }

    #[test]
    fn pending_label_survives_blank_lines() {
        let record = record_from_text("Gender\n\n\nMale\n");
        assert_eq!(record.get("gender"), Some(&RawValue::Text("Male".to_string())));
    }

    #[test]
    fn separator_with_empty_value_sets_pending() {
        let record = record_from_text("Cholesterol:\n212\n");
        assert_eq!(
            record.get("cholesterol"),
            Some(&RawValue::Text("212".to_string()))
        );
    }

    #[test]
    fn inline_pairs_are_stored_and_clear_pending() {
        let record = record_from_text("Platelets\nHeart Rate 72\n88\n");
        // the inline pair wins; the stale pending label is discarded and
        // the trailing bare number is ignored
        assert_eq!(
            record.get("heartrate"),
            Some(&RawValue::Text("72".to_string()))
        );
        assert!(record.get("platelets").is_none());
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn inline_pair_keeps_label_before_the_number() {
        let record = record_from_text("Vitamin B12 400\n");
        assert_eq!(
            record.get("vitaminb12"),
            Some(&RawValue::Text("400".to_string()))
        );
    }

    #[test]
    fn first_occurrence_wins_across_lines() {
        let record = record_from_text("Glucose: 150\nGlucose: 999\n");
        assert_eq!(record.get("glucose"), Some(&RawValue::Text("150".to_string())));
    }

    #[test]
    fn unstructured_prose_is_ignored() {
        let record = record_from_text("Results were reviewed by Dr. Smith.\n12345\n");
        assert!(record.is_empty());
    }
}
