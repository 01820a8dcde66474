//! Label and token normalization.
//!
//! Every raw header, registered alias, and controlled-choice token passes
//! through [`normalize_key`] before comparison, so "Blood Pressure (mm Hg)",
//! "blood_pressure" and "BloodPressure" all meet at "bloodpressure".

use regex::Regex;
use std::sync::LazyLock;

static PARENTHETICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("Invalid parenthetical regex"));

/// Collapse a raw label onto the `[a-z0-9]*` comparison alphabet.
///
/// Lowercases, drops parenthesized unit hints like "(mm Hg)", folds the
/// micro sign to `u` and the degree sign to a space, then strips every
/// character that is not an ASCII letter or digit. Because the output
/// alphabet is a fixed point of each step, the function is idempotent.
pub fn normalize_key(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped = PARENTHETICAL_RE.replace_all(&lowered, " ");
    stripped
        .chars()
        .map(|ch| match ch {
            '\u{00b5}' => 'u',
            '\u{00b0}' => ' ',
            other => other,
        })
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_units_and_separators() {
        assert_eq!(normalize_key("Blood Pressure (mm Hg)"), "bloodpressure");
        assert_eq!(normalize_key("Hemoglobin (Hb)"), "hemoglobin");
        assert_eq!(normalize_key("body_mass_index"), "bodymassindex");
        assert_eq!(normalize_key("Neutrophils %"), "neutrophils");
        assert_eq!(normalize_key("Fasting BS > 120?"), "fastingbs120");
    }

    #[test]
    fn folds_symbol_characters() {
        assert_eq!(normalize_key("Temperature (\u{00b0}C)"), "temperature");
        assert_eq!(normalize_key("37 \u{00b0}C"), "37c");
        assert_eq!(normalize_key("\u{00b5}g/dL"), "ugdl");
    }

    #[test]
    fn unbalanced_parentheses_survive() {
        assert_eq!(normalize_key("(all hidden)"), "");
        assert_eq!(normalize_key("a(b(c)d)e"), "ade");
        assert_eq!(normalize_key("(open only"), "openonly");
    }

    #[test]
    fn empty_and_symbol_only_labels_collapse_to_empty() {
        assert_eq!(normalize_key(""), "");
        assert_eq!(normalize_key("  \t "), "");
        assert_eq!(normalize_key("--//--"), "");
    }

    proptest! {
        #[test]
        fn idempotent_on_arbitrary_input(raw in any::<String>()) {
            let once = normalize_key(&raw);
            prop_assert_eq!(normalize_key(&once), once);
        }

        #[test]
        fn output_is_lower_alphanumeric(raw in any::<String>()) {
            prop_assert!(
                normalize_key(&raw)
                    .chars()
                    .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
            );
        }
    }
}
