//! Field-kind driven value conversion.

use std::sync::LazyLock;

use regex::Regex;

use medreport_model::{ChoiceDomain, FieldKind, FieldValue, RawValue};

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+]?\d*\.?\d+(?:[eE][-+]?\d+)?").expect("Invalid number regex")
});

const YES_TOKENS: [&str; 5] = ["yes", "y", "true", "1", "present"];
const NO_TOKENS: [&str; 5] = ["no", "n", "false", "0", "absent"];

/// Largest magnitude at which f64 still represents every integer, so
/// the integral-value collapse stays exact.
const MAX_EXACT_INTEGER: f64 = 9.0e15;

/// Convert a raw report value according to the target field's kind.
///
/// `None` means the value cannot be converted confidently; the field is
/// left unfilled rather than guessed at, and conversion never errors.
pub fn normalize_value(kind: FieldKind, raw: &RawValue) -> Option<FieldValue> {
    // blank text and NaN numbers behave like an absent cell
    match raw {
        RawValue::Missing => return None,
        RawValue::Text(text) if text.trim().is_empty() => return None,
        RawValue::Number(number) if number.is_nan() => return None,
        _ => {}
    }

    match kind {
        FieldKind::Gender => normalize_gender(raw),
        FieldKind::Boolean => normalize_boolean(raw),
        FieldKind::Choice(domain) => normalize_choice(domain, raw),
        FieldKind::Ordinal => {
            let numeric = extract_numeric(raw)?;
            if !numeric.is_finite() {
                return None;
            }
            Some(FieldValue::Text((numeric.round() as i64).to_string()))
        }
        FieldKind::Integer => {
            let numeric = extract_numeric(raw)?;
            if !numeric.is_finite() {
                return None;
            }
            Some(FieldValue::Integer(numeric.round() as i64))
        }
        FieldKind::Float => {
            let numeric = extract_numeric(raw)?;
            if !numeric.is_finite() {
                return None;
            }
            if numeric.fract() == 0.0 && numeric.abs() <= MAX_EXACT_INTEGER {
                Some(FieldValue::Integer(numeric as i64))
            } else {
                Some(FieldValue::Float((numeric * 10_000.0).round() / 10_000.0))
            }
        }
        FieldKind::Text => raw
            .to_text()
            .map(|text| FieldValue::Text(text.trim().to_string())),
    }
}

fn normalize_gender(raw: &RawValue) -> Option<FieldValue> {
    let token = raw.to_text()?.trim().to_lowercase();
    if ["male", "m", "1"].contains(&token.as_str()) {
        return Some(FieldValue::Text("Male".to_string()));
    }
    if ["female", "f", "0"].contains(&token.as_str()) {
        return Some(FieldValue::Text("Female".to_string()));
    }
    // unrecognized but present: pass through title-cased
    Some(FieldValue::Text(title_case(&token)))
}

fn normalize_boolean(raw: &RawValue) -> Option<FieldValue> {
    let token = raw.to_text()?.trim().to_lowercase();
    if YES_TOKENS.contains(&token.as_str()) {
        return Some(FieldValue::Text("Yes".to_string()));
    }
    if NO_TOKENS.contains(&token.as_str()) {
        return Some(FieldValue::Text("No".to_string()));
    }
    None
}

fn normalize_choice(domain: ChoiceDomain, raw: &RawValue) -> Option<FieldValue> {
    let text = raw.to_text()?;
    domain
        .canonical_label(&text)
        .map(|label| FieldValue::Text(label.to_string()))
}

/// Pull the first number out of a raw value. Text is trimmed, commas
/// become decimal points, then the leftmost numeric run (optionally
/// signed, decimal, or scientific) is parsed: "150 mg/dL" gives 150,
/// "28,5" gives 28.5.
fn extract_numeric(raw: &RawValue) -> Option<f64> {
    match raw {
        RawValue::Number(value) => Some(*value),
        RawValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            let candidate = trimmed.replace(',', ".");
            let matched = NUMBER_RE.find(&candidate)?;
            matched.as_str().parse().ok()
        }
        RawValue::Missing => None,
    }
}

/// Uppercase the first letter of every alphabetic run, lowercase the
/// rest, like report headings tend to be written.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                result.extend(ch.to_uppercase());
                at_word_start = false;
            } else {
                result.extend(ch.to_lowercase());
            }
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }
    result
}
