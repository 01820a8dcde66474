use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Disease risk models that a parsed lab report can feed.
/// Each variant owns one autofill form in the registry; the declaration
/// order here is the registration order used for alias resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disease {
    /// Pima-style diabetes risk inputs (glucose, bmi, pregnancies, ...)
    Diabetes,
    /// Heart disease risk inputs (cholesterol, resting bp, st depression, ...)
    Heart,
    /// Fever triage inputs (vitals plus symptom and lifestyle answers)
    Fever,
    /// Anemia screen inputs (CBC analytes: hemoglobin, hematocrit, ...)
    Anemia,
}

impl Disease {
    /// All diseases in registration order.
    pub const ALL: [Disease; 4] = [
        Disease::Diabetes,
        Disease::Heart,
        Disease::Fever,
        Disease::Anemia,
    ];

    /// Returns the stable lowercase tag used as the JSON result key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Disease::Diabetes => "diabetes",
            Disease::Heart => "heart",
            Disease::Fever => "fever",
            Disease::Anemia => "anemia",
        }
    }

    /// Human-readable name for tables and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Disease::Diabetes => "Diabetes",
            Disease::Heart => "Heart Disease",
            Disease::Fever => "Fever",
            Disease::Anemia => "Anemia",
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Disease {
    type Err = String;

    /// Parse a disease tag (case-insensitive; accepts the display name too).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "diabetes" => Ok(Disease::Diabetes),
            "heart" | "heart disease" => Ok(Disease::Heart),
            "fever" => Ok(Disease::Fever),
            "anemia" => Ok(Disease::Anemia),
            _ => Err(format!("Unknown disease: {}", s)),
        }
    }
}
