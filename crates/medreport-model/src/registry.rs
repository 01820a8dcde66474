//! Canonical field registry for the four disease forms.
//!
//! Each form lists its input fields with the alias tokens commonly seen in
//! real lab reports, the display label used by the form UI, and the kind
//! that drives value conversion. Every field is also resolvable under its
//! own (normalized) name, so alias lists only carry true synonyms.

use std::fmt;

use crate::disease::Disease;
use crate::normalize::normalize_key;

/// How a raw report value is converted for a given field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Male/Female coding: {male, m, 1} and {female, f, 0}; other
    /// nonempty text passes through title-cased.
    Gender,
    /// Yes/No answers: {yes, y, true, 1, present} and {no, n, false, 0,
    /// absent}; anything else is dropped.
    Boolean,
    /// One label out of a small controlled vocabulary.
    Choice(ChoiceDomain),
    /// Small numeric code rendered as text (e.g. "3") for encoder inputs.
    Ordinal,
    /// Whole-number measurement; values round to the nearest integer.
    Integer,
    /// Continuous measurement; integral values collapse to integers,
    /// fractional ones keep at most four decimal places.
    Float,
    /// Free text, passed through trimmed.
    Text,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Gender => write!(f, "gender"),
            FieldKind::Boolean => write!(f, "boolean"),
            FieldKind::Choice(domain) => write!(f, "choice ({})", domain.as_str()),
            FieldKind::Ordinal => write!(f, "ordinal"),
            FieldKind::Integer => write!(f, "integer"),
            FieldKind::Float => write!(f, "float"),
            FieldKind::Text => write!(f, "text"),
        }
    }
}

/// Controlled vocabularies used by the fever form's categorical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceDomain {
    Diet,
    Activity,
    BloodPressure,
    Medication,
}

const DIET_SYNONYMS: &[(&str, &str)] = &[
    ("vegan", "Vegan"),
    ("vegetarian", "Vegetarian"),
    ("nonvegetarian", "Non-Vegetarian"),
    ("nonveg", "Non-Vegetarian"),
    // common report misspelling
    ("nonvegeterian", "Non-Vegetarian"),
];

const ACTIVITY_SYNONYMS: &[(&str, &str)] = &[
    ("sedentary", "Sedentary"),
    ("moderate", "Moderate"),
    ("active", "Active"),
];

const BLOOD_PRESSURE_SYNONYMS: &[(&str, &str)] = &[
    ("normal", "Normal"),
    ("low", "Low"),
    ("high", "High"),
];

const MEDICATION_SYNONYMS: &[(&str, &str)] = &[
    ("none", "None"),
    ("na", "None"),
    ("ibuprofen", "Ibuprofen"),
    ("paracetamol", "Paracetamol"),
    ("acetaminophen", "Paracetamol"),
    ("other", "Other"),
];

impl ChoiceDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChoiceDomain::Diet => "diet",
            ChoiceDomain::Activity => "activity",
            ChoiceDomain::BloodPressure => "blood pressure",
            ChoiceDomain::Medication => "medication",
        }
    }

    /// (normalized token, canonical label) pairs for this vocabulary.
    pub fn synonyms(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            ChoiceDomain::Diet => DIET_SYNONYMS,
            ChoiceDomain::Activity => ACTIVITY_SYNONYMS,
            ChoiceDomain::BloodPressure => BLOOD_PRESSURE_SYNONYMS,
            ChoiceDomain::Medication => MEDICATION_SYNONYMS,
        }
    }

    /// Resolve a raw report value to its canonical label, if it normalizes
    /// onto one of this vocabulary's tokens.
    pub fn canonical_label(&self, raw: &str) -> Option<&'static str> {
        let normalized = normalize_key(raw);
        if normalized.is_empty() {
            return None;
        }
        self.synonyms()
            .iter()
            .find(|(token, _)| *token == normalized)
            .map(|(_, label)| *label)
    }
}

/// One input field of a disease form.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// Canonical field name, used as the JSON key in autofill output.
    pub name: &'static str,
    /// Display label as shown on the form.
    pub label: &'static str,
    pub kind: FieldKind,
    /// Synonym tokens seen in real reports (pre-normalization spelling).
    pub aliases: &'static [&'static str],
}

/// All input fields of one disease form, in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct DiseaseForm {
    pub disease: Disease,
    pub fields: &'static [FieldDef],
}

const DIABETES_FIELDS: &[FieldDef] = &[
    FieldDef {
        name: "gender",
        label: "Gender",
        kind: FieldKind::Gender,
        aliases: &["gender", "sex"],
    },
    FieldDef {
        name: "age",
        label: "Age",
        kind: FieldKind::Float,
        aliases: &["age", "patientage"],
    },
    FieldDef {
        name: "bmi",
        label: "BMI",
        kind: FieldKind::Float,
        aliases: &["bmi", "bodymassindex", "body_mass_index"],
    },
    FieldDef {
        name: "glucose",
        label: "Glucose",
        kind: FieldKind::Float,
        aliases: &["glucose", "fastingglucose", "bloodglucose"],
    },
    FieldDef {
        name: "blood_pressure",
        label: "Blood Pressure",
        kind: FieldKind::Float,
        aliases: &["bloodpressure", "systolic", "bp"],
    },
    FieldDef {
        name: "pregnancies",
        label: "Pregnancies",
        kind: FieldKind::Integer,
        aliases: &["pregnancies", "pregnancycount"],
    },
    FieldDef {
        name: "skin_thickness",
        label: "Skin Thickness",
        kind: FieldKind::Float,
        aliases: &["skinthickness", "skinfold"],
    },
    FieldDef {
        name: "insulin",
        label: "Insulin",
        kind: FieldKind::Float,
        aliases: &["insulin", "fastinginsulin"],
    },
    FieldDef {
        name: "diabetes_pedigree_function",
        label: "Diabetes Pedigree Function",
        kind: FieldKind::Float,
        aliases: &["diabetespedigreefunction", "dpf", "pedigree"],
    },
];

const HEART_FIELDS: &[FieldDef] = &[
    FieldDef {
        name: "gender",
        label: "Sex",
        kind: FieldKind::Gender,
        aliases: &["gender", "sex"],
    },
    FieldDef {
        name: "age",
        label: "Age",
        kind: FieldKind::Float,
        aliases: &["age", "patientage"],
    },
    FieldDef {
        name: "resting_bp",
        label: "Resting BP",
        kind: FieldKind::Float,
        aliases: &["restingbp", "restingbloodpressure", "bloodpressure"],
    },
    FieldDef {
        name: "cholesterol",
        label: "Cholesterol",
        kind: FieldKind::Float,
        aliases: &["cholesterol", "serumcholesterol", "chol"],
    },
    FieldDef {
        name: "chest_pain_type",
        label: "Chest Pain Type",
        kind: FieldKind::Ordinal,
        aliases: &["chestpaintype", "cpt", "cp"],
    },
    FieldDef {
        name: "fasting_bs",
        label: "Fasting BS > 120?",
        kind: FieldKind::Boolean,
        aliases: &["fastingbs", "fastingbloodsugar", "fbs"],
    },
    FieldDef {
        name: "resting_ecg",
        label: "Resting ECG",
        kind: FieldKind::Ordinal,
        aliases: &["restingecg", "ecg"],
    },
    FieldDef {
        name: "max_heart_rate",
        label: "Max Heart Rate",
        kind: FieldKind::Float,
        aliases: &["maxheartrate", "maxhr", "heartrate"],
    },
    FieldDef {
        name: "exercise_angina",
        label: "Exercise Angina",
        kind: FieldKind::Boolean,
        aliases: &["exerciseangina", "exang"],
    },
    FieldDef {
        name: "st_depression",
        label: "ST Depression",
        kind: FieldKind::Float,
        aliases: &["stdepression", "oldpeak"],
    },
    FieldDef {
        name: "slope",
        label: "Slope of ST",
        kind: FieldKind::Ordinal,
        aliases: &["slope", "stslope"],
    },
    FieldDef {
        name: "major_vessels",
        label: "Major Vessels (ca)",
        kind: FieldKind::Integer,
        aliases: &["majorvessels", "ca"],
    },
    FieldDef {
        name: "thal",
        label: "Thal",
        kind: FieldKind::Ordinal,
        aliases: &["thal", "thalassemia"],
    },
];

const FEVER_FIELDS: &[FieldDef] = &[
    FieldDef {
        name: "age",
        label: "Age",
        kind: FieldKind::Float,
        aliases: &["age", "patientage"],
    },
    FieldDef {
        name: "bmi",
        label: "BMI",
        kind: FieldKind::Float,
        aliases: &["bmi", "bodymassindex", "body_mass_index"],
    },
    FieldDef {
        name: "temperature",
        label: "Temperature (\u{00b0}C)",
        kind: FieldKind::Float,
        aliases: &["temperature", "bodytemperature", "temp"],
    },
    FieldDef {
        name: "humidity",
        label: "Humidity (%)",
        kind: FieldKind::Float,
        aliases: &["humidity", "humiditypercent"],
    },
    FieldDef {
        name: "air_quality",
        label: "Air Quality Index",
        kind: FieldKind::Float,
        aliases: &["airquality", "airqualityindex", "aqi"],
    },
    FieldDef {
        name: "heart_rate",
        label: "Heart Rate",
        kind: FieldKind::Float,
        aliases: &["heartrate", "pulse"],
    },
    FieldDef {
        name: "gender",
        label: "Gender",
        kind: FieldKind::Gender,
        aliases: &["gender", "sex"],
    },
    FieldDef {
        name: "headache",
        label: "Headache",
        kind: FieldKind::Boolean,
        aliases: &["headache"],
    },
    FieldDef {
        name: "body_ache",
        label: "Body Ache",
        kind: FieldKind::Boolean,
        aliases: &["bodyache", "bodypain"],
    },
    FieldDef {
        name: "fatigue",
        label: "Fatigue",
        kind: FieldKind::Boolean,
        aliases: &["fatigue", "tiredness"],
    },
    FieldDef {
        name: "chronic_conditions",
        label: "Chronic Conditions",
        kind: FieldKind::Boolean,
        aliases: &["chronicconditions", "chronic"],
    },
    FieldDef {
        name: "allergies",
        label: "Allergies",
        kind: FieldKind::Boolean,
        aliases: &["allergies", "allergy"],
    },
    FieldDef {
        name: "smoking_history",
        label: "Smoking History",
        kind: FieldKind::Boolean,
        aliases: &["smokinghistory", "smoker", "smoking"],
    },
    FieldDef {
        name: "alcohol_consumption",
        label: "Alcohol Consumption",
        kind: FieldKind::Boolean,
        aliases: &["alcoholconsumption", "alcohol"],
    },
    FieldDef {
        name: "physical_activity",
        label: "Physical Activity",
        kind: FieldKind::Choice(ChoiceDomain::Activity),
        aliases: &["physicalactivity", "activitylevel"],
    },
    FieldDef {
        name: "diet_type",
        label: "Diet Type",
        kind: FieldKind::Choice(ChoiceDomain::Diet),
        aliases: &["diettype", "diet"],
    },
    FieldDef {
        name: "blood_pressure",
        label: "Blood Pressure",
        kind: FieldKind::Choice(ChoiceDomain::BloodPressure),
        aliases: &["bloodpressure", "bp"],
    },
    FieldDef {
        name: "previous_medication",
        label: "Previous Medication",
        kind: FieldKind::Choice(ChoiceDomain::Medication),
        aliases: &["previousmedication", "medication"],
    },
];

const ANEMIA_FIELDS: &[FieldDef] = &[
    FieldDef {
        name: "gender",
        label: "Gender",
        kind: FieldKind::Gender,
        aliases: &["gender", "sex"],
    },
    FieldDef {
        name: "rbc",
        label: "RBC",
        kind: FieldKind::Float,
        aliases: &["rbc", "redbloodcells"],
    },
    FieldDef {
        name: "hemoglobin",
        label: "Hemoglobin (Hb)",
        kind: FieldKind::Float,
        aliases: &["hemoglobin", "hb"],
    },
    FieldDef {
        name: "hematocrit",
        label: "Hematocrit (HCT)",
        kind: FieldKind::Float,
        aliases: &["hematocrit", "hct"],
    },
    FieldDef {
        name: "mcv",
        label: "MCV",
        kind: FieldKind::Float,
        aliases: &["mcv"],
    },
    FieldDef {
        name: "mch",
        label: "MCH",
        kind: FieldKind::Float,
        aliases: &["mch"],
    },
    FieldDef {
        name: "mchc",
        label: "MCHC",
        kind: FieldKind::Float,
        aliases: &["mchc"],
    },
    FieldDef {
        name: "wbc",
        label: "WBC",
        kind: FieldKind::Float,
        aliases: &["wbc", "whitebloodcells"],
    },
    FieldDef {
        name: "platelets",
        label: "Platelets",
        kind: FieldKind::Float,
        aliases: &["platelets", "plateletcount"],
    },
    FieldDef {
        name: "rdw",
        label: "RDW",
        kind: FieldKind::Float,
        aliases: &["rdw"],
    },
    FieldDef {
        name: "pdw",
        label: "PDW",
        kind: FieldKind::Float,
        aliases: &["pdw"],
    },
    FieldDef {
        name: "pct",
        label: "PCT",
        kind: FieldKind::Float,
        aliases: &["pct", "plateletcrit"],
    },
    FieldDef {
        name: "lymphocytes",
        label: "Lymphocytes",
        kind: FieldKind::Float,
        aliases: &["lymphocytes", "lymphs"],
    },
    FieldDef {
        name: "neutrophils_pct",
        label: "Neutrophils %",
        kind: FieldKind::Float,
        aliases: &["neutrophilspct", "neutrophilspercent"],
    },
    FieldDef {
        name: "neutrophils_num",
        label: "Neutrophils #",
        kind: FieldKind::Float,
        aliases: &["neutrophilsnum", "neutrophilsabsolute", "neutrophils"],
    },
];

static FORMS: [DiseaseForm; 4] = [
    DiseaseForm {
        disease: Disease::Diabetes,
        fields: DIABETES_FIELDS,
    },
    DiseaseForm {
        disease: Disease::Heart,
        fields: HEART_FIELDS,
    },
    DiseaseForm {
        disease: Disease::Fever,
        fields: FEVER_FIELDS,
    },
    DiseaseForm {
        disease: Disease::Anemia,
        fields: ANEMIA_FIELDS,
    },
];

/// All disease forms in registration order.
pub fn disease_forms() -> &'static [DiseaseForm] {
    &FORMS
}

pub fn disease_form(disease: Disease) -> &'static DiseaseForm {
    match disease {
        Disease::Diabetes => &FORMS[0],
        Disease::Heart => &FORMS[1],
        Disease::Fever => &FORMS[2],
        Disease::Anemia => &FORMS[3],
    }
}

/// Look up a field by canonical name within one disease form.
pub fn field_def(disease: Disease, name: &str) -> Option<&'static FieldDef> {
    disease_form(disease)
        .fields
        .iter()
        .find(|field| field.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms_are_registered_in_order() {
        let order: Vec<Disease> = disease_forms().iter().map(|form| form.disease).collect();
        assert_eq!(order, Disease::ALL);
        assert_eq!(disease_form(Disease::Diabetes).fields.len(), 9);
        assert_eq!(disease_form(Disease::Heart).fields.len(), 13);
        assert_eq!(disease_form(Disease::Fever).fields.len(), 18);
        assert_eq!(disease_form(Disease::Anemia).fields.len(), 15);
    }

    #[test]
    fn kinds_match_conversion_rules() {
        assert_eq!(
            field_def(Disease::Diabetes, "pregnancies").unwrap().kind,
            FieldKind::Integer
        );
        assert_eq!(
            field_def(Disease::Heart, "thal").unwrap().kind,
            FieldKind::Ordinal
        );
        assert_eq!(
            field_def(Disease::Heart, "resting_ecg").unwrap().kind,
            FieldKind::Ordinal
        );
        assert_eq!(
            field_def(Disease::Heart, "major_vessels").unwrap().kind,
            FieldKind::Integer
        );
        assert_eq!(
            field_def(Disease::Heart, "fasting_bs").unwrap().kind,
            FieldKind::Boolean
        );
        assert_eq!(
            field_def(Disease::Fever, "blood_pressure").unwrap().kind,
            FieldKind::Choice(ChoiceDomain::BloodPressure)
        );
        // diabetes reads blood pressure as a measurement, fever as a category
        assert_eq!(
            field_def(Disease::Diabetes, "blood_pressure").unwrap().kind,
            FieldKind::Float
        );
        for disease in Disease::ALL {
            assert_eq!(
                field_def(disease, "gender").unwrap().kind,
                FieldKind::Gender
            );
        }
    }

    #[test]
    fn choice_lookup_normalizes_raw_values() {
        assert_eq!(
            ChoiceDomain::Diet.canonical_label("Non-Veg"),
            Some("Non-Vegetarian")
        );
        assert_eq!(
            ChoiceDomain::Diet.canonical_label("NONVEGETERIAN"),
            Some("Non-Vegetarian")
        );
        assert_eq!(
            ChoiceDomain::Medication.canonical_label("N/A"),
            Some("None")
        );
        assert_eq!(
            ChoiceDomain::Medication.canonical_label("Acetaminophen"),
            Some("Paracetamol")
        );
        assert_eq!(ChoiceDomain::Activity.canonical_label("brisk"), None);
        assert_eq!(ChoiceDomain::BloodPressure.canonical_label(""), None);
    }

    #[test]
    fn labels_carry_unit_hints() {
        assert_eq!(
            field_def(Disease::Anemia, "hemoglobin").unwrap().label,
            "Hemoglobin (Hb)"
        );
        assert_eq!(
            field_def(Disease::Heart, "fasting_bs").unwrap().label,
            "Fasting BS > 120?"
        );
        assert_eq!(
            field_def(Disease::Fever, "temperature").unwrap().label,
            "Temperature (\u{00b0}C)"
        );
    }

    #[test]
    fn unknown_fields_are_absent() {
        assert!(field_def(Disease::Anemia, "glucose").is_none());
        assert!(field_def(Disease::Diabetes, "thal").is_none());
    }
}
