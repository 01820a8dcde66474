pub mod disease;
pub mod normalize;
pub mod registry;
pub mod value;

pub use disease::Disease;
pub use normalize::normalize_key;
pub use registry::{ChoiceDomain, DiseaseForm, FieldDef, FieldKind, disease_form, disease_forms, field_def};
pub use value::{FieldValue, FormValues, RawValue};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_resolves_under_its_own_name() {
        for form in disease_forms() {
            for field in form.fields {
                let found = field_def(form.disease, field.name)
                    .unwrap_or_else(|| panic!("missing {}/{}", form.disease, field.name));
                assert_eq!(found.name, field.name);
                // canonical names normalize onto the comparison alphabet
                assert!(!normalize_key(field.name).is_empty());
            }
        }
    }

    #[test]
    fn alias_tokens_normalize_to_themselves_or_shorter() {
        // registered alias spellings must survive normalization nonempty,
        // otherwise they could never be matched
        for form in disease_forms() {
            for field in form.fields {
                for alias in field.aliases {
                    assert!(
                        !normalize_key(alias).is_empty(),
                        "alias {alias} of {} normalizes to empty",
                        field.name
                    );
                }
            }
        }
    }
}
