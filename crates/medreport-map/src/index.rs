//! Alias index and field resolution.

use std::collections::BTreeMap;

use medreport_model::{Disease, FieldKind, disease_forms, normalize_key};

/// One (disease, field) destination for a resolved token, with the kind
/// that drives value conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTarget {
    pub disease: Disease,
    pub field: &'static str,
    pub kind: FieldKind,
}

/// Immutable token index built once from the field registry.
///
/// Entries keep registration order (diseases in declaration order,
/// fields in form order, each field's own name after its aliases)
/// because the substring fallback breaks length ties in favor of the
/// earliest registered token. A shared token like `bloodpressure`
/// carries one target per interested disease.
#[derive(Debug)]
pub struct AliasIndex {
    entries: Vec<AliasEntry>,
    by_token: BTreeMap<String, usize>,
}

#[derive(Debug)]
struct AliasEntry {
    token: String,
    targets: Vec<FieldTarget>,
}

impl AliasIndex {
    /// Build the index from the registry. Each field registers its
    /// alias spelling list plus its own canonical name.
    pub fn build() -> Self {
        let mut index = AliasIndex {
            entries: Vec::new(),
            by_token: BTreeMap::new(),
        };
        for form in disease_forms() {
            for field in form.fields {
                let target = FieldTarget {
                    disease: form.disease,
                    field: field.name,
                    kind: field.kind,
                };
                for alias in field.aliases.iter().copied().chain([field.name]) {
                    index.register(&normalize_key(alias), target);
                }
            }
        }
        index
    }

    fn register(&mut self, token: &str, target: FieldTarget) {
        if token.is_empty() {
            return;
        }
        let slot = match self.by_token.get(token) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.by_token.insert(token.to_string(), slot);
                self.entries.push(AliasEntry {
                    token: token.to_string(),
                    targets: Vec::new(),
                });
                slot
            }
        };
        let targets = &mut self.entries[slot].targets;
        if !targets.contains(&target) {
            targets.push(target);
        }
    }

    /// Resolve a normalized key to its field targets.
    ///
    /// An exact token match wins. Otherwise the longest registered token
    /// appearing as a substring of the key is used, so a key like
    /// `fastingbloodglucosemgdl` still reaches `bloodglucose`; ties keep
    /// the earliest registered token. The fallback trades precision for
    /// recall: `glucosetolerance` also resolves to `glucose`. An empty
    /// slice means the key matches no known field.
    pub fn resolve(&self, normalized_key: &str) -> &[FieldTarget] {
        if normalized_key.is_empty() {
            return &[];
        }
        if let Some(&slot) = self.by_token.get(normalized_key) {
            return &self.entries[slot].targets;
        }
        let mut best: &[FieldTarget] = &[];
        let mut best_len = 0;
        for entry in &self.entries {
            if entry.token.len() > best_len && normalized_key.contains(entry.token.as_str()) {
                best = &entry.targets;
                best_len = entry.token.len();
            }
        }
        best
    }

    /// Number of distinct tokens in the index.
    pub fn token_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for AliasIndex {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(targets: &[FieldTarget]) -> Vec<(Disease, &'static str)> {
        targets
            .iter()
            .map(|target| (target.disease, target.field))
            .collect()
    }

    #[test]
    fn exact_match_fans_out_in_registration_order() {
        let index = AliasIndex::build();
        assert_eq!(
            pairs(index.resolve("bloodpressure")),
            vec![
                (Disease::Diabetes, "blood_pressure"),
                (Disease::Heart, "resting_bp"),
                (Disease::Fever, "blood_pressure"),
            ]
        );
        assert_eq!(
            pairs(index.resolve("gender")),
            vec![
                (Disease::Diabetes, "gender"),
                (Disease::Heart, "gender"),
                (Disease::Fever, "gender"),
                (Disease::Anemia, "gender"),
            ]
        );
    }

    #[test]
    fn canonical_names_resolve_like_aliases() {
        let index = AliasIndex::build();
        assert_eq!(
            pairs(index.resolve("neutrophilspct")),
            vec![(Disease::Anemia, "neutrophils_pct")]
        );
        assert_eq!(
            pairs(index.resolve("diabetespedigreefunction")),
            vec![(Disease::Diabetes, "diabetes_pedigree_function")]
        );
    }

    #[test]
    fn substring_fallback_prefers_the_longest_token() {
        let index = AliasIndex::build();
        // "bloodglucose" (12 chars) beats "glucose" (7); the heart form
        // has no alias inside this key at all
        assert_eq!(
            pairs(index.resolve("fastingbloodglucosemgdl")),
            vec![(Disease::Diabetes, "glucose")]
        );
    }

    #[test]
    fn substring_fallback_trades_precision_for_recall() {
        let index = AliasIndex::build();
        assert_eq!(
            pairs(index.resolve("glucosetolerance")),
            vec![(Disease::Diabetes, "glucose")]
        );
    }

    #[test]
    fn unknown_keys_resolve_to_nothing() {
        let index = AliasIndex::build();
        assert!(index.resolve("ferritin").is_empty());
        assert!(index.resolve("").is_empty());
    }

    #[test]
    fn duplicate_alias_spellings_register_once() {
        let index = AliasIndex::build();
        // "bodymassindex" and "body_mass_index" normalize to one token;
        // each interested disease appears once
        assert_eq!(
            pairs(index.resolve("bodymassindex")),
            vec![(Disease::Diabetes, "bmi"), (Disease::Fever, "bmi")]
        );
    }
}
