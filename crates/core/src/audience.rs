//! Target audience derivation.

use crate::{Medication, SubCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Read-only summary of who the current selection targets.
///
/// Carries display names only, in the order the condition lists them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetAudience {
    pub condition: String,
    pub subcategories: Vec<String>,
    pub medications: Vec<String>,
}

impl TargetAudience {
    /// Derive the summary for one condition.
    ///
    /// Subcategories are an inclusion filter: an empty `selected` set applies no filter and
    /// keeps every subcategory. Medications are an exclusion filter: every medication whose ID
    /// is not in `excluded` is kept, so an empty set also keeps everything.
    pub fn derive(
        condition: &str,
        sub_categories: &[SubCategory],
        medications: &[Medication],
        selected: &BTreeSet<i64>,
        excluded: &BTreeSet<i64>,
    ) -> Self {
        let subcategories = sub_categories
            .iter()
            .filter(|sub| selected.is_empty() || selected.contains(&sub.id))
            .map(|sub| sub.name.clone())
            .collect();

        let medications = medications
            .iter()
            .filter(|med| !excluded.contains(&med.id))
            .map(|med| med.name.clone())
            .collect();

        Self {
            condition: condition.to_string(),
            subcategories,
            medications,
        }
    }
}
