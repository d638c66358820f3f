//! Selection state for the targeting form.
//!
//! `Selection` is the single state object behind the form. It changes only through the
//! transitions below, each of which is a plain synchronous function of the previous state and
//! one user event:
//!
//! - [`Selection::select_condition`] replaces the working lists and clears both sets
//! - [`Selection::toggle_sub_category`] flips inclusion of a subcategory
//! - [`Selection::toggle_medication`] flips exclusion of a medication
//!
//! The summary is derived on demand by [`Selection::target_audience`] and never stored.

use crate::{Catalog, Condition, Medication, SubCategory, TargetAudience};
use std::collections::BTreeSet;

/// A user interaction with the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A condition was picked from the dropdown; `None` means the placeholder.
    SelectCondition(Option<i64>),
    ToggleSubCategory(i64),
    ToggleMedication(i64),
}

/// Session-scoped selection state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    condition: Option<Condition>,
    sub_categories: Vec<SubCategory>,
    medications: Vec<Medication>,
    selected_sub_category_ids: BTreeSet<i64>,
    excluded_medication_ids: BTreeSet<i64>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event against `catalog`.
    pub fn apply(&mut self, catalog: &Catalog, event: Event) {
        match event {
            Event::SelectCondition(id) => self.select_condition(catalog, id),
            Event::ToggleSubCategory(id) => self.toggle_sub_category(id),
            Event::ToggleMedication(id) => self.toggle_medication(id),
        }
    }

    /// Make the condition with `id` active.
    ///
    /// The working subcategory and medication lists are replaced with the condition's own
    /// lists, and both selection sets are cleared. An `id` that is absent from the catalog
    /// leaves no condition selected.
    pub fn select_condition(&mut self, catalog: &Catalog, id: Option<i64>) {
        let condition = id.and_then(|id| catalog.find(id)).cloned();

        match &condition {
            Some(c) => {
                self.sub_categories = c.sub_categories.clone();
                self.medications = c.medications.clone();
            }
            None => {
                self.sub_categories.clear();
                self.medications.clear();
            }
        }
        self.condition = condition;
        self.selected_sub_category_ids.clear();
        self.excluded_medication_ids.clear();
    }

    /// Select the condition named by a raw form value.
    ///
    /// Empty or non-numeric values select nothing, as does an unknown identifier.
    pub fn select_condition_value(&mut self, catalog: &Catalog, value: &str) {
        self.select_condition(catalog, parse_condition_value(value));
    }

    pub fn toggle_sub_category(&mut self, id: i64) {
        toggle(&mut self.selected_sub_category_ids, id);
    }

    pub fn toggle_medication(&mut self, id: i64) {
        toggle(&mut self.excluded_medication_ids, id);
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// Working subcategory list of the selected condition.
    pub fn sub_categories(&self) -> &[SubCategory] {
        &self.sub_categories
    }

    /// Working medication list of the selected condition.
    pub fn medications(&self) -> &[Medication] {
        &self.medications
    }

    pub fn selected_sub_category_ids(&self) -> &BTreeSet<i64> {
        &self.selected_sub_category_ids
    }

    pub fn excluded_medication_ids(&self) -> &BTreeSet<i64> {
        &self.excluded_medication_ids
    }

    pub fn is_sub_category_selected(&self, id: i64) -> bool {
        self.selected_sub_category_ids.contains(&id)
    }

    pub fn is_medication_excluded(&self, id: i64) -> bool {
        self.excluded_medication_ids.contains(&id)
    }

    /// Derive the target audience summary, or `None` when no condition is selected.
    pub fn target_audience(&self) -> Option<TargetAudience> {
        let condition = self.condition.as_ref()?;
        Some(TargetAudience::derive(
            &condition.name,
            &self.sub_categories,
            &self.medications,
            &self.selected_sub_category_ids,
            &self.excluded_medication_ids,
        ))
    }
}

fn toggle(set: &mut BTreeSet<i64>, id: i64) {
    if !set.remove(&id) {
        set.insert(id);
    }
}

/// Parse the value submitted by the condition dropdown.
///
/// Reads an optionally signed run of leading digits after any leading whitespace and ignores
/// whatever follows, so `"12abc"` names condition 12. A value without leading digits selects
/// nothing.
pub fn parse_condition_value(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }

    let sign_len = value.len() - unsigned.len();
    value[..sign_len + digits].parse().ok()
}
