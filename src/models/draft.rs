//! Product draft
//!
//! The in-progress, unsaved record of a product being created. Drafts are
//! immutable values: field edits go through a pure reducer, and the derived
//! fields are always recomputed from the raw inputs rather than stored as
//! independently mutable state.

use serde::{Deserialize, Serialize};

use super::category::CategoryChoice;
use super::product::{Measure, ProductCreate, DEFAULT_WASTE_WEIGHT_DESC};
use crate::nutrition::{parse_macro_field, recompute_derived, Derived};

/// An in-progress product record
///
/// Macro fields hold the raw user text; parsing happens on derivation, so an
/// unparseable entry simply contributes zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub subname: String,
    pub category: CategoryChoice,
    pub proteins: String,
    pub fats: String,
    pub carbs: String,
    pub water: String,
}

/// A single field edit applied to a draft
#[derive(Debug, Clone, PartialEq)]
pub enum DraftChange {
    Name(String),
    Subname(String),
    SelectCategory(String),
    TypeCategory(String),
    ClearCategory,
    Proteins(String),
    Fats(String),
    Carbs(String),
    Water(String),
}

impl ProductDraft {
    /// Apply a field edit, producing the next draft
    pub fn apply(&self, change: DraftChange) -> ProductDraft {
        let mut next = self.clone();
        match change {
            DraftChange::Name(value) => next.name = value,
            DraftChange::Subname(value) => next.subname = value,
            DraftChange::SelectCategory(name) => next.category = CategoryChoice::Existing(name),
            DraftChange::TypeCategory(text) => next.category = CategoryChoice::New(text),
            DraftChange::ClearCategory => next.category = CategoryChoice::Unset,
            DraftChange::Proteins(value) => next.proteins = value,
            DraftChange::Fats(value) => next.fats = value,
            DraftChange::Carbs(value) => next.carbs = value,
            DraftChange::Water(value) => next.water = value,
        }
        next
    }

    /// Derived kcal and ash for the current field values
    pub fn derived(&self) -> Derived {
        recompute_derived(&self.proteins, &self.fats, &self.carbs, &self.water)
    }

    /// Resolved category name, empty when none chosen
    pub fn category_name(&self) -> &str {
        self.category.resolve()
    }

    /// Build the creation payload for submission
    pub fn to_create(&self) -> ProductCreate {
        let derived = self.derived();
        ProductCreate {
            name: self.name.clone(),
            subname: self.subname.clone(),
            categoryname: self.category_name().to_string(),
            kcal: derived.kcal,
            main_fats: parse_macro_field(&self.fats),
            main_proteins: parse_macro_field(&self.proteins),
            main_carb: parse_macro_field(&self.carbs),
            main_water: parse_macro_field(&self.water),
            main_ash: derived.ash_grams,
            waste_weight_value: 1.0,
            waste_weight_desc: DEFAULT_WASTE_WEIGHT_DESC.to_string(),
            measures: vec![Measure::per_gram()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> ProductDraft {
        ProductDraft::default()
            .apply(DraftChange::Name("Oats".to_string()))
            .apply(DraftChange::Subname("Rolled".to_string()))
            .apply(DraftChange::SelectCategory("Grains".to_string()))
            .apply(DraftChange::Proteins("10".to_string()))
            .apply(DraftChange::Fats("5".to_string()))
            .apply(DraftChange::Carbs("20".to_string()))
            .apply(DraftChange::Water("60".to_string()))
    }

    #[test]
    fn test_reducer_leaves_previous_draft_untouched() {
        let draft = sample_draft();
        let next = draft.apply(DraftChange::Proteins("50".to_string()));
        assert_eq!(draft.proteins, "10");
        assert_eq!(next.proteins, "50");
    }

    #[test]
    fn test_derived_follows_field_changes() {
        let draft = sample_draft();
        assert!((draft.derived().kcal - 165.0).abs() < 0.001);
        assert!((draft.derived().ash_grams - 5.0).abs() < 0.001);

        let next = draft.apply(DraftChange::Water("0".to_string()));
        assert!((next.derived().ash_grams - 65.0).abs() < 0.001);
    }

    #[test]
    fn test_typed_category_overrides_selection() {
        let draft = sample_draft().apply(DraftChange::TypeCategory("Cereals".to_string()));
        assert_eq!(draft.category_name(), "Cereals");

        let cleared = draft.apply(DraftChange::ClearCategory);
        assert_eq!(cleared.category_name(), "");
    }

    #[test]
    fn test_to_create_carries_derived_and_defaults() {
        let payload = sample_draft().to_create();
        assert_eq!(payload.categoryname, "Grains");
        assert!((payload.kcal - 165.0).abs() < 0.001);
        assert!((payload.main_ash - 5.0).abs() < 0.001);
        assert!((payload.main_water - 60.0).abs() < 0.001);
        assert_eq!(payload.waste_weight_value, 1.0);
        assert_eq!(payload.measures, vec![Measure::per_gram()]);
    }

    #[test]
    fn test_to_create_oversubscribed_macros() {
        let draft = sample_draft()
            .apply(DraftChange::Proteins("50".to_string()))
            .apply(DraftChange::Fats("50".to_string()))
            .apply(DraftChange::Carbs("50".to_string()))
            .apply(DraftChange::Water("0".to_string()));
        let payload = draft.to_create();
        assert!((payload.kcal - 600.0).abs() < 0.001);
        assert_eq!(payload.main_ash, 0.0);
    }
}
