//! Category model and matching
//!
//! Categories come from the remote catalog as (name, usage count) pairs.
//! They are read-only: only ever matched against user text, never mutated.

use serde::{Deserialize, Serialize};

/// A known category with its usage count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    pub category: String,
    pub count: i64,
}

/// Category selection state for a product draft
///
/// The creation flow distinguishes three states: nothing chosen yet, an
/// existing category picked from the suggestions, and free text naming a
/// new category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum CategoryChoice {
    #[default]
    Unset,
    Existing(String),
    New(String),
}

impl CategoryChoice {
    /// The resolved category name, empty when unset
    pub fn resolve(&self) -> &str {
        match self {
            CategoryChoice::Unset => "",
            CategoryChoice::Existing(name) => name,
            CategoryChoice::New(text) => text,
        }
    }

    /// Build a choice from a selected category and free text
    ///
    /// Non-empty free text wins: typing a new category overrides a previous
    /// selection.
    pub fn from_fields(selected: &str, free_text: &str) -> Self {
        if !free_text.is_empty() {
            CategoryChoice::New(free_text.to_string())
        } else if !selected.is_empty() {
            CategoryChoice::Existing(selected.to_string())
        } else {
            CategoryChoice::Unset
        }
    }
}

/// Resolve the category name for submission
///
/// Non-empty free text takes precedence over a previously selected category.
/// An empty result means no category was chosen; callers treat that as a
/// validation failure before submission.
pub fn resolve_category<'a>(selected: &'a str, free_text: &'a str) -> &'a str {
    if !free_text.is_empty() {
        free_text
    } else {
        selected
    }
}

/// Filter categories by case-insensitive substring match on the name
///
/// Restartable: each call re-filters the full set, preserving its order.
/// The set itself is never mutated.
pub fn filter_categories<'a>(
    known: &'a [CategorySuggestion],
    search_term: &str,
) -> impl Iterator<Item = &'a CategorySuggestion> {
    let needle = search_term.to_lowercase();
    known
        .iter()
        .filter(move |suggestion| suggestion.category.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> Vec<CategorySuggestion> {
        vec![
            CategorySuggestion {
                category: "Fruit".to_string(),
                count: 12,
            },
            CategorySuggestion {
                category: "Meat".to_string(),
                count: 7,
            },
            CategorySuggestion {
                category: "Dried fruit".to_string(),
                count: 3,
            },
        ]
    }

    #[test]
    fn test_resolve_free_text_wins() {
        assert_eq!(resolve_category("", "NewCat"), "NewCat");
        assert_eq!(resolve_category("Old", "NewCat"), "NewCat");
    }

    #[test]
    fn test_resolve_falls_back_to_selected() {
        assert_eq!(resolve_category("Old", ""), "Old");
        assert_eq!(resolve_category("", ""), "");
    }

    #[test]
    fn test_choice_precedence_matches_resolve() {
        assert_eq!(CategoryChoice::from_fields("Old", "New").resolve(), "New");
        assert_eq!(CategoryChoice::from_fields("Old", "").resolve(), "Old");
        assert_eq!(CategoryChoice::from_fields("", ""), CategoryChoice::Unset);
    }

    #[test]
    fn test_filter_case_insensitive_substring() {
        let known = known();
        let matched: Vec<&str> = filter_categories(&known, "fr")
            .map(|s| s.category.as_str())
            .collect();
        assert_eq!(matched, vec!["Fruit", "Dried fruit"]);
    }

    #[test]
    fn test_filter_preserves_order_and_source() {
        let known = known();
        let empty_term: Vec<&str> = filter_categories(&known, "")
            .map(|s| s.category.as_str())
            .collect();
        assert_eq!(empty_term, vec!["Fruit", "Meat", "Dried fruit"]);
        // Restartable: a second pass over the same set matches again
        assert_eq!(filter_categories(&known, "meat").count(), 1);
        assert_eq!(known.len(), 3);
    }

    #[test]
    fn test_filter_no_match() {
        let known = known();
        assert_eq!(filter_categories(&known, "zzz").count(), 0);
    }
}
