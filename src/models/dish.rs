//! Dish models
//!
//! Shapes returned by the `dishes` GraphQL query.

use serde::{Deserialize, Serialize};

/// A dish with its composition and nutrient totals
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub dish_products: Vec<DishProduct>,
    #[serde(default)]
    pub dish_nutrients: Vec<DishNutrient>,
}

/// A product used in a dish, with its amount in grams
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishProduct {
    pub product_id: i64,
    pub amount: f64,
    pub cook_coeff: f64,
    pub product: ProductRef,
}

/// Product reference embedded in a dish product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRef {
    pub name: String,
}

/// A nutrient total for a dish
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishNutrient {
    pub nutrient_id: i64,
    pub amount: f64,
    pub nutrient: NutrientRef,
}

/// Nutrient reference embedded in a dish nutrient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientRef {
    pub name: String,
}

/// Match dishes by case-insensitive substring on the display name
///
/// Descriptions and ingredients are not consulted. Restartable and
/// order-preserving, the same policy as category filtering.
pub fn match_dishes<'a>(dishes: &'a [Dish], search_term: &str) -> impl Iterator<Item = &'a Dish> {
    let needle = search_term.to_lowercase();
    dishes
        .iter()
        .filter(move |dish| dish.name.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: i64, name: &str, description: &str) -> Dish {
        Dish {
            id,
            name: name.to_string(),
            description: description.to_string(),
            dish_products: Vec::new(),
            dish_nutrients: Vec::new(),
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let dishes = vec![dish(1, "Borscht", ""), dish(2, "Okroshka", "")];
        let matched: Vec<&str> = match_dishes(&dishes, "BOR").map(|d| d.name.as_str()).collect();
        assert_eq!(matched, vec!["Borscht"]);
    }

    #[test]
    fn test_match_ignores_description() {
        let dishes = vec![
            dish(1, "Borscht", "soup with beets"),
            dish(2, "Solyanka", "thick soup"),
        ];
        // "beets" only appears in a description, so nothing matches
        assert_eq!(match_dishes(&dishes, "beets").count(), 0);
        assert_eq!(match_dishes(&dishes, "soup").count(), 0);
    }

    #[test]
    fn test_match_empty_term_keeps_all_in_order() {
        let dishes = vec![dish(1, "Borscht", ""), dish(2, "Okroshka", "")];
        let all: Vec<i64> = match_dishes(&dishes, "").map(|d| d.id).collect();
        assert_eq!(all, vec![1, 2]);
    }
}
