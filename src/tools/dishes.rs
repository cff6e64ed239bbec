//! Dish catalog tools
//!
//! Dish browsing over the GraphQL endpoint.

use serde::Serialize;

use crate::api::ApiClient;
use crate::models::{match_dishes, Dish};
use crate::nutrition::round2;

/// Ingredient line for a dish
#[derive(Debug, Serialize)]
pub struct DishIngredientLine {
    pub product: String,
    pub amount_grams: f64,
    pub cook_coeff: f64,
}

/// Nutrient line for a dish
#[derive(Debug, Serialize)]
pub struct DishNutrientLine {
    pub name: String,
    pub amount: f64,
}

/// Summary of a dish for list results
#[derive(Debug, Serialize)]
pub struct DishSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<DishIngredientLine>,
    pub nutrients: Vec<DishNutrientLine>,
}

/// Display name for a dish nutrient
///
/// The upstream catalog mislabels the calories nutrient as "Кальций"
/// (calcium); it is shown as "Калории".
fn display_nutrient_name(name: &str) -> String {
    if name == "Кальций" {
        "Калории".to_string()
    } else {
        name.to_string()
    }
}

impl From<&Dish> for DishSummary {
    fn from(dish: &Dish) -> Self {
        Self {
            id: dish.id,
            name: dish.name.clone(),
            description: dish.description.clone(),
            ingredients: dish
                .dish_products
                .iter()
                .map(|dp| DishIngredientLine {
                    product: dp.product.name.clone(),
                    amount_grams: dp.amount,
                    cook_coeff: dp.cook_coeff,
                })
                .collect(),
            nutrients: dish
                .dish_nutrients
                .iter()
                .map(|dn| DishNutrientLine {
                    name: display_nutrient_name(&dn.nutrient.name),
                    amount: round2(dn.amount),
                })
                .collect(),
        }
    }
}

/// Response for list_dishes
#[derive(Debug, Serialize)]
pub struct ListDishesResponse {
    pub dishes: Vec<DishSummary>,
    pub total: usize,
}

/// List dishes, optionally narrowed by a search term
///
/// Matching consults the display name only, not descriptions or
/// ingredients.
pub async fn list_dishes(api: &ApiClient, search_term: &str) -> Result<ListDishesResponse, String> {
    let all = api.fetch_dishes().await.map_err(|e| {
        tracing::error!("Failed to fetch dishes: {}", e);
        "Failed to fetch dishes".to_string()
    })?;

    let dishes: Vec<DishSummary> = match_dishes(&all, search_term)
        .map(DishSummary::from)
        .collect();
    let total = dishes.len();

    Ok(ListDishesResponse { dishes, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DishNutrient, DishProduct, NutrientRef, ProductRef};

    #[test]
    fn test_nutrient_display_name_fixup() {
        assert_eq!(display_nutrient_name("Кальций"), "Калории");
        assert_eq!(display_nutrient_name("Белки"), "Белки");
    }

    #[test]
    fn test_summary_rounds_nutrient_amounts() {
        let dish = Dish {
            id: 1,
            name: "Borscht".to_string(),
            description: String::new(),
            dish_products: vec![DishProduct {
                product_id: 7,
                amount: 150.0,
                cook_coeff: 0.9,
                product: ProductRef {
                    name: "Beetroot".to_string(),
                },
            }],
            dish_nutrients: vec![DishNutrient {
                nutrient_id: 2,
                amount: 41.567,
                nutrient: NutrientRef {
                    name: "Белки".to_string(),
                },
            }],
        };
        let summary = DishSummary::from(&dish);
        assert_eq!(summary.ingredients[0].product, "Beetroot");
        assert!((summary.nutrients[0].amount - 41.57).abs() < 0.001);
    }
}
