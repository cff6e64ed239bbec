//! Product models
//!
//! Wire shapes for the remote product catalog endpoints.

use serde::{Deserialize, Serialize};

/// A catalog product as returned by the products endpoint
///
/// Numeric fields default to zero when the record omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub subname: String,
    #[serde(default)]
    pub main_proteins: f64,
    #[serde(default)]
    pub main_fats: f64,
    #[serde(default)]
    pub main_carb: f64,
    #[serde(default)]
    pub main_water: f64,
    #[serde(default)]
    pub main_ash: f64,
    #[serde(default)]
    pub kcal: f64,
}

/// Default waste weight description for a product in its clean form
pub const DEFAULT_WASTE_WEIGHT_DESC: &str = "Продукт в чистом виде";

/// A measure entry attached to a new product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub name: String,
    pub value: f64,
    pub desc: String,
}

impl Measure {
    /// The per-gram measure every new product carries
    pub fn per_gram() -> Self {
        Self {
            name: "грамм".to_string(),
            value: 0.01,
            desc: String::new(),
        }
    }
}

/// Creation payload for a new product
///
/// Field names follow the remote API exactly, including the `Measures`
/// capitalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub subname: String,
    pub categoryname: String,
    pub kcal: f64,
    #[serde(rename = "mainFats")]
    pub main_fats: f64,
    #[serde(rename = "mainProteins")]
    pub main_proteins: f64,
    #[serde(rename = "mainCarb")]
    pub main_carb: f64,
    #[serde(rename = "mainWater")]
    pub main_water: f64,
    #[serde(rename = "mainAsh")]
    pub main_ash: f64,
    #[serde(rename = "wasteWeightValue")]
    pub waste_weight_value: f64,
    #[serde(rename = "wasteWeightDesc")]
    pub waste_weight_desc: String,
    #[serde(rename = "Measures")]
    pub measures: Vec<Measure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_tolerates_missing_fields() {
        let product: Product =
            serde_json::from_str(r#"{"id": 3, "name": "Oats", "mainProteins": 12.5}"#).unwrap();
        assert_eq!(product.name, "Oats");
        assert_eq!(product.main_proteins, 12.5);
        assert_eq!(product.main_fats, 0.0);
        assert_eq!(product.subname, "");
    }

    #[test]
    fn test_create_payload_wire_names() {
        let payload = ProductCreate {
            name: "Oats".to_string(),
            subname: "Rolled".to_string(),
            categoryname: "Grains".to_string(),
            kcal: 165.0,
            main_fats: 5.0,
            main_proteins: 10.0,
            main_carb: 20.0,
            main_water: 60.0,
            main_ash: 5.0,
            waste_weight_value: 1.0,
            waste_weight_desc: DEFAULT_WASTE_WEIGHT_DESC.to_string(),
            measures: vec![Measure::per_gram()],
        };

        let json = serde_json::to_value(&payload).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "name",
            "subname",
            "categoryname",
            "kcal",
            "mainFats",
            "mainProteins",
            "mainCarb",
            "mainWater",
            "mainAsh",
            "wasteWeightValue",
            "wasteWeightDesc",
            "Measures",
        ] {
            assert!(object.contains_key(key), "missing wire field {}", key);
        }
        assert_eq!(json["Measures"][0]["value"], 0.01);
    }
}
