//! GraphQL plumbing
//!
//! The dishes query goes over a plain HTTP POST with a serde envelope.
//! Errors reported by the endpoint map to `ApiError::GraphQl`.

use serde::{Deserialize, Serialize};

use crate::api::client::{ApiError, ApiResult};
use crate::models::Dish;

/// The dishes query document
pub const DISHES_QUERY: &str = r#"
query GetAllDishProducts {
  dishes {
    id
    name
    description
    dishProducts {
      productId
      amount
      cookCoeff
      product {
        name
      }
    }
    dishNutrients {
      nutrientId
      amount
      nutrient {
        name
      }
    }
  }
}
"#;

/// Request envelope
#[derive(Debug, Serialize)]
pub struct GraphQlRequest {
    pub query: &'static str,
}

impl GraphQlRequest {
    pub fn new(query: &'static str) -> Self {
        Self { query }
    }
}

/// Response envelope
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// A single error reported by the endpoint
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Data payload of the dishes query
#[derive(Debug, Deserialize)]
pub struct DishesData {
    pub dishes: Vec<Dish>,
}

/// Unwrap a response envelope, surfacing endpoint-reported errors
pub fn into_data<T>(response: GraphQlResponse<T>) -> ApiResult<T> {
    if let Some(error) = response.errors.first() {
        return Err(ApiError::GraphQl(error.message.clone()));
    }
    response.data.ok_or(ApiError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dishes_response_decodes() {
        let body = r#"{
            "data": {
                "dishes": [{
                    "id": 1,
                    "name": "Borscht",
                    "description": "beet soup",
                    "dishProducts": [{
                        "productId": 7,
                        "amount": 150.0,
                        "cookCoeff": 0.9,
                        "product": { "name": "Beetroot" }
                    }],
                    "dishNutrients": [{
                        "nutrientId": 2,
                        "amount": 41.5,
                        "nutrient": { "name": "Белки" }
                    }]
                }]
            }
        }"#;

        let response: GraphQlResponse<DishesData> = serde_json::from_str(body).unwrap();
        let dishes = into_data(response).unwrap().dishes;
        assert_eq!(dishes.len(), 1);
        assert_eq!(dishes[0].dish_products[0].product.name, "Beetroot");
        assert_eq!(dishes[0].dish_nutrients[0].nutrient.name, "Белки");
    }

    #[test]
    fn test_endpoint_errors_surface() {
        let body = r#"{ "data": null, "errors": [{ "message": "dishes unavailable" }] }"#;
        let response: GraphQlResponse<DishesData> = serde_json::from_str(body).unwrap();
        match into_data(response).unwrap_err() {
            ApiError::GraphQl(message) => assert_eq!(message, "dishes unavailable"),
            other => panic!("expected GraphQL error, got {}", other),
        }
    }

    #[test]
    fn test_missing_data_is_an_error() {
        let body = r#"{}"#;
        let response: GraphQlResponse<DishesData> = serde_json::from_str(body).unwrap();
        assert!(matches!(into_data(response), Err(ApiError::EmptyResponse)));
    }
}
