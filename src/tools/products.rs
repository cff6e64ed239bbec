//! Product catalog tools
//!
//! Browsing, previewing, and creating products against the remote catalog.

use serde::Serialize;

use crate::api::ApiClient;
use crate::models::{Product, ProductDraft};
use crate::nutrition::{kcal_from_macros, Derived};

/// Summary of a product for browse results
#[derive(Debug, Serialize)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub subname: String,
    pub proteins: f64,
    pub fats: f64,
    pub carbs: f64,
    /// Caloric value recomputed from the macros (Atwater factors)
    pub kcal: f64,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            subname: product.subname.clone(),
            proteins: product.main_proteins,
            fats: product.main_fats,
            carbs: product.main_carb,
            kcal: kcal_from_macros(product.main_proteins, product.main_fats, product.main_carb),
        }
    }
}

/// Response for browse_products
#[derive(Debug, Serialize)]
pub struct BrowseProductsResponse {
    pub products: Vec<ProductSummary>,
    pub total: usize,
}

/// Browse the product catalog, optionally narrowed by a search term
pub async fn browse_products(
    api: &ApiClient,
    search_term: &str,
) -> Result<BrowseProductsResponse, String> {
    let products = api.fetch_products(search_term).await.map_err(|e| {
        tracing::error!("Failed to fetch products: {}", e);
        "Failed to fetch products".to_string()
    })?;

    let summaries: Vec<ProductSummary> = products.iter().map(ProductSummary::from).collect();
    let total = summaries.len();

    Ok(BrowseProductsResponse {
        products: summaries,
        total,
    })
}

/// Response for preview_product
#[derive(Debug, Serialize)]
pub struct PreviewProductResponse {
    pub kcal: f64,
    pub ash_grams: f64,
    /// Resolved category name, empty when none chosen
    pub category: String,
}

/// Derived fields for a draft, without submitting anything
pub fn preview_product(draft: &ProductDraft) -> PreviewProductResponse {
    let Derived { kcal, ash_grams } = draft.derived();
    PreviewProductResponse {
        kcal,
        ash_grams,
        category: draft.category_name().to_string(),
    }
}

/// Successful creation response
#[derive(Debug, Serialize)]
pub struct CreateProductResponse {
    pub name: String,
    pub categoryname: String,
    pub kcal: f64,
    pub ash_grams: f64,
    /// Record echoed back by the catalog
    pub created: serde_json::Value,
}

/// Creation did not go through; the draft is handed back for retry
#[derive(Debug, Serialize)]
pub struct CreateProductRejected {
    pub reason: String,
    pub draft: ProductDraft,
}

/// Create a product from a draft
///
/// A draft with an empty name, subname, or resolved category is rejected
/// before any request is made. A network failure also hands the draft back
/// unchanged so the caller can retry.
pub async fn create_product(
    api: &ApiClient,
    draft: ProductDraft,
) -> Result<Result<CreateProductResponse, CreateProductRejected>, String> {
    if draft.name.is_empty() {
        return Ok(Err(CreateProductRejected {
            reason: "Name must not be empty".to_string(),
            draft,
        }));
    }
    if draft.subname.is_empty() {
        return Ok(Err(CreateProductRejected {
            reason: "Subname must not be empty".to_string(),
            draft,
        }));
    }
    if draft.category_name().is_empty() {
        return Ok(Err(CreateProductRejected {
            reason: "No category chosen".to_string(),
            draft,
        }));
    }

    let payload = draft.to_create();
    match api.create_product(&payload).await {
        Ok(created) => Ok(Ok(CreateProductResponse {
            name: payload.name,
            categoryname: payload.categoryname,
            kcal: payload.kcal,
            ash_grams: payload.main_ash,
            created,
        })),
        Err(e) => {
            tracing::error!("Failed to create product: {}", e);
            Ok(Err(CreateProductRejected {
                reason: "Failed to create product".to_string(),
                draft,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_recomputes_kcal_from_macros() {
        let product = Product {
            id: 1,
            name: "Oats".to_string(),
            subname: String::new(),
            main_proteins: 10.0,
            main_fats: 5.0,
            main_carb: 20.0,
            main_water: 60.0,
            main_ash: 5.0,
            // Whatever the catalog stored is ignored for display
            kcal: 9000.0,
        };
        let summary = ProductSummary::from(&product);
        assert!((summary.kcal - 165.0).abs() < 0.001);
    }

    #[test]
    fn test_preview_reports_derived_and_category() {
        let draft = ProductDraft {
            proteins: "10".to_string(),
            fats: "5".to_string(),
            carbs: "20".to_string(),
            water: "60".to_string(),
            ..ProductDraft::default()
        };
        let preview = preview_product(&draft);
        assert!((preview.kcal - 165.0).abs() < 0.001);
        assert!((preview.ash_grams - 5.0).abs() < 0.001);
        assert_eq!(preview.category, "");
    }
}
