//! Category tools
//!
//! Category suggestions for the product creation flow.

use serde::Serialize;

use crate::api::ApiClient;
use crate::models::{filter_categories, CategorySuggestion};

/// Response for list_categories
#[derive(Debug, Serialize)]
pub struct ListCategoriesResponse {
    pub categories: Vec<CategorySuggestion>,
    pub total: usize,
}

/// List known categories, optionally narrowed by a search term
///
/// Matching is a case-insensitive substring test on the category name,
/// preserving the catalog's ordering.
pub async fn list_categories(
    api: &ApiClient,
    search_term: &str,
) -> Result<ListCategoriesResponse, String> {
    let known = api.fetch_categories().await.map_err(|e| {
        tracing::error!("Failed to fetch categories: {}", e);
        "Failed to fetch categories".to_string()
    })?;

    let categories: Vec<CategorySuggestion> =
        filter_categories(&known, search_term).cloned().collect();
    let total = categories.len();

    Ok(ListCategoriesResponse { categories, total })
}
