//! Catalog API client
//!
//! Thin wrappers over the remote REST and GraphQL endpoints. Each call is a
//! single outstanding request: no retry, no explicit timeout, no
//! cancellation.

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::graphql::{self, GraphQlRequest, GraphQlResponse};
use crate::models::{CategorySuggestion, Dish, Product, ProductCreate};

/// Remote API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {status} for {endpoint}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("Empty GraphQL response")]
    EmptyResponse,
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Client for the remote Ration catalog
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    graphql_url: String,
}

impl ApiClient {
    /// Create a new client for the given endpoints
    pub fn new(base_url: impl Into<String>, graphql_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            graphql_url: graphql_url.into(),
        }
    }

    /// The configured REST base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured GraphQL endpoint
    pub fn graphql_url(&self) -> &str {
        &self.graphql_url
    }

    /// Fetch products, optionally narrowed by a server-side search term
    pub async fn fetch_products(&self, search_term: &str) -> ApiResult<Vec<Product>> {
        tracing::debug!("Fetching products, search = {:?}", search_term);
        let response = self
            .http
            .get(format!("{}/api/products", self.base_url))
            .query(&[("mode", "main"), ("search", search_term)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: "products",
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch the known categories with usage counts
    pub async fn fetch_categories(&self) -> ApiResult<Vec<CategorySuggestion>> {
        let response = self
            .http
            .get(format!("{}/api/products/categories", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: "categories",
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }

    /// Submit a new product record
    pub async fn create_product(&self, product: &ProductCreate) -> ApiResult<serde_json::Value> {
        tracing::info!("Creating product {:?}", product.name);
        let response = self
            .http
            .post(format!("{}/api/products", self.base_url))
            .json(product)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: "create product",
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch all dishes with composition and nutrient totals
    pub async fn fetch_dishes(&self) -> ApiResult<Vec<Dish>> {
        let response = self
            .http
            .post(&self.graphql_url)
            .json(&GraphQlRequest::new(graphql::DISHES_QUERY))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: "dishes",
                status: response.status(),
            });
        }

        let body: GraphQlResponse<graphql::DishesData> = response.json().await?;
        graphql::into_data(body).map(|data| data.dishes)
    }
}
