//! Ration MCP Server Implementation
//!
//! Implements the MCP server with the catalog tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::api::ApiClient;
use crate::models::{CategoryChoice, ProductDraft};
use crate::tools::categories;
use crate::tools::dishes;
use crate::tools::products;
use crate::tools::status::StatusTracker;

/// Ration catalog MCP service
#[derive(Clone)]
pub struct RationService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    api: ApiClient,
    tool_router: ToolRouter<RationService>,
}

impl RationService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(
                api.base_url().to_string(),
                api.graphql_url().to_string(),
            ))),
            api,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BrowseProductsParams {
    /// Search term forwarded to the catalog (empty lists everything)
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListCategoriesParams {
    /// Substring matched against category names, case-insensitively
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListDishesParams {
    /// Substring matched against dish names, case-insensitively
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PreviewProductParams {
    /// Protein grams per 100g (unparseable or absent counts as zero)
    pub proteins: Option<String>,
    /// Fat grams per 100g
    pub fats: Option<String>,
    /// Carbohydrate grams per 100g
    pub carbs: Option<String>,
    /// Water grams per 100g
    pub water: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateProductParams {
    /// Product name
    pub name: String,
    /// Secondary name shown under the product
    pub subname: String,
    /// Existing category name picked from list_categories
    pub category: Option<String>,
    /// Free-text name for a new category (overrides category when set)
    pub new_category: Option<String>,
    /// Protein grams per 100g (unparseable or absent counts as zero)
    pub proteins: Option<String>,
    /// Fat grams per 100g
    pub fats: Option<String>,
    /// Carbohydrate grams per 100g
    pub carbs: Option<String>,
    /// Water grams per 100g
    pub water: Option<String>,
}

impl CreateProductParams {
    /// Assemble a draft from the raw parameters
    fn into_draft(self) -> ProductDraft {
        ProductDraft {
            name: self.name,
            subname: self.subname,
            category: CategoryChoice::from_fields(
                self.category.as_deref().unwrap_or(""),
                self.new_category.as_deref().unwrap_or(""),
            ),
            proteins: self.proteins.unwrap_or_default(),
            fats: self.fats.unwrap_or_default(),
            carbs: self.carbs.unwrap_or_default(),
            water: self.water.unwrap_or_default(),
        }
    }
}

// ============================================================================
// Tools
// ============================================================================

#[tool_router]
impl RationService {
    // --- Status ---

    #[tool(description = "Get the current status of the catalog service including build info, remote endpoints, and process information")]
    async fn ration_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get step-by-step instructions for browsing the catalog and creating products. Call this when starting a catalog session or when unsure how to use the tools.")]
    fn catalog_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CATALOG_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CATALOG_INSTRUCTIONS)]))
    }

    // --- Products ---

    #[tool(description = "Browse the product catalog with an optional search term. Calories are derived from the macronutrients.")]
    async fn browse_products(&self, Parameters(p): Parameters<BrowseProductsParams>) -> Result<CallToolResult, McpError> {
        let result = products::browse_products(&self.api, &p.search).await.map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Preview the derived caloric value and residual ash for draft macronutrient inputs without creating anything")]
    fn preview_product(&self, Parameters(p): Parameters<PreviewProductParams>) -> Result<CallToolResult, McpError> {
        let draft = ProductDraft {
            proteins: p.proteins.unwrap_or_default(),
            fats: p.fats.unwrap_or_default(),
            carbs: p.carbs.unwrap_or_default(),
            water: p.water.unwrap_or_default(),
            ..ProductDraft::default()
        };
        let result = products::preview_product(&draft);
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Create a new product. kcal and ash are derived from the macronutrients; a rejected draft is returned unchanged so it can be retried.")]
    async fn create_product(&self, Parameters(p): Parameters<CreateProductParams>) -> Result<CallToolResult, McpError> {
        let draft = p.into_draft();
        let result = products::create_product(&self.api, draft).await.map_err(|e| McpError::internal_error(e, None))?;
        let json = match result {
            Ok(created) => serde_json::to_string_pretty(&created),
            Err(rejected) => serde_json::to_string_pretty(&rejected),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Categories ---

    #[tool(description = "List known product categories with usage counts, filtered by an optional search term")]
    async fn list_categories(&self, Parameters(p): Parameters<ListCategoriesParams>) -> Result<CallToolResult, McpError> {
        let result = categories::list_categories(&self.api, &p.search).await.map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Dishes ---

    #[tool(description = "List dishes with ingredients and nutrient totals, filtered by an optional search term on the dish name")]
    async fn list_dishes(&self, Parameters(p): Parameters<ListDishesParams>) -> Result<CallToolResult, McpError> {
        let result = dishes::list_dishes(&self.api, &p.search).await.map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for RationService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "ration".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Ration Catalog Service".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Ration Catalog Service - food and dish nutrition records. \
                 IMPORTANT: Call catalog_instructions before creating products. \
                 Products: browse_products, preview_product, create_product. \
                 Categories: list_categories (search to find an existing category, \
                 or pass new_category to create_product for a new one). \
                 Dishes: list_dishes (search matches dish names only). \
                 Derived fields: kcal uses the Atwater factors (4/9/4), ash is the \
                 remainder of 100g and never goes negative."
                    .into(),
            ),
        }
    }
}
