//! Ration Catalog Service
//!
//! An MCP server for browsing and creating food nutrition records
//! against the remote Ration catalog API.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

mod api;
mod build_info;
mod mcp;
mod models;
mod nutrition;
mod tools;

use mcp::RationService;

/// Get the REST API base URL from environment or use the default deployment
fn get_api_base_url() -> String {
    std::env::var("RATION_API_URL").unwrap_or_else(|_| "http://ration.phys.su:3006".to_string())
}

/// Get the GraphQL endpoint from environment or use the default deployment
fn get_graphql_url() -> String {
    std::env::var("RATION_GRAPHQL_URL")
        .unwrap_or_else(|_| "https://ration.phys.su/graphql".to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ration=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    // Resolve remote endpoints
    let api_base_url = get_api_base_url();
    let graphql_url = get_graphql_url();
    eprintln!("Catalog API: {}", api_base_url);
    eprintln!("GraphQL endpoint: {}", graphql_url);

    let api = api::ApiClient::new(api_base_url, graphql_url);

    // Create the catalog service
    let service = RationService::new(api);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
