//! Service status tool
//!
//! Provides runtime status information about the catalog service.

use std::time::Instant;

use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Catalog workflow instructions for AI assistants
pub const CATALOG_INSTRUCTIONS: &str = r#"
# Ration Catalog Instructions

This guide explains how to browse the catalog and create products.

## Browsing

- `browse_products` lists products, optionally narrowed by a search term.
  Calories shown are derived from the macronutrients (4 kcal/g protein,
  9 kcal/g fat, 4 kcal/g carbohydrate).
- `list_dishes` lists dishes with their ingredients and nutrient totals.
  The search term matches dish names only.

## Creating a product

1. Call `list_categories` with a search term to find an existing category.
2. Preview the derived fields with `preview_product`: kcal comes from the
   Atwater factors, and ash is the remainder of 100g not covered by
   protein, fat, carbohydrate, and water (never negative).
3. Call `create_product` with the name, subname, category, and the four
   macro fields in grams per 100g.

Notes:
- Pass either `category` (an existing name) or `new_category` (free text).
  When both are set, the new category wins.
- Macro fields are text; unparseable or missing values count as zero.
- A rejected draft comes back unchanged so it can be corrected and retried.
"#;

/// Runtime status of the catalog service
#[derive(Debug, Clone, Serialize)]
pub struct RationStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Remote endpoints
    pub api_base_url: String,
    pub graphql_url: String,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: String,
    api_base_url: String,
    graphql_url: String,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(api_base_url: String, graphql_url: String) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            api_base_url,
            graphql_url,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> RationStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        RationStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            api_base_url: self.api_base_url.clone(),
            graphql_url: self.graphql_url.clone(),
            started_at: self.started_at.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
