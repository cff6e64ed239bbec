//! Catalog tools module
//!
//! MCP tool implementations for the Ration catalog service.

pub mod categories;
pub mod dishes;
pub mod products;
pub mod status;
