//! MCP server module
//!
//! Exposes the catalog workflows as MCP tools over stdio.

pub mod server;

pub use server::RationService;
