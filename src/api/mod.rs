//! Remote catalog API module
//!
//! HTTP access to the Ration REST endpoints and the GraphQL dishes query.

pub mod client;
pub mod graphql;

pub use client::{ApiClient, ApiError, ApiResult};
