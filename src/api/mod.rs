//! Unusual Whales REST API module
//!
//! Endpoint catalog, argument validation and the HTTP client.

pub mod catalog;
pub mod client;
pub mod endpoints;
pub mod params;

pub use catalog::{Catalog, EndpointSpec};
pub use client::ApiClient;
pub use params::{ParamSpec, ParamType, QueryValue, ValidatedArgs};
