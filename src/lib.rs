//! Unusual Whales MCP Server Library
//!
//! A Model Context Protocol (MCP) server for the Unusual Whales API.
//! Every API endpoint is exposed as a read-only tool described by a single
//! data-driven catalog.

pub mod api;
pub mod config;
pub mod error;
pub mod mcp;

pub use config::Config;
pub use error::{Result, UwMcpError};
