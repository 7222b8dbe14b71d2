//! Financial Datasets MCP Server
//!
//! This crate exposes the Financial Datasets REST API
//! (<https://api.financialdatasets.ai>) as a set of MCP tools: stock and
//! crypto prices, financial statements and metrics, SEC filings, news,
//! analyst estimates, insider trades, and segmented revenues.
//!
//! # Architecture
//!
//! - **core**: configuration, the server handler, and the stdio transport
//! - **api**: the shared request core - URL construction, parameter
//!   normalization, auth injection, and the error taxonomy
//! - **tools**: the declarative tool catalog and the adapter that turns a
//!   tool description into an rmcp route
//!
//! # Example
//!
//! ```rust,no_run
//! use findata_mcp_server::{Config, FindataServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = FindataServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod tools;

// Re-export commonly used types for convenience
pub use core::{Config, FindataServer};
