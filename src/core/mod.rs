//! Core module containing shared infrastructure components.
//!
//! Configuration, the MCP server handler, and the stdio transport.

pub mod config;
pub mod server;
pub mod transport;

pub use config::Config;
pub use server::FindataServer;
pub use transport::{StdioTransport, TransportError, TransportResult};
