//! Transport layer for the MCP server.
//!
//! The host is a coding agent speaking MCP over stdin/stdout, so stdio is
//! the only transport. Logging must go to stderr; stdout belongs to the
//! protocol.

use rmcp::ServiceExt;
use thiserror::Error;
use tracing::info;

use super::server::FindataServer;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur in transport operations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// IO error during transport.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Server initialization error.
    #[error("Server initialization error: {0}")]
    Init(String),

    /// Service error from rmcp.
    #[error("Service error: {0}")]
    Service(String),
}

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the server over stdin/stdout until the client disconnects.
    pub async fn run(server: FindataServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::Init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::Service(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
