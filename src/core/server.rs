//! MCP server implementation and lifecycle management.
//!
//! The server wires the tool router to the rmcp `ServerHandler`. Tool
//! routing itself is generated by the `#[tool_handler]` macro from the
//! router built in `tools/router.rs`; adding a tool does not require
//! touching this file.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};

use crate::api::ApiClient;
use crate::tools::build_tool_router;

use super::config::Config;

/// Research guidance advertised to connecting agents.
const INSTRUCTIONS: &str = r#"## Financial Research Guidelines

When answering financial questions using these tools:

### Workflow
1. **Parse**: Extract tickers (normalize company names -> symbols), metrics, and time periods
2. **Fetch**: Call tools in parallel when independent (e.g., fetching data for multiple tickers)
3. **Validate**: Before answering, verify you have data for ALL entities mentioned. For comparisons, ensure you have all sides.
4. **Respond**: Lead with the key finding, then supporting data

### Response Format
- **First sentence**: Direct answer to the question
- **Data**: Cite specific numbers from the API responses
- **Sources**: Always end with a "Sources:" section listing the API URLs used

Example sources section:
Sources:
- AAPL financials: https://api.financialdatasets.ai/...
- MSFT financials: https://api.financialdatasets.ai/...

### For Complex Queries
When comparing multiple companies or doing multi-step analysis, track progress:
```
Research Progress:
- [x] Step 1: Parsed query - AAPL, MSFT, GOOGL operating margins
- [x] Step 2: Fetched all three income statements
- [x] Step 3: Calculated margins, ready to respond
```
"#;

/// The main MCP server handler.
///
/// Holds the configuration and the tool router; all per-call state lives
/// in the individual tool invocations, so the server is freely cloneable.
#[derive(Clone)]
pub struct FindataServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl FindataServer {
    /// Create a new server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let client = Arc::new(ApiClient::new(&config.api));

        Self {
            tool_router: build_tool_router::<Self>(client),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for FindataServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone().into(),
                version: self.config.server.version.clone().into(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_reports_config_identity() {
        let server = FindataServer::new(Config::default());
        assert_eq!(server.name(), "findata-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_server_info_advertises_tools() {
        let server = FindataServer::new(Config::default());
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        let instructions = info.instructions.unwrap();
        assert!(instructions.contains("Financial Research Guidelines"));
        assert!(instructions.contains("### For Complex Queries"));
    }
}
