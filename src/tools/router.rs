//! Tool router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only threads
//! the shared API client through and lists the catalog in one place.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::api::ApiClient;

use super::definitions::{
    AllFinancialStatementsTool, AnalystEstimatesTool, BalanceSheetsTool, CashFlowStatementsTool,
    CryptoPricesTool, CryptoSnapshotTool, CryptoTickersTool, Filing8KItemsTool,
    Filing10KItemsTool, Filing10QItemsTool, FilingsTool, IncomeStatementsTool, InsiderTradesTool,
    MetricsSnapshotTool, MetricsTool, NewsTool, PriceSnapshotTool, PricesTool,
    SegmentedRevenuesTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<ApiClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(PriceSnapshotTool::create_route(client.clone()))
        .with_route(PricesTool::create_route(client.clone()))
        .with_route(CryptoSnapshotTool::create_route(client.clone()))
        .with_route(CryptoPricesTool::create_route(client.clone()))
        .with_route(CryptoTickersTool::create_route(client.clone()))
        .with_route(IncomeStatementsTool::create_route(client.clone()))
        .with_route(BalanceSheetsTool::create_route(client.clone()))
        .with_route(CashFlowStatementsTool::create_route(client.clone()))
        .with_route(AllFinancialStatementsTool::create_route(client.clone()))
        .with_route(SegmentedRevenuesTool::create_route(client.clone()))
        .with_route(MetricsSnapshotTool::create_route(client.clone()))
        .with_route(MetricsTool::create_route(client.clone()))
        .with_route(AnalystEstimatesTool::create_route(client.clone()))
        .with_route(NewsTool::create_route(client.clone()))
        .with_route(InsiderTradesTool::create_route(client.clone()))
        .with_route(FilingsTool::create_route(client.clone()))
        .with_route(Filing10KItemsTool::create_route(client.clone()))
        .with_route(Filing10QItemsTool::create_route(client.clone()))
        .with_route(Filing8KItemsTool::create_route(client))
}
