//! Financial statement tools.
//!
//! Income statements, balance sheets, cash flow statements, and the
//! combined endpoint all share one parameter shape.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRoute;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::api::{ApiClient, QueryParams};
use crate::tools::adapter::{ApiToolSpec, Extract};
use crate::tools::schemas::Period;

/// Parameters shared by all financial statement tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FinancialStatementsParams {
    #[schemars(description = "The stock ticker symbol (e.g., 'AAPL' for Apple)")]
    pub ticker: String,

    #[schemars(
        description = "Reporting period: 'annual' for yearly, 'quarterly' for quarterly, 'ttm' for trailing twelve months"
    )]
    pub period: Period,

    #[schemars(description = "Maximum number of periods to return (default: 10)")]
    pub limit: Option<u32>,

    #[schemars(description = "Filter for periods after this date (YYYY-MM-DD)")]
    pub report_period_gt: Option<String>,

    #[schemars(description = "Filter for periods on or after this date (YYYY-MM-DD)")]
    pub report_period_gte: Option<String>,

    #[schemars(description = "Filter for periods before this date (YYYY-MM-DD)")]
    pub report_period_lt: Option<String>,

    #[schemars(description = "Filter for periods on or before this date (YYYY-MM-DD)")]
    pub report_period_lte: Option<String>,
}

fn build_params(p: &FinancialStatementsParams) -> QueryParams {
    QueryParams::new()
        .set("ticker", p.ticker.as_str())
        .set("period", p.period.as_str())
        .set("limit", p.limit.unwrap_or(10))
        .set_opt("report_period_gt", p.report_period_gt.as_deref())
        .set_opt("report_period_gte", p.report_period_gte.as_deref())
        .set_opt("report_period_lt", p.report_period_lt.as_deref())
        .set_opt("report_period_lte", p.report_period_lte.as_deref())
}

/// Income statements for a company.
pub struct IncomeStatementsTool;

impl IncomeStatementsTool {
    pub const NAME: &'static str = "get_income_statements";

    pub const DESCRIPTION: &'static str = "Fetches income statements detailing revenues, \
         expenses, and net income. Useful for evaluating profitability and operational efficiency.";

    pub fn spec() -> ApiToolSpec<FinancialStatementsParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get Income Statements",
            description: Self::DESCRIPTION.to_string(),
            endpoint: "/financials/income-statements/",
            build_params,
            extract: Extract::Object("income_statements"),
        }
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        Self::spec().into_route(client)
    }
}

/// Balance sheets for a company.
pub struct BalanceSheetsTool;

impl BalanceSheetsTool {
    pub const NAME: &'static str = "get_balance_sheets";

    pub const DESCRIPTION: &'static str = "Retrieves balance sheets showing assets, liabilities, \
         and shareholders' equity. Useful for assessing financial position.";

    pub fn spec() -> ApiToolSpec<FinancialStatementsParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get Balance Sheets",
            description: Self::DESCRIPTION.to_string(),
            endpoint: "/financials/balance-sheets/",
            build_params,
            extract: Extract::Object("balance_sheets"),
        }
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        Self::spec().into_route(client)
    }
}

/// Cash flow statements for a company.
pub struct CashFlowStatementsTool;

impl CashFlowStatementsTool {
    pub const NAME: &'static str = "get_cash_flow_statements";

    pub const DESCRIPTION: &'static str = "Retrieves cash flow statements showing operating, \
         investing, and financing activities. Useful for understanding liquidity and solvency.";

    pub fn spec() -> ApiToolSpec<FinancialStatementsParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get Cash Flow Statements",
            description: Self::DESCRIPTION.to_string(),
            endpoint: "/financials/cash-flow-statements/",
            build_params,
            extract: Extract::Object("cash_flow_statements"),
        }
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        Self::spec().into_route(client)
    }
}

/// All three financial statements in one call.
pub struct AllFinancialStatementsTool;

impl AllFinancialStatementsTool {
    pub const NAME: &'static str = "get_all_financial_statements";

    pub const DESCRIPTION: &'static str = "Retrieves all three financial statements (income, \
         balance sheet, cash flow) in one call. More efficient for comprehensive analysis.";

    pub fn spec() -> ApiToolSpec<FinancialStatementsParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get All Financial Statements",
            description: Self::DESCRIPTION.to_string(),
            endpoint: "/financials/",
            build_params,
            extract: Extract::Object("financials"),
        }
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        Self::spec().into_route(client)
    }
}
