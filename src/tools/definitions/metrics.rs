//! Financial metrics tools.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRoute;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::api::{ApiClient, QueryParams};
use crate::tools::adapter::{ApiToolSpec, Extract};
use crate::tools::schemas::Period;

/// Parameters for the metrics snapshot tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MetricsSnapshotParams {
    #[schemars(description = "The stock ticker symbol (e.g., 'AAPL' for Apple)")]
    pub ticker: String,
}

/// Parameters for the historical metrics tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MetricsParams {
    #[schemars(description = "The stock ticker symbol (e.g., 'AAPL' for Apple)")]
    pub ticker: String,

    #[schemars(description = "Reporting period (default: 'ttm')")]
    pub period: Option<Period>,

    #[schemars(description = "Number of periods to retrieve (default: 4)")]
    pub limit: Option<u32>,

    #[schemars(description = "Filter for exact report period date (YYYY-MM-DD)")]
    pub report_period: Option<String>,

    #[schemars(description = "Filter for periods after this date (YYYY-MM-DD)")]
    pub report_period_gt: Option<String>,

    #[schemars(description = "Filter for periods on or after this date (YYYY-MM-DD)")]
    pub report_period_gte: Option<String>,

    #[schemars(description = "Filter for periods before this date (YYYY-MM-DD)")]
    pub report_period_lt: Option<String>,

    #[schemars(description = "Filter for periods on or before this date (YYYY-MM-DD)")]
    pub report_period_lte: Option<String>,
}

/// Current financial metrics for a company.
pub struct MetricsSnapshotTool;

impl MetricsSnapshotTool {
    pub const NAME: &'static str = "get_financial_metrics_snapshot";

    pub const DESCRIPTION: &'static str = "Fetches current financial metrics including market \
         cap, P/E ratio, and dividend yield. Useful for a quick overview of financial health.";

    pub fn spec() -> ApiToolSpec<MetricsSnapshotParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get Financial Metrics Snapshot",
            description: Self::DESCRIPTION.to_string(),
            endpoint: "/financial-metrics/snapshot/",
            build_params: |p| QueryParams::new().set("ticker", p.ticker.as_str()),
            extract: Extract::Object("snapshot"),
        }
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        Self::spec().into_route(client)
    }
}

/// Historical financial metrics for a company.
pub struct MetricsTool;

impl MetricsTool {
    pub const NAME: &'static str = "get_financial_metrics";

    pub const DESCRIPTION: &'static str = "Retrieves historical financial metrics like P/E \
         ratio, revenue per share, and enterprise value. Useful for trend analysis.";

    pub fn spec() -> ApiToolSpec<MetricsParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get Financial Metrics",
            description: Self::DESCRIPTION.to_string(),
            endpoint: "/financial-metrics/",
            build_params: |p| {
                QueryParams::new()
                    .set("ticker", p.ticker.as_str())
                    .set("period", p.period.unwrap_or(Period::Ttm).as_str())
                    .set("limit", p.limit.unwrap_or(4))
                    .set_opt("report_period", p.report_period.as_deref())
                    .set_opt("report_period_gt", p.report_period_gt.as_deref())
                    .set_opt("report_period_gte", p.report_period_gte.as_deref())
                    .set_opt("report_period_lt", p.report_period_lt.as_deref())
                    .set_opt("report_period_lte", p.report_period_lte.as_deref())
            },
            extract: Extract::Array("financial_metrics"),
        }
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        Self::spec().into_route(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ParamValue;

    #[test]
    fn test_metrics_defaults() {
        let params: MetricsParams = serde_json::from_str(r#"{"ticker": "AAPL"}"#).unwrap();
        let query = (MetricsTool::spec().build_params)(&params);

        assert_eq!(query.entries()[1], ("period", ParamValue::Str("ttm".to_string())));
        assert_eq!(query.entries()[2], ("limit", ParamValue::Num(4)));
        assert_eq!(query.len(), 3);
    }

    #[test]
    fn test_metrics_exact_report_period() {
        let params: MetricsParams =
            serde_json::from_str(r#"{"ticker": "AAPL", "report_period": "2023-09-30"}"#).unwrap();
        let query = (MetricsTool::spec().build_params)(&params);

        assert_eq!(
            query.entries()[3],
            ("report_period", ParamValue::Str("2023-09-30".to_string()))
        );
    }
}
