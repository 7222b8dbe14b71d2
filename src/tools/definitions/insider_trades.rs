//! Insider trading tool.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRoute;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::api::{ApiClient, QueryParams};
use crate::tools::adapter::{ApiToolSpec, Extract};

/// Parameters for the insider trades tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InsiderTradesParams {
    #[schemars(description = "The stock ticker symbol (e.g., 'AAPL' for Apple)")]
    pub ticker: String,

    #[schemars(description = "Maximum trades to return (default: 100, max: 1000)")]
    pub limit: Option<u32>,

    #[schemars(description = "Exact filing date to filter by (YYYY-MM-DD)")]
    pub filing_date: Option<String>,

    #[schemars(description = "Filter for trades filed after this date (YYYY-MM-DD)")]
    pub filing_date_gt: Option<String>,

    #[schemars(description = "Filter for trades filed on or after this date (YYYY-MM-DD)")]
    pub filing_date_gte: Option<String>,

    #[schemars(description = "Filter for trades filed before this date (YYYY-MM-DD)")]
    pub filing_date_lt: Option<String>,

    #[schemars(description = "Filter for trades filed on or before this date (YYYY-MM-DD)")]
    pub filing_date_lte: Option<String>,
}

/// Insider transactions from SEC Form 4 filings.
pub struct InsiderTradesTool;

impl InsiderTradesTool {
    pub const NAME: &'static str = "get_insider_trades";

    pub const DESCRIPTION: &'static str = "Retrieves insider trading transactions from SEC Form \
         4 filings. Shows purchases and sales by executives, directors, and other insiders.";

    pub fn spec() -> ApiToolSpec<InsiderTradesParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get Insider Trades",
            description: Self::DESCRIPTION.to_string(),
            endpoint: "/insider-trades/",
            build_params: |p| {
                QueryParams::new()
                    .set("ticker", p.ticker.as_str())
                    .set("limit", p.limit.unwrap_or(100))
                    .set_opt("filing_date", p.filing_date.as_deref())
                    .set_opt("filing_date_gt", p.filing_date_gt.as_deref())
                    .set_opt("filing_date_gte", p.filing_date_gte.as_deref())
                    .set_opt("filing_date_lt", p.filing_date_lt.as_deref())
                    .set_opt("filing_date_lte", p.filing_date_lte.as_deref())
            },
            extract: Extract::Array("insider_trades"),
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
    fn test_insider_trades_defaults() {
        let params: InsiderTradesParams = serde_json::from_str(r#"{"ticker": "AAPL"}"#).unwrap();
        let query = (InsiderTradesTool::spec().build_params)(&params);

        assert_eq!(query.len(), 2);
        assert_eq!(query.entries()[1], ("limit", ParamValue::Num(100)));
    }

    #[test]
    fn test_insider_trades_filing_date_filters() {
        let json = r#"{"ticker": "AAPL", "filing_date_gte": "2024-01-01", "filing_date_lt": "2024-07-01"}"#;
        let params: InsiderTradesParams = serde_json::from_str(json).unwrap();
        let query = (InsiderTradesTool::spec().build_params)(&params);

        assert_eq!(query.len(), 4);
        assert_eq!(
            query.entries()[2],
            ("filing_date_gte", ParamValue::Str("2024-01-01".to_string()))
        );
    }
}
