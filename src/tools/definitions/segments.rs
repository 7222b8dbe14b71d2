//! Segmented revenues tool.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRoute;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::api::{ApiClient, QueryParams};
use crate::tools::adapter::{ApiToolSpec, Extract};
use crate::tools::schemas::PeriodNoTtm;

/// Parameters for the segmented revenues tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SegmentedRevenuesParams {
    #[schemars(description = "The stock ticker symbol (e.g., 'AAPL' for Apple)")]
    pub ticker: String,

    #[schemars(description = "Reporting period: 'annual' or 'quarterly'")]
    pub period: PeriodNoTtm,

    #[schemars(description = "Number of periods to retrieve (default: 10)")]
    pub limit: Option<u32>,
}

/// Revenue breakdown by operating segment.
pub struct SegmentedRevenuesTool;

impl SegmentedRevenuesTool {
    pub const NAME: &'static str = "get_segmented_revenues";

    pub const DESCRIPTION: &'static str = "Provides revenue breakdown by operating segments \
         (products, services, geographic regions). Useful for analyzing revenue composition.";

    pub fn spec() -> ApiToolSpec<SegmentedRevenuesParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get Segmented Revenues",
            description: Self::DESCRIPTION.to_string(),
            endpoint: "/financials/segmented-revenues/",
            build_params: |p| {
                QueryParams::new()
                    .set("ticker", p.ticker.as_str())
                    .set("period", p.period.as_str())
                    .set("limit", p.limit.unwrap_or(10))
            },
            extract: Extract::Object("segmented_revenues"),
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
    fn test_segmented_revenues_params() {
        let params: SegmentedRevenuesParams =
            serde_json::from_str(r#"{"ticker": "AAPL", "period": "annual"}"#).unwrap();
        let query = (SegmentedRevenuesTool::spec().build_params)(&params);

        assert_eq!(query.entries()[1], ("period", ParamValue::Str("annual".to_string())));
        assert_eq!(query.entries()[2], ("limit", ParamValue::Num(10)));
    }
}
