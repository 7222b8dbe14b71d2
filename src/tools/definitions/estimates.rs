//! Analyst estimates tool.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRoute;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::api::{ApiClient, QueryParams};
use crate::tools::adapter::{ApiToolSpec, Extract};
use crate::tools::schemas::PeriodNoTtm;

/// Parameters for the analyst estimates tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EstimatesParams {
    #[schemars(description = "The stock ticker symbol (e.g., 'AAPL' for Apple)")]
    pub ticker: String,

    #[schemars(description = "Period for estimates: 'annual' or 'quarterly' (default: 'annual')")]
    pub period: Option<PeriodNoTtm>,
}

/// Analyst consensus estimates for a company.
pub struct AnalystEstimatesTool;

impl AnalystEstimatesTool {
    pub const NAME: &'static str = "get_analyst_estimates";

    pub const DESCRIPTION: &'static str = "Retrieves analyst estimates including EPS forecasts. \
         Useful for understanding consensus expectations and future growth prospects.";

    pub fn spec() -> ApiToolSpec<EstimatesParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get Analyst Estimates",
            description: Self::DESCRIPTION.to_string(),
            endpoint: "/analyst-estimates/",
            build_params: |p| {
                QueryParams::new()
                    .set("ticker", p.ticker.as_str())
                    .set("period", p.period.unwrap_or(PeriodNoTtm::Annual).as_str())
            },
            extract: Extract::Array("analyst_estimates"),
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
    fn test_estimates_default_period() {
        let params: EstimatesParams = serde_json::from_str(r#"{"ticker": "AAPL"}"#).unwrap();
        let query = (AnalystEstimatesTool::spec().build_params)(&params);

        assert_eq!(query.entries()[1], ("period", ParamValue::Str("annual".to_string())));
    }

    #[test]
    fn test_estimates_quarterly() {
        let params: EstimatesParams =
            serde_json::from_str(r#"{"ticker": "AAPL", "period": "quarterly"}"#).unwrap();
        let query = (AnalystEstimatesTool::spec().build_params)(&params);

        assert_eq!(query.entries()[1], ("period", ParamValue::Str("quarterly".to_string())));
    }
}
