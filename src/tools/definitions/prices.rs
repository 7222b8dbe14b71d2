//! Stock price tools.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRoute;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::api::{ApiClient, QueryParams};
use crate::tools::adapter::{ApiToolSpec, Extract};
use crate::tools::schemas::Interval;

/// Parameters for the price snapshot tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PriceSnapshotParams {
    #[schemars(description = "The stock ticker symbol (e.g., 'AAPL' for Apple)")]
    pub ticker: String,
}

/// Parameters for the historical prices tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PricesParams {
    #[schemars(description = "The stock ticker symbol (e.g., 'AAPL' for Apple)")]
    pub ticker: String,

    #[schemars(description = "Time interval for price data (default: 'day')")]
    pub interval: Option<Interval>,

    #[schemars(description = "Multiplier for the interval (default: 1)")]
    pub interval_multiplier: Option<u32>,

    #[schemars(description = "Start date in YYYY-MM-DD format (required)")]
    pub start_date: String,

    #[schemars(description = "End date in YYYY-MM-DD format (required)")]
    pub end_date: String,
}

/// Most recent price snapshot for a stock.
pub struct PriceSnapshotTool;

impl PriceSnapshotTool {
    pub const NAME: &'static str = "get_price_snapshot";

    pub const DESCRIPTION: &'static str = "Fetches the most recent price snapshot for a stock, \
         including the latest price, trading volume, and OHLC data.";

    pub fn spec() -> ApiToolSpec<PriceSnapshotParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get Price Snapshot",
            description: Self::DESCRIPTION.to_string(),
            endpoint: "/prices/snapshot/",
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

/// Historical OHLCV prices for a stock over a date range.
pub struct PricesTool;

impl PricesTool {
    pub const NAME: &'static str = "get_prices";

    pub const DESCRIPTION: &'static str = "Retrieves historical price data for a stock over a \
         date range, including open, high, low, close prices, and volume.";

    pub fn spec() -> ApiToolSpec<PricesParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get Prices",
            description: Self::DESCRIPTION.to_string(),
            endpoint: "/prices/",
            build_params: |p| {
                QueryParams::new()
                    .set("ticker", p.ticker.as_str())
                    .set("interval", p.interval.unwrap_or(Interval::Day).as_str())
                    .set("interval_multiplier", p.interval_multiplier.unwrap_or(1))
                    .set("start_date", p.start_date.as_str())
                    .set("end_date", p.end_date.as_str())
            },
            extract: Extract::Array("prices"),
        }
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        Self::spec().into_route(client)
    }
}
