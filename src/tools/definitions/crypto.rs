//! Cryptocurrency price tools.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRoute;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::api::{ApiClient, QueryParams};
use crate::tools::adapter::{ApiToolSpec, Extract};
use crate::tools::schemas::Interval;

/// Parameters for the crypto snapshot tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CryptoSnapshotParams {
    #[schemars(
        description = "Crypto ticker (e.g., 'BTC-USD' for Bitcoin in USD, 'BTC-ETH' for Bitcoin in Ethereum)"
    )]
    pub ticker: String,
}

/// Parameters for the historical crypto prices tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CryptoPricesParams {
    #[schemars(
        description = "Crypto ticker (e.g., 'BTC-USD' for Bitcoin in USD, 'BTC-ETH' for Bitcoin in Ethereum)"
    )]
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

/// Parameters for the available tickers tool (none).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CryptoTickersParams {}

/// Most recent price snapshot for a cryptocurrency.
pub struct CryptoSnapshotTool;

impl CryptoSnapshotTool {
    pub const NAME: &'static str = "get_crypto_price_snapshot";

    pub const DESCRIPTION: &'static str = "Fetches the most recent price snapshot for a \
         cryptocurrency, including price, volume, and OHLC data.";

    pub fn spec() -> ApiToolSpec<CryptoSnapshotParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get Crypto Price Snapshot",
            description: Self::DESCRIPTION.to_string(),
            endpoint: "/crypto/prices/snapshot/",
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

/// Historical OHLCV prices for a cryptocurrency over a date range.
pub struct CryptoPricesTool;

impl CryptoPricesTool {
    pub const NAME: &'static str = "get_crypto_prices";

    pub const DESCRIPTION: &'static str = "Retrieves historical price data for a cryptocurrency \
         over a date range, including OHLC and volume.";

    pub fn spec() -> ApiToolSpec<CryptoPricesParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get Crypto Prices",
            description: Self::DESCRIPTION.to_string(),
            endpoint: "/crypto/prices/",
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

/// List of tradable cryptocurrency tickers.
pub struct CryptoTickersTool;

impl CryptoTickersTool {
    pub const NAME: &'static str = "get_available_crypto_tickers";

    pub const DESCRIPTION: &'static str =
        "Retrieves the list of available cryptocurrency tickers.";

    pub fn spec() -> ApiToolSpec<CryptoTickersParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get Available Crypto Tickers",
            description: Self::DESCRIPTION.to_string(),
            endpoint: "/crypto/prices/tickers/",
            build_params: |_| QueryParams::new(),
            extract: Extract::Array("tickers"),
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
    fn test_crypto_prices_defaults() {
        let json = r#"{"ticker": "BTC-USD", "start_date": "2024-01-01", "end_date": "2024-01-10"}"#;
        let params: CryptoPricesParams = serde_json::from_str(json).unwrap();
        let query = (CryptoPricesTool::spec().build_params)(&params);

        assert_eq!(query.entries()[0], ("ticker", ParamValue::Str("BTC-USD".to_string())));
        assert_eq!(query.entries()[1], ("interval", ParamValue::Str("day".to_string())));
        assert_eq!(query.entries()[2], ("interval_multiplier", ParamValue::Num(1)));
    }

    #[test]
    fn test_tickers_takes_no_params() {
        let params: CryptoTickersParams = serde_json::from_str("{}").unwrap();
        let query = (CryptoTickersTool::spec().build_params)(&params);
        assert!(query.is_empty());
    }
}
