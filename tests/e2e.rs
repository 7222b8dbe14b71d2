//! End-to-end tests against the live Financial Datasets API.
//!
//! These tests require `FINANCIAL_DATASETS_API_KEY` and make real network
//! calls, so they are ignored by default. Run them with:
//!
//! ```text
//! FINANCIAL_DATASETS_API_KEY=... cargo test --test e2e -- --ignored
//! ```

use findata_mcp_server::api::{ApiClient, ApiResponse, QueryParams};
use findata_mcp_server::core::config::ApiConfig;

fn live_client() -> ApiClient {
    let api_key = std::env::var("FINANCIAL_DATASETS_API_KEY")
        .ok()
        .filter(|k| !k.is_empty());
    assert!(
        api_key.is_some(),
        "FINANCIAL_DATASETS_API_KEY must be set to run ignored e2e tests"
    );
    ApiClient::new(&ApiConfig {
        api_key,
        base_url: "https://api.financialdatasets.ai".to_string(),
    })
}

async fn call(endpoint: &str, params: QueryParams) -> ApiResponse {
    live_client()
        .call(endpoint, params, None)
        .await
        .unwrap_or_else(|e| panic!("GET {} failed: {}", endpoint, e))
}

#[ignore]
#[tokio::test]
async fn e2e_price_snapshot_returns_aapl_price() {
    let response = call("/prices/snapshot/", QueryParams::new().set("ticker", "aapl")).await;

    assert!(response.url.contains("ticker=AAPL"));
    let snapshot = &response.data["snapshot"];
    assert!(snapshot.is_object(), "missing snapshot: {}", response.data);
    assert!(snapshot["price"].is_number());
}

#[ignore]
#[tokio::test]
async fn e2e_prices_returns_historical_rows() {
    let params = QueryParams::new()
        .set("ticker", "AAPL")
        .set("interval", "day")
        .set("interval_multiplier", 1i64)
        .set("start_date", "2024-01-01")
        .set("end_date", "2024-01-10");
    let response = call("/prices/", params).await;

    let prices = response.data["prices"].as_array().expect("prices array");
    assert!(!prices.is_empty());
    assert!(prices[0]["close"].is_number());
}

#[ignore]
#[tokio::test]
async fn e2e_crypto_snapshot_returns_btc_price() {
    let response = call(
        "/crypto/prices/snapshot/",
        QueryParams::new().set("ticker", "BTC-USD"),
    )
    .await;

    assert!(response.data["snapshot"]["price"].is_number());
}

#[ignore]
#[tokio::test]
async fn e2e_crypto_tickers_lists_btc() {
    let response = call("/crypto/prices/tickers/", QueryParams::new()).await;

    let tickers = response.data["tickers"].as_array().expect("tickers array");
    assert!(
        tickers.iter().any(|t| {
            t.as_str()
                .or_else(|| t["ticker"].as_str())
                .is_some_and(|s| s.contains("BTC"))
        }),
        "expected a BTC ticker in {}",
        response.data
    );
}

#[ignore]
#[tokio::test]
async fn e2e_income_statements_report_revenue() {
    let params = QueryParams::new()
        .set("ticker", "AAPL")
        .set("period", "annual")
        .set("limit", 2i64);
    let response = call("/financials/income-statements/", params).await;

    let statements = response.data["income_statements"]
        .as_array()
        .expect("income_statements array");
    assert!(!statements.is_empty());
    assert!(statements[0]["revenue"].is_number());
}

#[ignore]
#[tokio::test]
async fn e2e_balance_sheets_report_assets() {
    let params = QueryParams::new()
        .set("ticker", "AAPL")
        .set("period", "annual")
        .set("limit", 1i64);
    let response = call("/financials/balance-sheets/", params).await;

    let sheets = response.data["balance_sheets"]
        .as_array()
        .expect("balance_sheets array");
    assert!(!sheets.is_empty());
    assert!(sheets[0]["total_assets"].is_number());
}

#[ignore]
#[tokio::test]
async fn e2e_metrics_snapshot_reports_market_cap() {
    let response = call(
        "/financial-metrics/snapshot/",
        QueryParams::new().set("ticker", "AAPL"),
    )
    .await;

    let snapshot = &response.data["snapshot"];
    assert!(snapshot.is_object());
    assert!(snapshot["market_cap"].is_number());
}

#[ignore]
#[tokio::test]
async fn e2e_filings_list_includes_annual_reports() {
    let response = call("/filings/", QueryParams::new().set("ticker", "AAPL").set("limit", 20i64))
        .await;

    let filings = response.data["filings"].as_array().expect("filings array");
    assert!(!filings.is_empty());
    assert!(
        filings
            .iter()
            .any(|f| f["filing_type"].as_str() == Some("10-K")),
        "expected a 10-K among recent filings"
    );
}

#[ignore]
#[tokio::test]
async fn e2e_ten_k_items_return_risk_factors() {
    let params = QueryParams::new()
        .set("ticker", "AAPL")
        .set("filing_type", "10-K")
        .set("year", 2023i64)
        .set("item", vec!["Item-1A".to_string()]);
    let response = call("/filings/items/", params).await;

    assert!(response.url.contains("item=Item-1A"));
    assert!(response.data.is_object());
}

#[ignore]
#[tokio::test]
async fn e2e_analyst_estimates_report_eps() {
    let params = QueryParams::new()
        .set("ticker", "NVDA")
        .set("period", "annual");
    let response = call("/analyst-estimates/", params).await;

    let estimates = response.data["analyst_estimates"]
        .as_array()
        .expect("analyst_estimates array");
    assert!(!estimates.is_empty());
}

#[ignore]
#[tokio::test]
async fn e2e_insider_trades_return_transactions() {
    let params = QueryParams::new().set("ticker", "AAPL").set("limit", 10i64);
    let response = call("/insider-trades/", params).await;

    let trades = response.data["insider_trades"]
        .as_array()
        .expect("insider_trades array");
    assert!(!trades.is_empty());
}

#[ignore]
#[tokio::test]
async fn e2e_news_returns_articles() {
    let params = QueryParams::new().set("ticker", "MSFT").set("limit", 5i64);
    let response = call("/news/", params).await;

    let news = response.data["news"].as_array().expect("news array");
    assert!(!news.is_empty());
    assert!(news[0]["title"].is_string());
}

#[ignore]
#[tokio::test]
async fn e2e_segmented_revenues_report_segments() {
    let params = QueryParams::new()
        .set("ticker", "AAPL")
        .set("period", "annual")
        .set("limit", 1i64);
    let response = call("/financials/segmented-revenues/", params).await;

    assert!(response.data["segmented_revenues"].is_object() ||
        response.data["segmented_revenues"].is_array());
}

#[ignore]
#[tokio::test]
async fn e2e_unknown_ticker_is_not_found() {
    let client = live_client();
    let params = QueryParams::new().set("ticker", "ZZZZZZZZ");
    let result = client.call("/prices/snapshot/", params, None).await;

    match result {
        Err(findata_mcp_server::api::ApiError::RequestFailed { status, .. }) => {
            assert!(status == 404 || status == 400, "unexpected status {}", status);
        }
        Ok(response) => {
            // Some endpoints answer 200 with an empty envelope instead.
            assert!(response.data["snapshot"].is_null());
        }
        Err(other) => panic!("unexpected error: {}", other),
    }
}
