//! Tool definitions module.
//!
//! One file per API domain; each tool declares its parameter schema and an
//! [`ApiToolSpec`](crate::tools::adapter::ApiToolSpec) describing its
//! endpoint, query construction, and response extraction.

pub mod crypto;
pub mod estimates;
pub mod filings;
pub mod fundamentals;
pub mod insider_trades;
pub mod metrics;
pub mod news;
pub mod prices;
pub mod segments;

pub use crypto::{CryptoPricesTool, CryptoSnapshotTool, CryptoTickersTool};
pub use estimates::AnalystEstimatesTool;
pub use filings::{Filing8KItemsTool, Filing10KItemsTool, Filing10QItemsTool, FilingsTool};
pub use fundamentals::{
    AllFinancialStatementsTool, BalanceSheetsTool, CashFlowStatementsTool, IncomeStatementsTool,
};
pub use insider_trades::InsiderTradesTool;
pub use metrics::{MetricsSnapshotTool, MetricsTool};
pub use news::NewsTool;
pub use prices::{PriceSnapshotTool, PricesTool};
pub use segments::SegmentedRevenuesTool;
