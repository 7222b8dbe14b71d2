//! SEC filing tools.
//!
//! `get_filings` lists filing metadata; the three item tools fetch the
//! dated sections of a specific 10-K, 10-Q, or 8-K. The valid 10-K/10-Q
//! item keys are embedded in the tool descriptions from the tables in
//! [`crate::tools::constants`].

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRoute;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::api::{ApiClient, QueryParams};
use crate::tools::adapter::{ApiToolSpec, Extract};
use crate::tools::constants::{ITEMS_10K, ITEMS_10Q, format_items_description};
use crate::tools::schemas::FilingType;

/// Parameters for the filings listing tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FilingsParams {
    #[schemars(description = "The stock ticker symbol (e.g., 'AAPL' for Apple)")]
    pub ticker: String,

    #[schemars(
        description = "Filing type: '10-K' for annual, '10-Q' for quarterly, '8-K' for current reports"
    )]
    pub filing_type: Option<FilingType>,

    #[schemars(description = "Maximum filings to return (default: 10)")]
    pub limit: Option<u32>,
}

/// Parameters for the 10-K items tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Filing10KItemsParams {
    #[schemars(description = "The stock ticker symbol (e.g., 'AAPL' for Apple)")]
    pub ticker: String,

    #[schemars(description = "The year of the 10-K filing (e.g., 2023)")]
    pub year: u32,

    #[schemars(
        description = "Specific items to retrieve (e.g., 'Item-1A'). Valid items are listed in the tool description."
    )]
    pub item: Option<Vec<String>>,
}

/// Parameters for the 10-Q items tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Filing10QItemsParams {
    #[schemars(description = "The stock ticker symbol (e.g., 'AAPL' for Apple)")]
    pub ticker: String,

    #[schemars(description = "The year of the 10-Q filing (e.g., 2023)")]
    pub year: u32,

    #[schemars(description = "The quarter of the 10-Q filing (1, 2, 3, or 4)")]
    pub quarter: u32,

    #[schemars(
        description = "Specific items to retrieve (e.g., 'Item-2'). Valid items are listed in the tool description."
    )]
    pub item: Option<Vec<String>>,
}

/// Parameters for the 8-K items tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Filing8KItemsParams {
    #[schemars(description = "The stock ticker symbol (e.g., 'AAPL' for Apple)")]
    pub ticker: String,

    #[schemars(
        description = "SEC accession number for the 8-K (e.g., '0000320193-24-000123'). Get from get_filings."
    )]
    pub accession_number: String,
}

/// SEC filing metadata listing.
pub struct FilingsTool;

impl FilingsTool {
    pub const NAME: &'static str = "get_filings";

    pub const DESCRIPTION: &'static str = "Retrieves SEC filing metadata (accession numbers, \
         types, URLs). Does NOT return content - use get_10K/10Q/8K_filing_items for that.";

    pub fn spec() -> ApiToolSpec<FilingsParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get Filings",
            description: Self::DESCRIPTION.to_string(),
            endpoint: "/filings/",
            build_params: |p| {
                QueryParams::new()
                    .set("ticker", p.ticker.as_str())
                    .set_opt("filing_type", p.filing_type.map(FilingType::as_str))
                    .set("limit", p.limit.unwrap_or(10))
            },
            extract: Extract::Array("filings"),
        }
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        Self::spec().into_route(client)
    }
}

/// Sections of a 10-K annual report.
pub struct Filing10KItemsTool;

impl Filing10KItemsTool {
    pub const NAME: &'static str = "get_10K_filing_items";

    pub const DESCRIPTION: &'static str = "Retrieves specific sections from a 10-K annual report \
         (Business, Risk Factors, MD&A, Financial Statements, etc.)";

    pub fn spec() -> ApiToolSpec<Filing10KItemsParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get 10-K Filing Items",
            description: format!(
                "{}\n\nValid items:\n{}",
                Self::DESCRIPTION,
                format_items_description(&ITEMS_10K)
            ),
            endpoint: "/filings/items/",
            build_params: |p| {
                QueryParams::new()
                    .set("ticker", p.ticker.as_str())
                    .set("filing_type", FilingType::TenK.as_str())
                    .set("year", p.year)
                    .set_opt("item", p.item.clone())
            },
            extract: Extract::Whole,
        }
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        Self::spec().into_route(client)
    }
}

/// Sections of a 10-Q quarterly report.
pub struct Filing10QItemsTool;

impl Filing10QItemsTool {
    pub const NAME: &'static str = "get_10Q_filing_items";

    pub const DESCRIPTION: &'static str = "Retrieves specific sections from a 10-Q quarterly \
         report (Financial Statements, MD&A, Market Risk, Controls).";

    pub fn spec() -> ApiToolSpec<Filing10QItemsParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get 10-Q Filing Items",
            description: format!(
                "{}\n\nValid items:\n{}",
                Self::DESCRIPTION,
                format_items_description(&ITEMS_10Q)
            ),
            endpoint: "/filings/items/",
            build_params: |p| {
                QueryParams::new()
                    .set("ticker", p.ticker.as_str())
                    .set("filing_type", FilingType::TenQ.as_str())
                    .set("year", p.year)
                    .set("quarter", p.quarter)
                    .set_opt("item", p.item.clone())
            },
            extract: Extract::Whole,
        }
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        Self::spec().into_route(client)
    }
}

/// Sections of an 8-K current report.
pub struct Filing8KItemsTool;

impl Filing8KItemsTool {
    pub const NAME: &'static str = "get_8K_filing_items";

    pub const DESCRIPTION: &'static str = "Retrieves sections from an 8-K current report \
         (material events like acquisitions, results, management changes).";

    pub fn spec() -> ApiToolSpec<Filing8KItemsParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get 8-K Filing Items",
            description: Self::DESCRIPTION.to_string(),
            endpoint: "/filings/items/",
            build_params: |p| {
                QueryParams::new()
                    .set("ticker", p.ticker.as_str())
                    .set("filing_type", FilingType::EightK.as_str())
                    .set("accession_number", p.accession_number.as_str())
            },
            extract: Extract::Whole,
        }
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        Self::spec().into_route(client)
    }
}
