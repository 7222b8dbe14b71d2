//! Company news tool.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRoute;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::api::{ApiClient, QueryParams};
use crate::tools::adapter::{ApiToolSpec, Extract};

/// Parameters for the news tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NewsParams {
    #[schemars(description = "The stock ticker symbol (e.g., 'AAPL' for Apple)")]
    pub ticker: String,

    #[schemars(description = "Start date for news articles (YYYY-MM-DD)")]
    pub start_date: Option<String>,

    #[schemars(description = "End date for news articles (YYYY-MM-DD)")]
    pub end_date: Option<String>,

    #[schemars(description = "Number of articles to retrieve (default: 10, max: 100)")]
    pub limit: Option<u32>,
}

/// Recent news articles for a company.
pub struct NewsTool;

impl NewsTool {
    pub const NAME: &'static str = "get_news";

    pub const DESCRIPTION: &'static str = "Retrieves recent news articles for a company, \
         covering financial announcements, market trends, and significant events. Useful for \
         market sentiment analysis.";

    pub fn spec() -> ApiToolSpec<NewsParams> {
        ApiToolSpec {
            name: Self::NAME,
            title: "Get News",
            description: Self::DESCRIPTION.to_string(),
            endpoint: "/news/",
            build_params: |p| {
                QueryParams::new()
                    .set("ticker", p.ticker.as_str())
                    .set_opt("start_date", p.start_date.as_deref())
                    .set_opt("end_date", p.end_date.as_deref())
                    .set("limit", p.limit.unwrap_or(10))
            },
            extract: Extract::Array("news"),
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
    fn test_news_defaults() {
        let params: NewsParams = serde_json::from_str(r#"{"ticker": "AAPL"}"#).unwrap();
        let query = (NewsTool::spec().build_params)(&params);

        assert_eq!(query.len(), 2);
        assert_eq!(query.entries()[1], ("limit", ParamValue::Num(10)));
    }

    #[test]
    fn test_news_with_date_range() {
        let json = r#"{"ticker": "TSLA", "start_date": "2024-01-01", "end_date": "2024-02-01", "limit": 25}"#;
        let params: NewsParams = serde_json::from_str(json).unwrap();
        let query = (NewsTool::spec().build_params)(&params);

        assert_eq!(query.len(), 4);
        assert_eq!(query.entries()[1], ("start_date", ParamValue::Str("2024-01-01".to_string())));
        assert_eq!(query.entries()[3], ("limit", ParamValue::Num(25)));
    }
}
