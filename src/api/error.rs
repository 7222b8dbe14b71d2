//! API error taxonomy.
//!
//! Two domain failures exist: the credential is missing, or the upstream
//! answered with a non-success status. Request failures carry the literal
//! HTTP status plus a status-specific hint so the agent can relay something
//! actionable. None of them are retried here.

use thiserror::Error;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised by the Financial Datasets API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The credential environment variable is unset or empty.
    #[error(
        "FINANCIAL_DATASETS_API_KEY environment variable is not set.\n\n\
         To use the financial data tools, you need an API key from Financial Datasets:\n\
         1. Get your API key at https://financialdatasets.ai/\n\
         2. Set it: export FINANCIAL_DATASETS_API_KEY=your_key_here\n   \
         Or add it to a .env file in your project directory."
    )]
    KeyMissing,

    /// The upstream responded with a non-success HTTP status.
    #[error("API request failed: {status} {status_text}{}", status_hint(*.status))]
    RequestFailed {
        status: u16,
        status_text: String,
        url: String,
    },

    /// The in-flight request was aborted by the caller.
    #[error("API request cancelled")]
    Cancelled,

    /// Transport-level failure or malformed success body; propagated as-is.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The base URL and endpoint did not form a valid URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

/// Advisory text appended to request failures for well-known statuses.
fn status_hint(status: u16) -> &'static str {
    match status {
        401 => "\n\nYour API key appears to be invalid. Check your FINANCIAL_DATASETS_API_KEY.",
        403 => "\n\nAccess denied. Your API key may not have access to this endpoint.",
        404 => "\n\nData not found. The ticker symbol or requested data may not exist.",
        429 => {
            "\n\nRate limit exceeded. Please wait a moment before making more requests, \
             or upgrade your plan at https://financialdatasets.ai/"
        }
        500.. => "\n\nThe Financial Datasets API is experiencing issues. Please try again later.",
        _ => "",
    }
}

impl ApiError {
    /// Build a request failure from a status code and the resolved URL.
    pub fn request_failed(status: u16, status_text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            status_text: status_text.into(),
            url: url.into(),
        }
    }
}
