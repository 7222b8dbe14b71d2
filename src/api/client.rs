//! HTTP client for the Financial Datasets API.
//!
//! One GET shape covers the whole API: base origin + endpoint + query
//! parameters, authenticated with an `x-api-key` header, answering JSON.
//! The client resolves the credential before touching the network, encodes
//! parameters deterministically, and maps non-success statuses to
//! [`ApiError::RequestFailed`].

use reqwest::Url;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::core::config::ApiConfig;

use super::error::{ApiError, ApiResult};
use super::params::{ParamValue, QueryParams};

/// A successful API response: the parsed body plus the resolved request URL.
///
/// The URL includes the final query string and is what tools cite back to
/// the agent.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub data: Value,
    pub url: String,
}

/// Client for the Financial Datasets REST API.
///
/// Stateless apart from the credential and the shared connection pool;
/// safe to share across concurrent tool invocations behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    /// Create a client from the resolved API configuration.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Issue a GET against `endpoint` with the given query parameters.
    ///
    /// Fails with [`ApiError::KeyMissing`] before any network I/O when no
    /// credential is configured. When `cancel` fires while the request is
    /// outstanding, the request is dropped and the call resolves to
    /// [`ApiError::Cancelled`].
    pub async fn call(
        &self,
        endpoint: &str,
        params: QueryParams,
        cancel: Option<CancellationToken>,
    ) -> ApiResult<ApiResponse> {
        let api_key = self.api_key.as_deref().ok_or(ApiError::KeyMissing)?;

        let url = self.build_url(endpoint, &params)?;
        debug!("GET {}", url);

        let request = self.http.get(url.clone()).header("x-api-key", api_key).send();

        let response = match cancel {
            Some(token) => {
                tokio::select! {
                    _ = token.cancelled() => return Err(ApiError::Cancelled),
                    response = request => response?,
                }
            }
            None => request.await?,
        };

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::request_failed(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                url.as_str(),
            ));
        }

        // A malformed body on a 2xx is a defect upstream; propagate the
        // decode error untranslated.
        let data: Value = response.json().await?;

        Ok(ApiResponse {
            data,
            url: url.into(),
        })
    }

    /// Build the fully resolved request URL.
    ///
    /// Parameters encode in insertion order. A `ticker` string value is
    /// uppercased here, the single canonical normalization point, so tools
    /// never need to care about symbol casing. List values repeat the query
    /// key once per element.
    pub fn build_url(&self, endpoint: &str, params: &QueryParams) -> ApiResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params.entries() {
                match value {
                    ParamValue::Str(s) if *key == "ticker" => {
                        pairs.append_pair(key, &s.to_uppercase());
                    }
                    ParamValue::Str(s) => {
                        pairs.append_pair(key, s);
                    }
                    ParamValue::Num(n) => {
                        pairs.append_pair(key, &n.to_string());
                    }
                    ParamValue::List(items) => {
                        for item in items {
                            pairs.append_pair(key, item);
                        }
                    }
                }
            }
        }

        Ok(url)
    }
}
