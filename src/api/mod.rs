//! Financial Datasets API request core.
//!
//! Everything the tools need to talk to the upstream API: an ordered
//! query-parameter model, a shared HTTP client with credential injection,
//! and the error taxonomy for credential and upstream failures.

pub mod client;
pub mod error;
pub mod params;

pub use client::{ApiClient, ApiResponse};
pub use error::{ApiError, ApiResult};
pub use params::{ParamValue, QueryParams};
