//! Declarative adapter from a tool description to an rmcp `ToolRoute`.
//!
//! Every Financial Datasets tool follows the same execute pattern:
//! call the API, pull the relevant subtree out of the JSON envelope,
//! pretty-print it with a source-URL citation, and attach machine-readable
//! details. [`ApiToolSpec`] captures what varies per tool; [`into_route`]
//! supplies the shared body.
//!
//! [`into_route`]: ApiToolSpec::into_route

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::api::{ApiClient, QueryParams};

/// How to pull the relevant payload out of a raw API response.
///
/// The upstream may legitimately omit the envelope key, or set it to
/// `null`, on empty results; extraction never fails and both cases yield
/// an empty object or list.
#[derive(Debug, Clone, Copy)]
pub enum Extract {
    /// Unwrap an object under the named key; `{}` when absent or null.
    Object(&'static str),
    /// Unwrap a list under the named key; `[]` when absent or null. The
    /// element count is reported in the result details.
    Array(&'static str),
    /// Pass the whole response body through.
    Whole,
}

impl Extract {
    /// Apply the extraction, returning the payload and, for list-shaped
    /// responses, its element count.
    pub fn apply(&self, data: &Value) -> (Value, Option<usize>) {
        match self {
            Self::Object(key) => {
                let payload = envelope_value(data, key).unwrap_or_else(|| json!({}));
                (payload, None)
            }
            Self::Array(key) => {
                let payload = envelope_value(data, key).unwrap_or_else(|| json!([]));
                let count = payload.as_array().map(Vec::len).unwrap_or(0);
                (payload, Some(count))
            }
            Self::Whole => (data.clone(), None),
        }
    }
}

/// An envelope key that is absent or explicitly `null` counts as empty.
fn envelope_value(data: &Value, key: &str) -> Option<Value> {
    data.get(key).filter(|v| !v.is_null()).cloned()
}

/// Declarative description of one API-backed tool.
///
/// `build_params` maps validated tool arguments to query parameters; schema
/// validation itself is the host's job via the published input schema.
#[derive(Clone)]
pub struct ApiToolSpec<P> {
    /// Tool name as registered with the host.
    pub name: &'static str,

    /// Human-readable title.
    pub title: &'static str,

    /// Tool description shown to clients.
    pub description: String,

    /// API endpoint path, e.g. `/prices/snapshot/`.
    pub endpoint: &'static str,

    /// Build the query parameters from the deserialized arguments.
    pub build_params: fn(&P) -> QueryParams,

    /// How to unwrap the response envelope.
    pub extract: Extract,
}

impl<P> ApiToolSpec<P>
where
    P: Clone + DeserializeOwned + JsonSchema + Send + 'static,
{
    /// Create the Tool model for this tool (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.clone().into()),
            input_schema: cached_schema_for_type::<P>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some(self.title.to_string()),
        }
    }

    /// Build the ToolRoute whose execution body runs the shared
    /// call-extract-format pattern against the given client.
    pub fn into_route<S>(self, client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        let tool = self.to_tool();
        ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
            let client = client.clone();
            let spec = self.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            let cancel = ctx.request_context.ct.clone();
            async move {
                let params: P = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                let query = (spec.build_params)(&params);
                debug!(tool = spec.name, endpoint = spec.endpoint, "executing tool");

                // API failures flow to the host's error channel untranslated.
                let response = client
                    .call(spec.endpoint, query, Some(cancel))
                    .await
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;

                let (extracted, count) = spec.extract.apply(&response.data);

                let text = render_text(&extracted, &response.url)
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;

                let mut result = CallToolResult::success(vec![Content::text(text)]);
                result.structured_content = Some(Value::Object(details(&response.url, count)));
                Ok(result)
            }
            .boxed()
        })
    }
}

/// Format the extracted payload as pretty JSON with a trailing source
/// citation, so the agent can cite where the numbers came from.
pub fn render_text(extracted: &Value, url: &str) -> serde_json::Result<String> {
    let pretty = serde_json::to_string_pretty(extracted)?;
    Ok(format!("{}\n\n[Source: {}]", pretty, url))
}

/// Machine-readable result details: the resolved URL, plus a record count
/// for list-shaped responses.
fn details(url: &str, count: Option<usize>) -> Map<String, Value> {
    let mut details = Map::new();
    details.insert("url".to_string(), json!(url));
    if let Some(count) = count {
        details.insert("count".to_string(), json!(count));
    }
    details
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_object_unwraps_key() {
        let data = json!({"snapshot": {"price": 150}});
        let (payload, count) = Extract::Object("snapshot").apply(&data);
        assert_eq!(payload, json!({"price": 150}));
        assert!(count.is_none());
    }

    #[test]
    fn test_extract_object_missing_key_is_empty_object() {
        let data = json!({"other": 1});
        let (payload, count) = Extract::Object("snapshot").apply(&data);
        assert_eq!(payload, json!({}));
        assert!(count.is_none());
    }

    #[test]
    fn test_extract_array_counts_elements() {
        let data = json!({"prices": [{"close": 1}, {"close": 2}]});
        let (payload, count) = Extract::Array("prices").apply(&data);
        assert_eq!(payload.as_array().unwrap().len(), 2);
        assert_eq!(count, Some(2));
    }

    #[test]
    fn test_extract_array_missing_key_is_empty_list() {
        let data = json!({});
        let (payload, count) = Extract::Array("prices").apply(&data);
        assert_eq!(payload, json!([]));
        assert_eq!(count, Some(0));
    }

    #[test]
    fn test_extract_array_null_key_is_empty_list() {
        let data = json!({"filings": null});
        let (payload, count) = Extract::Array("filings").apply(&data);
        assert_eq!(payload, json!([]));
        assert_eq!(count, Some(0));
    }

    #[test]
    fn test_extract_object_null_key_is_empty_object() {
        let data = json!({"snapshot": null});
        let (payload, count) = Extract::Object("snapshot").apply(&data);
        assert_eq!(payload, json!({}));
        assert!(count.is_none());
    }

    #[test]
    fn test_extract_whole_passes_body_through() {
        let data = json!({"Item-1": "Business", "Item-1A": "Risk Factors"});
        let (payload, count) = Extract::Whole.apply(&data);
        assert_eq!(payload, data);
        assert!(count.is_none());
    }

    #[test]
    fn test_render_text_appends_source_citation() {
        let text = render_text(&json!({"price": 150}), "https://example.test/prices/").unwrap();
        assert!(text.starts_with("{\n"));
        assert!(text.ends_with("\n\n[Source: https://example.test/prices/]"));
    }

    #[test]
    fn test_details_include_url_and_optional_count() {
        let plain = details("https://example.test/", None);
        assert_eq!(plain.get("url").unwrap(), "https://example.test/");
        assert!(!plain.contains_key("count"));

        let counted = details("https://example.test/", Some(3));
        assert_eq!(counted.get("count").unwrap(), 3);
    }
}
