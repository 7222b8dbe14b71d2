//! Query-parameter model for Financial Datasets API requests.
//!
//! Parameters are kept in insertion order so that a given tool always
//! produces the same URL for the same arguments. Optional parameters that
//! are absent never enter the collection, and list-valued parameters encode
//! as one repeated query key per element.

/// A single query-parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Num(i64),
    List(Vec<String>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Num(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Num(i64::from(value))
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Ordered collection of query parameters for a single API call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(&'static str, ParamValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn set(mut self, key: &'static str, value: impl Into<ParamValue>) -> Self {
        self.entries.push((key, value.into()));
        self
    }

    /// Append a parameter only when a value is present.
    ///
    /// Absent values must not appear in the query string at all, not even as
    /// empty values.
    pub fn set_opt<V: Into<ParamValue>>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Parameters in insertion order.
    pub fn entries(&self) -> &[(&'static str, ParamValue)] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_preserves_insertion_order() {
        let params = QueryParams::new()
            .set("ticker", "AAPL")
            .set("period", "annual")
            .set("limit", 10i64);

        let keys: Vec<_> = params.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["ticker", "period", "limit"]);
    }

    #[test]
    fn test_set_opt_skips_absent_values() {
        let params = QueryParams::new()
            .set("ticker", "AAPL")
            .set_opt("start_date", None::<String>)
            .set_opt("end_date", Some("2024-01-10"));

        assert_eq!(params.len(), 2);
        assert_eq!(params.entries()[0].0, "ticker");
        assert_eq!(params.entries()[1].0, "end_date");
    }

    #[test]
    fn test_list_value_keeps_element_order() {
        let params = QueryParams::new().set(
            "item",
            vec!["Item-1".to_string(), "Item-1A".to_string(), "Item-7".to_string()],
        );

        match &params.entries()[0].1 {
            ParamValue::List(items) => {
                assert_eq!(items, &["Item-1", "Item-1A", "Item-7"]);
            }
            other => panic!("expected list value, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_conversions_widen_to_i64() {
        assert_eq!(ParamValue::from(10u32), ParamValue::Num(10));
        assert_eq!(ParamValue::from(-3i64), ParamValue::Num(-3));
    }

    #[test]
    fn test_empty_params() {
        let params = QueryParams::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
    }
}
