//! Request parameter sets.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Name of the field carrying the request signature.
pub const SIGNATURE_FIELD: &str = "signature";

/// Name of the injected application identifier field.
pub const API_ID_FIELD: &str = "apiId";

/// Name of the injected nonce field (HMAC scheme only).
pub const NONCE_FIELD: &str = "nonce";

/// Parameters of a single API call.
///
/// Keys are kept sorted, so iteration order never depends on insertion
/// order. Values are scalars in their string form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    entries: BTreeMap<String, String>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a scalar value, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self {
        self.entries.insert(key.into(), value.to_string());
        self
    }

    /// Insert `value` only when it is present and non-empty.
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<&str>) -> &mut Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.entries.insert(key.into(), v.to_string());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parameter names in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for RequestParams
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// A parameter set with its `signature` field appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    params: RequestParams,
}

impl SignedRequest {
    pub(crate) fn new(mut params: RequestParams, signature: String) -> Self {
        params.entries.insert(SIGNATURE_FIELD.to_string(), signature);
        Self { params }
    }

    /// All transmitted parameters, signature included.
    pub fn params(&self) -> &RequestParams {
        &self.params
    }

    pub fn signature(&self) -> &str {
        self.params.get(SIGNATURE_FIELD).unwrap_or_default()
    }

    /// Parameters as owned pairs for a query string.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Parameters as a flat JSON object of string values.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_is_sorted_by_key() {
        let mut params = RequestParams::new();
        params.insert("zebra", "1").insert("alpha", 2).insert("middle", "3");

        let keys: Vec<&str> = params.keys().collect();
        assert_eq!(keys, vec!["alpha", "middle", "zebra"]);
        assert_eq!(params.get("alpha"), Some("2"));
    }

    #[test]
    fn test_insertion_order_irrelevant() {
        let a: RequestParams = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        let b: RequestParams = [("c", "3"), ("b", "2"), ("a", "1")].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_insert_opt_skips_missing_and_empty() {
        let mut params = RequestParams::new();
        params
            .insert_opt("none", None)
            .insert_opt("empty", Some(""))
            .insert_opt("present", Some("x"));

        assert!(!params.contains_key("none"));
        assert!(!params.contains_key("empty"));
        assert_eq!(params.get("present"), Some("x"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_signed_request_json_shape() {
        let mut params = RequestParams::new();
        params.insert("userId", "u1");
        let signed = SignedRequest::new(params, "abc".into());

        assert_eq!(signed.signature(), "abc");
        assert_eq!(
            signed.to_json(),
            serde_json::json!({"userId": "u1", "signature": "abc"})
        );
        assert_eq!(
            signed.to_query_pairs(),
            vec![
                ("signature".to_string(), "abc".to_string()),
                ("userId".to_string(), "u1".to_string()),
            ]
        );
    }
}
