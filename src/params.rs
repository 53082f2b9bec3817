//! Flat, sorted parameter sets.
//!
//! A [`Params`] is what actually goes on the wire: the query string of a
//! public request or the form body of a private one. The same strings are fed
//! to the signature, so the rendering of every value happens exactly once,
//! here:
//!
//! - strings are used verbatim
//! - integers are rendered as plain decimal digits
//! - floats use `serde_json`'s shortest round-trip form (`0.1`, `4000.5`)
//! - booleans become `true` / `false`
//! - `null` values are dropped
//! - `rust_decimal::Decimal` serializes as its string form
//!
//! Nested arrays and objects are rejected; endpoints that need structured
//! values encode them to a JSON string first.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::OkexError;

/// Parameters that are never echoed into logs or error descriptions.
const REDACTED_KEYS: &[&str] = &["api_key", "sign", "trade_pwd"];

/// An ordered mapping of parameter names to their wire string form.
///
/// Keys iterate in byte-wise lexicographic order, which is the order the
/// signature expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a serializable request into a parameter set.
    ///
    /// `context` names the operation and is used in the error message when
    /// the value is not a mapping of scalars.
    pub fn from_serialize<T>(value: &T, context: &str) -> Result<Self, OkexError>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value).map_err(|e| {
            OkexError::invalid_input(context, format!("parameters could not be serialized: {e}"))
        })?;

        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(OkexError::invalid_input(
                    context,
                    format!(
                        "parameters {other} must be an object. If no params then pass an empty object {{}}"
                    ),
                ));
            }
        };

        let mut params = Self::new();
        for (key, value) in map {
            let rendered = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(OkexError::invalid_input(
                        context,
                        format!("parameter {key} must be a string, number or boolean"),
                    ));
                }
            };
            params.0.insert(key, rendered);
        }
        Ok(params)
    }

    /// Insert a parameter, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Get a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Check whether a parameter is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Remove a parameter.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Iterate over `(key, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode as `application/x-www-form-urlencoded` (also used for query strings).
    pub fn to_urlencoded(&self) -> Result<String, OkexError> {
        serde_urlencoded::to_string(&self.0)
            .map_err(|e| OkexError::invalid_input("Params::to_urlencoded()", e.to_string()))
    }

    /// JSON rendering with credentials and signatures masked, for diagnostics.
    pub fn redacted(&self) -> String {
        let masked: BTreeMap<&str, &str> = self
            .iter()
            .map(|(k, v)| {
                if REDACTED_KEYS.contains(&k) {
                    (k, "[REDACTED]")
                } else {
                    (k, v)
                }
            })
            .collect();
        serde_json::to_string(&masked).unwrap_or_default()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct OrderParams<'a> {
        symbol: &'a str,
        #[serde(rename = "type")]
        side: &'a str,
        amount: rust_decimal::Decimal,
        size: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        price: Option<f64>,
        since: Option<i64>,
    }

    #[test]
    fn test_from_struct_renders_scalars() {
        let request = OrderParams {
            symbol: "btc_usd",
            side: "buy",
            amount: "0.0100".parse().unwrap(),
            size: 200,
            price: Some(4000.5),
            since: None,
        };
        let params = Params::from_serialize(&request, "test").unwrap();

        assert_eq!(params.get("symbol"), Some("btc_usd"));
        assert_eq!(params.get("type"), Some("buy"));
        assert_eq!(params.get("amount"), Some("0.0100"));
        assert_eq!(params.get("size"), Some("200"));
        assert_eq!(params.get("price"), Some("4000.5"));
        assert!(!params.contains_key("since"));
    }

    #[test]
    fn test_keys_iterate_sorted() {
        let params: Params = [("type", "buy"), ("api_key", "k"), ("symbol", "btc_usd")]
            .into_iter()
            .collect();
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["api_key", "symbol", "type"]);
    }

    #[test]
    fn test_byte_order_not_locale_order() {
        let params: Params = [("b", "1"), ("B", "2"), ("a", "3")].into_iter().collect();
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["B", "a", "b"]);
    }

    #[test]
    fn test_non_object_rejected() {
        let err = Params::from_serialize(&vec!["btc_usd"], "public request to ticker").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().starts_with("public request to ticker"));

        let err = Params::from_serialize("symbol=btc_usd", "ctx").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_nested_value_rejected() {
        let value = serde_json::json!({ "orders_data": [{ "price": 1 }] });
        let err = Params::from_serialize(&value, "ctx").unwrap_err();
        assert!(err.to_string().contains("orders_data"));
    }

    #[test]
    fn test_empty_object_accepted() {
        let params = Params::from_serialize(&serde_json::json!({}), "ctx").unwrap();
        assert!(params.is_empty());
        assert_eq!(params.to_urlencoded().unwrap(), "");
    }

    #[test]
    fn test_urlencoded_escapes_values() {
        let params: Params = [("symbol", "btc_usd"), ("note", "a b&c")].into_iter().collect();
        assert_eq!(params.to_urlencoded().unwrap(), "note=a+b%26c&symbol=btc_usd");
    }

    #[test]
    fn test_redacted_masks_credentials() {
        let params: Params = [("api_key", "key-123"), ("sign", "ABC"), ("symbol", "btc_usd")]
            .into_iter()
            .collect();
        let text = params.redacted();
        assert!(!text.contains("key-123"));
        assert!(!text.contains("ABC"));
        assert!(text.contains("btc_usd"));
    }
}
