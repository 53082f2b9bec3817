//! Custom serde helpers for OKEx's loosely typed JSON.
//!
//! The v1 API is inconsistent about whether ids and timestamps are sent as
//! JSON numbers or as strings, sometimes for the same field across endpoints.

use std::fmt;

use serde::{Deserializer, de};

/// Deserialize an `i64` from either a JSON number or a numeric string.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use okex_api_client::types::serde_helpers::lenient_i64;
///
/// #[derive(Deserialize, Debug)]
/// struct Ticker {
///     #[serde(deserialize_with = "lenient_i64::deserialize")]
///     date: i64,
/// }
///
/// let a: Ticker = serde_json::from_str(r#"{"date":"1410431279"}"#).unwrap();
/// let b: Ticker = serde_json::from_str(r#"{"date":1410431279}"#).unwrap();
/// assert_eq!(a.date, b.date);
/// ```
pub mod lenient_i64 {
    use super::*;

    struct LenientI64Visitor;

    impl<'de> de::Visitor<'de> for LenientI64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a numeric string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            i64::try_from(v).map_err(de::Error::custom)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
            if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                Ok(v as i64)
            } else if v.fract() == 0.0 {
                Err(de::Error::custom(format!("integer {v} out of range for i64")))
            } else {
                Err(de::Error::custom(format!("expected an integer, got {v}")))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.trim().parse().map_err(de::Error::custom)
        }
    }

    /// Deserialize a number or numeric string into an `i64`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LenientI64Visitor)
    }
}

/// Deserialize a `String` from either a JSON string or a JSON number.
///
/// Also provides [`lenient_string::option`] for optional fields, which maps
/// `null` to `None`.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use okex_api_client::types::serde_helpers::lenient_string;
///
/// #[derive(Deserialize, Debug)]
/// struct Cancelled {
///     #[serde(deserialize_with = "lenient_string::deserialize")]
///     order_id: String,
/// }
///
/// let c: Cancelled = serde_json::from_str(r#"{"order_id":12345}"#).unwrap();
/// assert_eq!(c.order_id, "12345");
/// ```
pub mod lenient_string {
    use super::*;

    struct LenientStringVisitor;

    impl<'de> de::Visitor<'de> for LenientStringVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a number")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(v)
        }
    }

    /// Deserialize a string or number into a `String`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LenientStringVisitor)
    }

    /// Deserialize an optional string or number; `null` becomes `None`.
    pub fn option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OptionVisitor;

        impl<'de> de::Visitor<'de> for OptionVisitor {
            type Value = Option<String>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("null, a string or a number")
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                deserializer.deserialize_any(LenientStringVisitor).map(Some)
            }
        }

        deserializer.deserialize_option(OptionVisitor)
    }
}
