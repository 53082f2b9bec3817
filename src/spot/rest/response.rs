//! Turning raw HTTP responses into payloads or errors.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, OkexError};
use crate::transport::RawResponse;

/// Classify a raw response.
///
/// The first matching rule wins:
/// 1. status outside 200..300 is [`OkexError::HttpStatus`]
/// 2. a body that is not JSON is [`OkexError::Parse`]
/// 3. when `expects_json` is set (GET), a JSON scalar is also [`OkexError::Parse`]
/// 4. an object with an `error_code` field is [`OkexError::Api`]
/// 5. anything else is the successful payload
///
/// Transport failures never reach this function.
pub(crate) fn classify(
    raw: RawResponse,
    expects_json: bool,
    request: &str,
) -> Result<Value, OkexError> {
    if !(200..300).contains(&raw.status) {
        return Err(OkexError::HttpStatus {
            request: request.to_string(),
            status: raw.status,
        });
    }

    let payload: Value = match serde_json::from_str(&raw.body) {
        Ok(payload) => payload,
        Err(e) => {
            return Err(OkexError::Parse {
                request: request.to_string(),
                reason: e.to_string(),
                body: raw.body,
            });
        }
    };

    if expects_json && !(payload.is_object() || payload.is_array()) {
        return Err(OkexError::Parse {
            request: request.to_string(),
            reason: "expected a JSON object or array".to_string(),
            body: raw.body,
        });
    }

    if let Some(code) = payload.get("error_code") {
        let code = match code {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(OkexError::Api(ApiError::new(code, request)));
    }

    Ok(payload)
}

/// Decode a successful payload into the endpoint's response type.
pub(crate) fn decode<T>(payload: Value, request: &str) -> Result<T, OkexError>
where
    T: DeserializeOwned,
{
    T::deserialize(&payload).map_err(|e| OkexError::Parse {
        request: request.to_string(),
        reason: e.to_string(),
        body: payload.to_string(),
    })
}
