//! Error types for the OKEx client library.
//!
//! Every failure a request can run into is reported through [`OkexError`]:
//! caller misuse, transport failures, non-2xx statuses, unparseable bodies and
//! business errors reported by the exchange in an `error_code` field.

use thiserror::Error;

/// Boxed error produced by a [`Transport`](crate::transport::Transport).
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for all OKEx client operations.
#[derive(Error, Debug)]
pub enum OkexError {
    /// The caller supplied something the client cannot send.
    #[error("{context}: {message}")]
    InvalidInput {
        /// Operation that rejected the input (e.g. "private request to trade")
        context: String,
        /// What was wrong with it
        message: String,
    },

    /// The request never produced an HTTP response (connection, DNS, timeout).
    #[error("{request} failed: {source}")]
    Transport {
        /// Description of the request that failed
        request: String,
        /// Underlying transport error
        #[source]
        source: TransportError,
    },

    /// The server answered with a status outside 200..300.
    #[error("HTTP status code {status} returned from {request}")]
    HttpStatus {
        /// Description of the request that failed
        request: String,
        /// HTTP status code
        status: u16,
    },

    /// The response body was not the JSON that was expected.
    #[error("could not parse response from {request} ({reason}). Response: {body}")]
    Parse {
        /// Description of the request that failed
        request: String,
        /// Why the body was rejected
        reason: String,
        /// Raw response body (or the decoded payload that did not fit)
        body: String,
    },

    /// OKEx returned an `error_code` in the response body.
    #[error("OKEx API error: {0}")]
    Api(ApiError),
}

impl OkexError {
    pub(crate) fn invalid_input(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if the request failed before any HTTP response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns `true` for caller-side misuse that was rejected before dispatch.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// HTTP status code for [`OkexError::HttpStatus`] errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The exchange error for [`OkexError::Api`] errors.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }
}

/// Business error reported by OKEx inside an otherwise successful response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The `error_code` value as returned (e.g. "10007")
    pub code: String,
    /// Human-readable message resolved from [`error_codes::describe`]
    pub message: String,
    /// Description of the request that produced the error
    pub request: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} returned error code {}, message: \"{}\"",
            self.request, self.code, self.message
        )
    }
}

impl ApiError {
    /// Create an API error, resolving the message from the error code table.
    pub fn new(code: impl Into<String>, request: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            message: error_codes::describe(&code),
            code,
            request: request.into(),
        }
    }

    /// The error code as an integer, when it is one.
    pub fn code_number(&self) -> Option<i64> {
        self.code.trim().parse().ok()
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        matches!(
            self.code_number(),
            Some(error_codes::REQUESTS_TOO_FREQUENT | error_codes::TOO_MANY_REQUESTS)
        )
    }

    /// Check if this is a signature mismatch error.
    pub fn is_invalid_signature(&self) -> bool {
        self.code_number() == Some(error_codes::SIGNATURES_DO_NOT_MATCH)
    }

    /// Check if this is an unknown api key error.
    pub fn is_invalid_key(&self) -> bool {
        self.code_number() == Some(error_codes::KEY_DOES_NOT_EXIST)
    }

    /// Check if this is an insufficient balance error.
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(
            self.code_number(),
            Some(error_codes::INSUFFICIENT_BALANCE | error_codes::INSUFFICIENT_COINS_BALANCE)
        )
    }

    /// Check if this is an unknown order error.
    pub fn is_order_not_found(&self) -> bool {
        self.code_number() == Some(error_codes::ORDER_DOES_NOT_EXIST)
    }
}

/// Known OKEx v1 error codes and their messages.
pub mod error_codes {
    pub const REQUIRED_PARAMETER_NULL: i64 = 10000;
    pub const REQUESTS_TOO_FREQUENT: i64 = 10001;
    pub const SYSTEM_ERROR: i64 = 10002;
    pub const KEY_DOES_NOT_EXIST: i64 = 10005;
    pub const USER_DOES_NOT_EXIST: i64 = 10006;
    pub const SIGNATURES_DO_NOT_MATCH: i64 = 10007;
    pub const ILLEGAL_PARAMETER: i64 = 10008;
    pub const ORDER_DOES_NOT_EXIST: i64 = 10009;
    pub const INSUFFICIENT_BALANCE: i64 = 10010;
    pub const INSUFFICIENT_COINS_BALANCE: i64 = 10016;
    pub const TOO_MANY_REQUESTS: i64 = 503;

    /// Look up the message for a numeric error code.
    pub fn message(code: i64) -> Option<&'static str> {
        let message = match code {
            10000 => "Required parameter can not be null",
            10001 => "Requests are too frequent",
            10002 => "System Error",
            10003 => "Restricted list request, please try again later",
            10004 => "IP restriction",
            10005 => "Key does not exist",
            10006 => "User does not exist",
            10007 => "Signatures do not match",
            10008 => "Illegal parameter",
            10009 => "Order does not exist",
            10010 => "Insufficient balance",
            10011 => "Order is less than minimum trade amount",
            10012 => "Unsupported symbol (not btc_usd or ltc_usd)",
            10013 => "This interface only accepts https requests",
            10014 => "Order price must be between 0 and 1,000,000",
            10015 => "Order price differs from current market price too much",
            10016 => "Insufficient coins balance",
            10017 => "API authorization error",
            10026 => "Loan (including reserved loan) and margin cannot be withdrawn",
            10027 => "Cannot withdraw within 24 hrs of authentication information modification",
            10028 => "Withdrawal amount exceeds daily limit",
            10029 => "Account has unpaid loan, please cancel/pay off the loan before withdraw",
            10031 => "Deposits can only be withdrawn after 6 confirmations",
            10032 => "Please enabled phone/google authenticator",
            10033 => "Fee higher than maximum network transaction fee",
            10034 => "Fee lower than minimum network transaction fee",
            10035 => "Insufficient BTC/LTC",
            10036 => "Withdrawal amount too low",
            10037 => "Trade password not set",
            10040 => "Withdrawal cancellation fails",
            10041 => "Withdrawal address not approved",
            10042 => "Admin password error",
            10100 => "User account frozen",
            10216 => "Non-available API",
            503 => "Too many requests (Http)",
            _ => return None,
        };
        Some(message)
    }

    /// Resolve an `error_code` as found in a response body.
    ///
    /// Codes missing from the table, or that are not integers at all, map to
    /// `"Unknown error code: {code}"`.
    pub fn describe(code: &str) -> String {
        code.trim()
            .parse::<i64>()
            .ok()
            .and_then(message)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Unknown error code: {code}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code_message() {
        let error = ApiError::new("10007", "POST request to trade");
        assert_eq!(error.message, "Signatures do not match");
        assert!(error.is_invalid_signature());
        assert!(!error.is_rate_limit());
    }

    #[test]
    fn test_unknown_code_message() {
        assert_eq!(error_codes::describe("99999"), "Unknown error code: 99999");
        assert_eq!(error_codes::describe("abc"), "Unknown error code: abc");
    }

    #[test]
    fn test_http_503_code_is_rate_limit() {
        let error = ApiError::new("503", "GET request to ticker");
        assert_eq!(error.message, "Too many requests (Http)");
        assert!(error.is_rate_limit());
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new("10010", "POST request to trade");
        assert_eq!(
            error.to_string(),
            "POST request to trade returned error code 10010, message: \"Insufficient balance\""
        );
        assert!(error.is_insufficient_balance());
    }

    #[test]
    fn test_error_accessors() {
        let err = OkexError::HttpStatus {
            request: "GET request to ticker".to_string(),
            status: 502,
        };
        assert_eq!(err.status(), Some(502));
        assert!(err.api_error().is_none());
        assert!(!err.is_transport());
    }
}
