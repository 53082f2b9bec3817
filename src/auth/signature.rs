//! MD5 signature generation for OKEx API authentication.
//!
//! OKEx v1 private endpoints require a `sign` parameter computed as:
//! ```text
//! UPPERCASE_HEX(MD5(k1=v1&k2=v2&...&secret_key=SECRET))
//! ```
//!
//! where the `k=v` pairs are every submitted parameter (including `api_key`)
//! sorted by key, with values in their literal form (no URL encoding).

use md5::{Digest, Md5};

use crate::params::Params;

/// Build the canonical `key=value&...` string for a parameter set.
///
/// Keys come out in byte-wise lexicographic order because [`Params`] keeps
/// them sorted; values are not URL-encoded.
pub fn canonical_string(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Sign a parameter set for OKEx's private API.
///
/// # Arguments
///
/// * `params` - Every parameter that will be submitted, including `api_key`
/// * `secret_key` - The account secret key
///
/// # Returns
///
/// The uppercase hex MD5 digest of the canonical string with the secret
/// appended.
///
/// # Example
///
/// ```rust
/// use okex_api_client::auth::sign_params;
/// use okex_api_client::params::Params;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut params = Params::new();
/// params.insert("symbol", "btc_usd");
/// params.insert("type", "buy");
/// let signature = sign_params(&params, "SECRET");
/// assert_eq!(signature.len(), 32);
/// # Ok(())
/// # }
/// ```
pub fn sign_params(params: &Params, secret_key: &str) -> String {
    let mut message = canonical_string(params);
    message.push_str("&secret_key=");
    message.push_str(secret_key);

    let digest = Md5::digest(message.as_bytes());
    hex::encode_upper(digest)
}
