//! Example: Working with OkexError and ApiError.
//!
//! Run with: cargo run --example error_handling

use okex_api_client::OkexError;
use okex_api_client::error::{ApiError, error_codes};
use okex_api_client::spot::rest::OkexRestClient;

#[tokio::main]
async fn main() {
    let api_error = ApiError::new("10001", "POST request to trade");
    println!("API error: {}", api_error);
    println!("Is rate limit: {}", api_error.is_rate_limit());
    println!("Unknown code: {}", error_codes::describe("99999"));

    let err = OkexError::Api(api_error);
    match &err {
        OkexError::Api(inner)
            if inner.code_number() == Some(error_codes::REQUESTS_TOO_FREQUENT) =>
        {
            println!("Matched known rate limit error");
        }
        _ => println!("Unexpected error type"),
    }

    // Private endpoints fail locally when no credentials are configured.
    let client = OkexRestClient::new();
    match client.get_user_info().await {
        Err(err) if err.is_invalid_input() => println!("Rejected before sending: {}", err),
        Err(err) => println!("Request failed: {}", err),
        Ok(_) => println!("Unexpectedly succeeded"),
    }
}
