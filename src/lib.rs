//! # OKEx Client
//!
//! An async Rust client library for the OKEx v1 spot REST API.
//!
//! ## Features
//!
//! - Public market data and signed private endpoints
//! - MD5 request signing over canonically sorted parameters
//! - One error type for transport, HTTP status, parse and exchange errors
//! - Strong typing for request/response types
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use okex_api_client::spot::rest::OkexRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OkexRestClient::new();
//!     let ticker = client.get_ticker("btc_usd").await?;
//!     println!("Ticker: {:?}", ticker);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod params;
pub mod spot;
pub mod transport;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, OkexError};
pub use params::Params;
pub use types::common::{OrderStatus, TradeType};

/// Result type alias using OkexError
pub type Result<T> = std::result::Result<T, OkexError>;
