//! OKEx spot REST API client.
//!
//! Provides access to the OKEx v1 spot REST endpoints.
//!
//! # Trait-based API
//!
//! The [`OkexClient`] trait abstracts all endpoint operations, enabling:
//! - Mock implementations for testing
//! - Decorators around the real client
//!
//! ```rust,ignore
//! use okex_api_client::spot::rest::{OkexClient, OkexRestClient};
//!
//! async fn use_client<C: OkexClient>(client: &C) -> Result<(), okex_api_client::error::OkexError> {
//!     let book = client.get_depth(&okex_api_client::spot::rest::public::DepthRequest::new("btc_usd")).await?;
//!     println!("Best bid: {:?}", book.best_bid());
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
pub mod private;
pub mod public;
mod response;
mod traits;

pub use client::{ClientConfig, DEFAULT_TIMEOUT, OkexRestClient, OkexRestClientBuilder};
pub use endpoints::*;
pub use traits::OkexClient;
