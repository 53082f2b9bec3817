//! OKEx spot trading API clients.
//!
//! This module provides:
//! - [`rest`] - REST API client for the v1 HTTP endpoints

pub mod rest;

pub use rest::OkexRestClient;
