//! Common types used across the OKEx client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
