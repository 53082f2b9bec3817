//! Authentication module for OKEx API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - MD5 signature generation for authenticated requests

mod credentials;
mod signature;

pub use credentials::{
    API_KEY_VAR, Credentials, CredentialsProvider, EnvCredentials, SECRET_KEY_VAR,
    StaticCredentials,
};
pub use signature::{canonical_string, sign_params};
