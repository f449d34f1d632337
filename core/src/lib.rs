//! Core components for signing OAuth 1.0a requests.
//!
//! This crate provides the foundational pieces shared by the oauthsig
//! signers: the error type, the cryptographic primitives a signature method
//! is computed with, and helpers for loading configuration without leaking
//! secrets.
//!
//! ## Example
//!
//! ```
//! use oauthsig_core::hash::base64_hmac_sha1;
//! use oauthsig_core::utils::Redact;
//!
//! let signature = base64_hmac_sha1(b"consumer_secret&token_secret", b"GET&...");
//! assert_eq!(signature.len(), 28);
//!
//! let secret = "kd94hf93k423kf44";
//! assert_eq!(format!("{:?}", Redact::from(secret)), "kd9***f44");
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Base64, HMAC-SHA1 and RSA-SHA1 primitives
//! - [`utils`]: General utilities including data redaction
//! - [`Env`]: Environment variable access for configuration loading

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod utils;

mod env;
pub use env::Env;
pub use env::OsEnv;
pub use env::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};
