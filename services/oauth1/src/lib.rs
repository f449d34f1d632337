//! OAuth 1.0a request signer
//!
//! Builds the [RFC 5849](https://www.rfc-editor.org/rfc/rfc5849) signature
//! base string for a request and signs it with `HMAC-SHA1`, `RSA-SHA1` or
//! `PLAINTEXT`.
//!
//! ## Example
//!
//! ```
//! use oauthsig_oauth1::{generate_base, hmac_sign, sign, ParameterSet};
//!
//! let params = ParameterSet::new()
//!     .with("oauth_consumer_key", "dpf43f3p2l4k3l03")
//!     .with("file", "vacation.jpg");
//!
//! let base = generate_base(Some("get"), "http://photos.example.net/photos", &params);
//! assert!(base.starts_with("GET&http%3A%2F%2Fphotos.example.net%2Fphotos&"));
//!
//! let signature = hmac_sign(
//!     Some("GET"),
//!     "http://photos.example.net/photos",
//!     &params,
//!     Some("kd94hf93k423kf44"),
//!     Some("pfkkdhi9sl3r4s00"),
//! );
//! assert_eq!(
//!     signature,
//!     sign(
//!         "HMAC-SHA1",
//!         Some("GET"),
//!         "http://photos.example.net/photos",
//!         &params,
//!         Some("kd94hf93k423kf44"),
//!         Some("pfkkdhi9sl3r4s00"),
//!     )?
//! );
//! # Ok::<(), oauthsig_core::Error>(())
//! ```

mod constants;

mod encode;
pub use encode::rfc3986_encode;

mod params;
pub use params::{normalize, ParameterSet, ParameterValue};

mod base_string;
pub use base_string::{base_uri, form_parameters, generate_base, query_parameters};

mod signature;
pub use signature::{hmac_sign, plaintext_sign, rsa_sign, sign, SignatureMethod};

mod credential;
pub use credential::Credential;

mod config;
pub use config::Config;

mod sign_request;
pub use sign_request::{authorization_header, RequestSigner};
