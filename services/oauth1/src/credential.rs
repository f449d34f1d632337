use std::fmt::{Debug, Formatter};

use oauthsig_core::utils::Redact;

use crate::signature::SignatureMethod;

/// Credential for OAuth 1.0a.
#[derive(Clone, Default)]
pub struct Credential {
    /// Consumer key, sent as `oauth_consumer_key`.
    pub consumer_key: String,
    /// Consumer secret, keys `HMAC-SHA1` and `PLAINTEXT`.
    pub consumer_secret: Option<String>,
    /// Token, sent as `oauth_token` when present.
    pub token: Option<String>,
    /// Token secret, keys `HMAC-SHA1` and `PLAINTEXT`.
    pub token_secret: Option<String>,
    /// PEM encoded private key, keys `RSA-SHA1`.
    pub private_key: Option<String>,
}

impl Credential {
    /// Create a new credential with the consumer key and secret.
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: Some(consumer_secret.into()),
            ..Default::default()
        }
    }

    /// Set token and token secret.
    pub fn with_token(mut self, token: impl Into<String>, token_secret: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self.token_secret = Some(token_secret.into());
        self
    }

    /// Set the PEM encoded private key.
    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(private_key.into());
        self
    }

    /// The first secret fed into `method`: the private key for
    /// `RSA-SHA1`, the consumer secret otherwise.
    pub(crate) fn secret_for(&self, method: SignatureMethod) -> Option<&str> {
        match method {
            SignatureMethod::RsaSha1 => self.private_key.as_deref(),
            SignatureMethod::HmacSha1 | SignatureMethod::Plaintext => {
                self.consumer_secret.as_deref()
            }
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("token", &self.token)
            .field("token_secret", &Redact::from(&self.token_secret))
            .field("private_key", &Redact::from(&self.private_key))
            .finish()
    }
}
