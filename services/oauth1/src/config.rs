use std::fmt::{Debug, Formatter};

use oauthsig_core::utils::Redact;
use oauthsig_core::{Env, Error, Result};
use serde::Deserialize;

use crate::constants::*;
use crate::credential::Credential;
use crate::signature::SignatureMethod;

/// Config carries all the configuration for OAuth 1.0a signing.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_CONSUMER_KEY`]
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_CONSUMER_SECRET`]
    pub consumer_secret: Option<String>,
    /// `token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_TOKEN`]
    pub token: Option<String>,
    /// `token_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_TOKEN_SECRET`]
    pub token_secret: Option<String>,
    /// PEM encoded `private_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_PRIVATE_KEY`]
    pub private_key: Option<String>,
    /// `signature_method` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_SIGNATURE_METHOD`]
    ///
    /// Defaults to `HMAC-SHA1`.
    pub signature_method: Option<String>,
    /// `realm` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_REALM`]
    pub realm: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set consumer_key
    pub fn with_consumer_key(mut self, consumer_key: impl Into<String>) -> Self {
        self.consumer_key = Some(consumer_key.into());
        self
    }

    /// Set consumer_secret
    pub fn with_consumer_secret(mut self, consumer_secret: impl Into<String>) -> Self {
        self.consumer_secret = Some(consumer_secret.into());
        self
    }

    /// Set token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set token_secret
    pub fn with_token_secret(mut self, token_secret: impl Into<String>) -> Self {
        self.token_secret = Some(token_secret.into());
        self
    }

    /// Set private_key
    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(private_key.into());
        self
    }

    /// Set signature_method
    pub fn with_signature_method(mut self, signature_method: impl Into<String>) -> Self {
        self.signature_method = Some(signature_method.into());
        self
    }

    /// Set realm
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    /// Load config from env, values already set are kept.
    pub fn from_env(mut self, env: &impl Env) -> Self {
        let fields = [
            (&mut self.consumer_key, OAUTH_CONSUMER_KEY),
            (&mut self.consumer_secret, OAUTH_CONSUMER_SECRET),
            (&mut self.token, OAUTH_TOKEN),
            (&mut self.token_secret, OAUTH_TOKEN_SECRET),
            (&mut self.private_key, OAUTH_PRIVATE_KEY),
            (&mut self.signature_method, OAUTH_SIGNATURE_METHOD),
            (&mut self.realm, OAUTH_REALM),
        ];
        for (field, key) in fields {
            if field.is_none() {
                *field = env.var(key);
            }
        }

        self
    }

    /// The configured signature method, `HMAC-SHA1` if unset.
    pub fn signature_method(&self) -> Result<SignatureMethod> {
        match self.signature_method.as_deref() {
            None => Ok(SignatureMethod::HmacSha1),
            Some(v) => v.parse(),
        }
    }

    /// Build the credential described by this config.
    pub fn credential(&self) -> Result<Credential> {
        let consumer_key = self
            .consumer_key
            .clone()
            .ok_or_else(|| Error::config_invalid("consumer_key is required"))?;

        Ok(Credential {
            consumer_key,
            consumer_secret: self.consumer_secret.clone(),
            token: self.token.clone(),
            token_secret: self.token_secret.clone(),
            private_key: self.private_key.clone(),
        })
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &self.consumer_secret.as_ref().map(Redact::from))
            .field("token", &self.token)
            .field("token_secret", &self.token_secret.as_ref().map(Redact::from))
            .field("private_key", &self.private_key.as_ref().map(Redact::from))
            .field("signature_method", &self.signature_method)
            .field("realm", &self.realm)
            .finish()
    }
}
