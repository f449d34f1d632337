//! OAuth 1.0a request signer
use http::header::AUTHORIZATION;
use http::header::CONTENT_TYPE;
use http::request::Parts;
use http::HeaderMap;
use http::HeaderValue;
use log::debug;
use oauthsig_core::Result;

use crate::base_string::{base_uri, form_parameters, query_parameters};
use crate::config::Config;
use crate::constants::*;
use crate::credential::Credential;
use crate::encode::rfc3986_encode;
use crate::params::ParameterSet;
use crate::signature::SignatureMethod;

/// RequestSigner that implements OAuth 1.0a request signing with the
/// `Authorization` header.
///
/// Nonce and timestamp are picked by the caller for every request.
///
/// - [Making Requests](https://www.rfc-editor.org/rfc/rfc5849#section-3.1)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    method: SignatureMethod,
    realm: Option<String>,
}

impl RequestSigner {
    /// Create a signer for the given signature method.
    pub fn new(method: SignatureMethod) -> Self {
        Self {
            method,
            realm: None,
        }
    }

    /// Create a signer from the method and realm in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            method: config.signature_method()?,
            realm: config.realm.clone(),
        })
    }

    /// Set the realm sent in the `Authorization` header.
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    /// Sign the request and insert the `Authorization` header.
    ///
    /// `form_body` is the request entity-body; it is only signed when the
    /// request carries `Content-Type: application/x-www-form-urlencoded`.
    pub fn sign_request(
        &self,
        parts: &mut Parts,
        cred: &Credential,
        nonce: &str,
        timestamp: u64,
        form_body: Option<&[u8]>,
    ) -> Result<()> {
        let uri = base_uri(&parts.uri)?;
        let protocol = self.protocol_parameters(cred, nonce, timestamp);

        let mut pairs = protocol.clone();
        pairs.extend(query_parameters(&parts.uri).flatten());
        if let Some(body) = form_body.filter(|_| is_form_urlencoded(&parts.headers)) {
            pairs.extend(form_parameters(body).flatten());
        }
        let params: ParameterSet = pairs.into_iter().collect();

        debug!(
            "signing {} {} with {}",
            parts.method.as_str(),
            uri,
            self.method
        );
        let signature = self.method.sign(
            Some(parts.method.as_str()),
            &uri,
            &params,
            cred.secret_for(self.method),
            cred.token_secret.as_deref(),
        )?;

        let mut header = protocol;
        header.push((OAUTH_SIGNATURE_PARAM.to_string(), signature));
        let mut value: HeaderValue =
            authorization_header(self.realm.as_deref(), &header).parse()?;
        value.set_sensitive(true);
        parts.headers.insert(AUTHORIZATION, value);

        Ok(())
    }

    fn protocol_parameters(
        &self,
        cred: &Credential,
        nonce: &str,
        timestamp: u64,
    ) -> Vec<(String, String)> {
        let mut params = vec![(
            OAUTH_CONSUMER_KEY_PARAM.to_string(),
            cred.consumer_key.clone(),
        )];
        if let Some(token) = &cred.token {
            params.push((OAUTH_TOKEN_PARAM.to_string(), token.clone()));
        }
        params.extend([
            (
                OAUTH_SIGNATURE_METHOD_PARAM.to_string(),
                self.method.as_str().to_string(),
            ),
            (OAUTH_TIMESTAMP_PARAM.to_string(), timestamp.to_string()),
            (OAUTH_NONCE_PARAM.to_string(), nonce.to_string()),
            (OAUTH_VERSION_PARAM.to_string(), OAUTH_VERSION.to_string()),
        ]);
        params
    }
}

fn is_form_urlencoded(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|v| v.trim().eq_ignore_ascii_case(FORM_URLENCODED))
}

/// Build the `Authorization` header value.
///
/// ## Format
///
/// ```text
/// OAuth realm="Example", oauth_consumer_key="0685bd9184jfhq22", ...
/// ```
///
/// Names and values are percent encoded and emitted in ascending byte
/// order. The realm goes first and is not encoded.
///
/// ## Reference
///
/// - [Authorization Header](https://www.rfc-editor.org/rfc/rfc5849#section-3.5.1)
pub fn authorization_header(realm: Option<&str>, params: &[(String, String)]) -> String {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (rfc3986_encode(k), rfc3986_encode(v)))
        .collect();
    pairs.sort();

    let mut fields = Vec::with_capacity(pairs.len() + 1);
    if let Some(realm) = realm {
        fields.push(format!(
            "realm=\"{}\"",
            realm.replace('\\', "\\\\").replace('"', "\\\"")
        ));
    }
    fields.extend(pairs.into_iter().map(|(k, v)| format!("{k}=\"{v}\"")));

    format!("OAuth {}", fields.join(", "))
}
