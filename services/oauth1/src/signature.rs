use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use oauthsig_core::hash::base64_hmac_sha1;
use oauthsig_core::hash::base64_rsa_sha1;
use oauthsig_core::Error;
use oauthsig_core::Result;

use crate::base_string::generate_base;
use crate::encode::rfc3986_encode;
use crate::params::ParameterSet;

/// Signature methods defined by
/// [RFC 5849 section 3.4](https://www.rfc-editor.org/rfc/rfc5849#section-3.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureMethod {
    /// `HMAC-SHA1`
    HmacSha1,
    /// `RSA-SHA1`
    RsaSha1,
    /// `PLAINTEXT`
    Plaintext,
}

impl SignatureMethod {
    /// The `oauth_signature_method` value of this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureMethod::HmacSha1 => "HMAC-SHA1",
            SignatureMethod::RsaSha1 => "RSA-SHA1",
            SignatureMethod::Plaintext => "PLAINTEXT",
        }
    }

    /// Compute the `oauth_signature` value.
    ///
    /// `secret` is the consumer secret for `HMAC-SHA1` and `PLAINTEXT`, and
    /// the PEM encoded private key for `RSA-SHA1`. `token_secret` is not
    /// used by `RSA-SHA1`. Absent secrets are signed as empty strings.
    pub fn sign(
        &self,
        http_method: Option<&str>,
        base_uri: &str,
        params: &ParameterSet,
        secret: Option<&str>,
        token_secret: Option<&str>,
    ) -> Result<String> {
        match self {
            SignatureMethod::HmacSha1 => Ok(hmac_sign(
                http_method,
                base_uri,
                params,
                secret,
                token_secret,
            )),
            SignatureMethod::RsaSha1 => {
                rsa_sign(http_method, base_uri, params, secret, token_secret)
            }
            SignatureMethod::Plaintext => Ok(plaintext_sign(secret, token_secret)),
        }
    }
}

impl FromStr for SignatureMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "HMAC-SHA1" => Ok(SignatureMethod::HmacSha1),
            "RSA-SHA1" => Ok(SignatureMethod::RsaSha1),
            "PLAINTEXT" => Ok(SignatureMethod::Plaintext),
            v => Err(Error::unsupported_method(v)),
        }
    }
}

impl Display for SignatureMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `encode(consumer_secret) + "&" + encode(token_secret)`
fn signing_key(consumer_secret: Option<&str>, token_secret: Option<&str>) -> String {
    format!(
        "{}&{}",
        rfc3986_encode(consumer_secret.unwrap_or_default()),
        rfc3986_encode(token_secret.unwrap_or_default())
    )
}

/// Sign with `HMAC-SHA1`, returns the base64 encoded digest.
///
/// - [HMAC-SHA1](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.2)
pub fn hmac_sign(
    http_method: Option<&str>,
    base_uri: &str,
    params: &ParameterSet,
    consumer_secret: Option<&str>,
    token_secret: Option<&str>,
) -> String {
    let base = generate_base(http_method, base_uri, params);
    let key = signing_key(consumer_secret, token_secret);

    base64_hmac_sha1(key.as_bytes(), base.as_bytes())
}

/// Sign with `RSA-SHA1`, returns the base64 encoded signature.
///
/// `private_key` is a PKCS#8 or PKCS#1 PEM document. `token_secret` is
/// accepted for symmetry with the other methods and ignored.
///
/// - [RSA-SHA1](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.3)
pub fn rsa_sign(
    http_method: Option<&str>,
    base_uri: &str,
    params: &ParameterSet,
    private_key: Option<&str>,
    _token_secret: Option<&str>,
) -> Result<String> {
    let base = generate_base(http_method, base_uri, params);

    base64_rsa_sha1(private_key.unwrap_or_default(), base.as_bytes())
}

/// Sign with `PLAINTEXT`, the signing key itself is the signature.
///
/// - [PLAINTEXT](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.4)
pub fn plaintext_sign(consumer_secret: Option<&str>, token_secret: Option<&str>) -> String {
    signing_key(consumer_secret, token_secret)
}

/// Sign with the method named by `signature_method`.
///
/// Unknown methods fail with [`oauthsig_core::ErrorKind::UnsupportedMethod`]
/// before any base string is computed.
pub fn sign(
    signature_method: &str,
    http_method: Option<&str>,
    base_uri: &str,
    params: &ParameterSet,
    consumer_secret: Option<&str>,
    token_secret: Option<&str>,
) -> Result<String> {
    let method = SignatureMethod::from_str(signature_method)?;
    method.sign(http_method, base_uri, params, consumer_secret, token_secret)
}
