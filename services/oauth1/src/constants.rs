use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used to configure the signer.
pub const OAUTH_CONSUMER_KEY: &str = "OAUTH_CONSUMER_KEY";
pub const OAUTH_CONSUMER_SECRET: &str = "OAUTH_CONSUMER_SECRET";
pub const OAUTH_TOKEN: &str = "OAUTH_TOKEN";
pub const OAUTH_TOKEN_SECRET: &str = "OAUTH_TOKEN_SECRET";
pub const OAUTH_PRIVATE_KEY: &str = "OAUTH_PRIVATE_KEY";
pub const OAUTH_SIGNATURE_METHOD: &str = "OAUTH_SIGNATURE_METHOD";
pub const OAUTH_REALM: &str = "OAUTH_REALM";

// Protocol parameters, RFC 5849 section 3.1.
pub const OAUTH_CONSUMER_KEY_PARAM: &str = "oauth_consumer_key";
pub const OAUTH_TOKEN_PARAM: &str = "oauth_token";
pub const OAUTH_SIGNATURE_METHOD_PARAM: &str = "oauth_signature_method";
pub const OAUTH_TIMESTAMP_PARAM: &str = "oauth_timestamp";
pub const OAUTH_NONCE_PARAM: &str = "oauth_nonce";
pub const OAUTH_VERSION_PARAM: &str = "oauth_version";
pub const OAUTH_SIGNATURE_PARAM: &str = "oauth_signature";
pub const OAUTH_VERSION: &str = "1.0";

pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// AsciiSet for [RFC 3986 percent encoding](https://www.rfc-editor.org/rfc/rfc5849#section-3.6)
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static OAUTH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
