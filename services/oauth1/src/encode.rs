use percent_encoding::utf8_percent_encode;

use crate::constants::OAUTH_ENCODE_SET;

/// Percent encode `s` as required by
/// [RFC 5849 section 3.6](https://www.rfc-editor.org/rfc/rfc5849#section-3.6).
///
/// Every octet of the UTF-8 input is escaped as `%XX` with uppercase hex,
/// except the unreserved characters `A-Z a-z 0-9 - . _ ~`. This is stricter
/// than generic URI component encoding: `!`, `*`, `'`, `(` and `)` are
/// escaped too.
///
/// ```
/// use oauthsig_oauth1::rfc3986_encode;
///
/// assert_eq!(rfc3986_encode("!*'()"), "%21%2A%27%28%29");
/// ```
pub fn rfc3986_encode(s: &str) -> String {
    utf8_percent_encode(s, &OAUTH_ENCODE_SET).to_string()
}
