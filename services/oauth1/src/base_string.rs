use http::Uri;
use log::debug;
use oauthsig_core::Error;
use oauthsig_core::Result;

use crate::encode::rfc3986_encode;
use crate::params::normalize;
use crate::params::ParameterSet;

/// Construct the signature base string
///
/// ## Format
///
/// ```text
/// encode(UPPERCASE(method)) + "&" +
/// encode(base_uri) + "&" +
/// encode(normalized parameters)
/// ```
///
/// `http_method` defaults to `GET` when absent or empty. `base_uri` is
/// encoded verbatim, callers that start from a full request URI should
/// pass it through [`base_uri`] first.
///
/// ## Reference
///
/// - [Signature Base String](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1)
pub fn generate_base(http_method: Option<&str>, base_uri: &str, params: &ParameterSet) -> String {
    let method = match http_method {
        Some(m) if !m.is_empty() => m.to_uppercase(),
        _ => "GET".to_string(),
    };

    let s = format!(
        "{}&{}&{}",
        rfc3986_encode(&method),
        rfc3986_encode(base_uri),
        rfc3986_encode(&normalize(params))
    );

    debug!("string to sign: {}", &s);
    s
}

/// Build the base string URI of a request.
///
/// The scheme and host are lowercased, the port is kept only when it is
/// not the default one for the scheme, and query and fragment are dropped.
///
/// ## Reference
///
/// - [Base String URI](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1.2)
pub fn base_uri(uri: &Uri) -> Result<String> {
    let authority = uri
        .authority()
        .ok_or_else(|| Error::request_invalid("request without authority is invalid for signing"))?;

    let scheme = uri.scheme_str().unwrap_or("http").to_lowercase();
    let host = authority.host().to_lowercase();
    let default_port = match scheme.as_str() {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    };

    let mut s = format!("{scheme}://{host}");
    if let Some(port) = authority.port_u16() {
        if Some(port) != default_port {
            s.push(':');
            s.push_str(&port.to_string());
        }
    }
    match uri.path() {
        "" => s.push('/'),
        path => s.push_str(path),
    }

    Ok(s)
}

/// Decode the query component of `uri` into parameters.
///
/// ## Reference
///
/// - [Parameter Sources](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1.3.1)
pub fn query_parameters(uri: &Uri) -> ParameterSet {
    uri.query()
        .map(|q| form_parameters(q.as_bytes()))
        .unwrap_or_default()
}

/// Decode an `application/x-www-form-urlencoded` entity-body into
/// parameters.
pub fn form_parameters(body: &[u8]) -> ParameterSet {
    form_urlencoded::parse(body)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
