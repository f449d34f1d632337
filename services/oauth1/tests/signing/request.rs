use anyhow::Result;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::Request;
use oauthsig_core::StaticEnv;
use oauthsig_oauth1::{Config, Credential, RequestSigner, SignatureMethod};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

use crate::init_logger;

#[test]
fn test_sign_twitter_request() -> Result<()> {
    init_logger();

    let cred = Credential::new(
        "xvz1evFS4wEEPTGEFPHBog",
        "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
    )
    .with_token(
        "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
        "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
    );
    let body = "status=Hello%20Ladies%20%2b%20Gentlemen%2c%20a%20signed%20OAuth%20request%21";

    let (mut parts, _) =
        Request::post("https://api.twitter.com/1/statuses/update.json?include_entities=true")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(())?
            .into_parts();

    RequestSigner::new(SignatureMethod::HmacSha1).sign_request(
        &mut parts,
        &cred,
        "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg",
        1318622958,
        Some(body.as_bytes()),
    )?;

    assert_eq!(
        parts.headers[AUTHORIZATION].to_str()?,
        r#"OAuth oauth_consumer_key="xvz1evFS4wEEPTGEFPHBog", oauth_nonce="kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg", oauth_signature="tnnArxj06cWHq44gCs1OSKk%2FjLY%3D", oauth_signature_method="HMAC-SHA1", oauth_timestamp="1318622958", oauth_token="370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb", oauth_version="1.0""#
    );
    // The request itself is left untouched.
    assert_eq!(
        parts.uri.to_string(),
        "https://api.twitter.com/1/statuses/update.json?include_entities=true"
    );
    Ok(())
}

#[test]
fn test_sign_request_from_env_config() -> Result<()> {
    init_logger();

    let env = StaticEnv {
        envs: HashMap::from([
            ("OAUTH_CONSUMER_KEY".to_string(), "dpf43f3p2l4k3l03".to_string()),
            ("OAUTH_CONSUMER_SECRET".to_string(), "kd94hf93k423kf44".to_string()),
            ("OAUTH_TOKEN".to_string(), "nnch734d00sl2jdk".to_string()),
            ("OAUTH_TOKEN_SECRET".to_string(), "pfkkdhi9sl3r4s00".to_string()),
            ("OAUTH_REALM".to_string(), "Photos".to_string()),
        ]),
    };
    let config = Config::new().from_env(&env);
    let signer = RequestSigner::from_config(&config)?;
    let cred = config.credential()?;

    let (mut parts, _) =
        Request::get("http://photos.example.net:80/photos?file=vacation.jpg&size=original")
            .body(())?
            .into_parts();
    signer.sign_request(&mut parts, &cred, "chapoH", 137131202, None)?;

    // Same request as RFC 5849 section 1.2, plus oauth_version.
    assert_eq!(
        parts.headers[AUTHORIZATION].to_str()?,
        r#"OAuth realm="Photos", oauth_consumer_key="dpf43f3p2l4k3l03", oauth_nonce="chapoH", oauth_signature="1IAE9RzK%2BDqSqVTdQ%2F0zWANXVzs%3D", oauth_signature_method="HMAC-SHA1", oauth_timestamp="137131202", oauth_token="nnch734d00sl2jdk", oauth_version="1.0""#
    );
    Ok(())
}

#[test]
fn test_sign_request_unsupported_method_in_config() {
    init_logger();

    let config = Config::new()
        .with_consumer_key("key")
        .with_signature_method("HMAC-SHA256");

    let err = RequestSigner::from_config(&config).unwrap_err();
    assert!(err.is_unsupported_method());
}

#[test]
fn test_sign_request_without_authority() -> Result<()> {
    init_logger();

    let (mut parts, _) = Request::get("/photos").body(())?.into_parts();
    let result = RequestSigner::new(SignatureMethod::Plaintext).sign_request(
        &mut parts,
        &Credential::new("key", "secret"),
        "nonce",
        1,
        None,
    );

    assert!(result.is_err());
    assert!(parts.headers.get(AUTHORIZATION).is_none());
    Ok(())
}
