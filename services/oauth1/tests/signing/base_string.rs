use anyhow::Result;
use oauthsig_oauth1::{generate_base, hmac_sign, normalize, sign, ParameterSet};
use pretty_assertions::assert_eq;

use crate::init_logger;

/// Parameters of the request in RFC 5849 section 3.4.1.1.
fn rfc5849_params() -> ParameterSet {
    ParameterSet::new()
        .with("b5", "=%3D")
        .with("a3", vec!["a", "2 q"])
        .with("c@", "")
        .with("a2", "r b")
        .with("oauth_consumer_key", "9djdj82h48djs9d2")
        .with("oauth_token", "kkk9d7dh3k39sjv7")
        .with("oauth_signature_method", "HMAC-SHA1")
        .with("oauth_timestamp", "137131201")
        .with("oauth_nonce", "7d8f3e4a")
        .with("c2", "")
}

#[test]
fn test_rfc5849_normalized_parameters() {
    init_logger();

    assert_eq!(
        normalize(&rfc5849_params()),
        "a2=r%20b&a3=2%20q&a3=a&b5=%3D%253D&c%40=&c2=&oauth_consumer_key=9djdj82h48djs9d2&oauth_nonce=7d8f3e4a&oauth_signature_method=HMAC-SHA1&oauth_timestamp=137131201&oauth_token=kkk9d7dh3k39sjv7"
    );
}

#[test]
fn test_rfc5849_base_string() {
    init_logger();

    assert_eq!(
        generate_base(Some("POST"), "http://example.com/request", &rfc5849_params()),
        "POST&http%3A%2F%2Fexample.com%2Frequest&a2%3Dr%2520b%26a3%3D2%2520q%26a3%3Da%26b5%3D%253D%25253D%26c%2540%3D%26c2%3D%26oauth_consumer_key%3D9djdj82h48djs9d2%26oauth_nonce%3D7d8f3e4a%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D137131201%26oauth_token%3Dkkk9d7dh3k39sjv7"
    );
}

#[test]
fn test_rfc5849_photos_hmac_sha1() -> Result<()> {
    init_logger();

    let params = ParameterSet::new()
        .with("oauth_consumer_key", "dpf43f3p2l4k3l03")
        .with("oauth_token", "nnch734d00sl2jdk")
        .with("oauth_signature_method", "HMAC-SHA1")
        .with("oauth_timestamp", "137131202")
        .with("oauth_nonce", "chapoH")
        .with("file", "vacation.jpg")
        .with("size", "original");

    let signature = sign(
        "HMAC-SHA1",
        Some("GET"),
        "http://photos.example.net/photos",
        &params,
        Some("kd94hf93k423kf44"),
        Some("pfkkdhi9sl3r4s00"),
    )?;

    // Published in RFC 5849 section 1.2
    assert_eq!(signature, "MdpQcU8iPSUjWoN/UDMsK2sui9I=");
    Ok(())
}

#[test]
fn test_twitter_hmac_sha1() {
    init_logger();

    let params = ParameterSet::new()
        .with("status", "Hello Ladies + Gentlemen, a signed OAuth request!")
        .with("include_entities", "true")
        .with("oauth_consumer_key", "xvz1evFS4wEEPTGEFPHBog")
        .with("oauth_nonce", "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg")
        .with("oauth_signature_method", "HMAC-SHA1")
        .with("oauth_timestamp", "1318622958")
        .with(
            "oauth_token",
            "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
        )
        .with("oauth_version", "1.0");
    let uri = "https://api.twitter.com/1/statuses/update.json";

    assert_eq!(
        generate_base(Some("post"), uri, &params),
        "POST&https%3A%2F%2Fapi.twitter.com%2F1%2Fstatuses%2Fupdate.json&include_entities%3Dtrue%26oauth_consumer_key%3Dxvz1evFS4wEEPTGEFPHBog%26oauth_nonce%3DkYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1318622958%26oauth_token%3D370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb%26oauth_version%3D1.0%26status%3DHello%2520Ladies%2520%252B%2520Gentlemen%252C%2520a%2520signed%2520OAuth%2520request%2521"
    );

    let consumer_secret = Some("kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw");
    let token_secret = Some("LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE");
    let first = hmac_sign(Some("POST"), uri, &params, consumer_secret, token_secret);
    let second = hmac_sign(Some("POST"), uri, &params, consumer_secret, token_secret);

    // Published in Twitter's "Creating a signature" guide.
    assert_eq!(first, "tnnArxj06cWHq44gCs1OSKk/jLY=");
    assert_eq!(first, second);
}
