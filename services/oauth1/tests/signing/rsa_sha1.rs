use anyhow::Result;
use oauthsig_oauth1::{rsa_sign, sign, ParameterSet, SignatureMethod};
use pretty_assertions::assert_eq;

use crate::init_logger;

const PKCS1_KEY: &str = include_str!("../../testdata/rsa_pkcs1.pem");
const PKCS8_KEY: &str = include_str!("../../testdata/rsa_pkcs8.pem");

fn params() -> ParameterSet {
    ParameterSet::new()
        .with("oauth_consumer_key", "dpf43f3p2l4k3l03")
        .with("oauth_signature_method", "RSA-SHA1")
        .with("oauth_timestamp", "137131200")
        .with("oauth_nonce", "wIjqoS")
        .with("oauth_version", "1.0")
        .with("file", "vacation.jpg")
        .with("size", "original")
}

#[test]
fn test_rsa_sha1() -> Result<()> {
    init_logger();

    // openssl dgst -sha1 -sign rsa_pkcs8.pem over the base string.
    let expected = "cJyHJrqR34JX+6JSeX6EqV/bE2Q39eQW8k1Q3TlWxIrIjYNi9yvhMgoeE80MaU+NiCRBgcJCU4IBBWjcYCUXy9hIOPDqfO65avyJtjh2Bf+nFGTEHq+7nz8r4fGeKERWriAyxc4waQvDBKapEKmW7/5tj+JqSumHnOcPn36ipnk=";

    let pkcs8 = rsa_sign(
        Some("GET"),
        "http://photos.example.net/photos",
        &params(),
        Some(PKCS8_KEY),
        None,
    )?;
    let pkcs1 = sign(
        "RSA-SHA1",
        Some("GET"),
        "http://photos.example.net/photos",
        &params(),
        Some(PKCS1_KEY),
        Some("ignored"),
    )?;

    assert_eq!(pkcs8, expected);
    assert_eq!(pkcs1, expected);
    Ok(())
}

#[test]
fn test_rsa_sha1_structure() -> Result<()> {
    init_logger();

    let signature = SignatureMethod::RsaSha1.sign(
        None,
        "http://photos.example.net/photos",
        &ParameterSet::new(),
        Some(PKCS1_KEY),
        None,
    )?;

    // 128 bytes for a 1024 bit modulus.
    assert_eq!(signature.len(), 172);
    assert!(signature.ends_with('='));
    Ok(())
}
