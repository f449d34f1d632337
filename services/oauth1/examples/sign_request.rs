use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use http::header::AUTHORIZATION;
use http::Request;
use log::info;
use oauthsig_core::OsEnv;
use oauthsig_oauth1::{Config, RequestSigner};

fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    // Load everything from OAUTH_* env, fall back to demo credentials.
    let config = Config::new().from_env(&OsEnv);
    let config = if config.consumer_key.is_none() {
        info!("No credentials found in environment, using demo credentials");
        config
            .with_consumer_key("dpf43f3p2l4k3l03")
            .with_consumer_secret("kd94hf93k423kf44")
    } else {
        config
    };

    let signer = RequestSigner::from_config(&config)?;
    let cred = config.credential()?;

    let (mut parts, _) = Request::get("https://photos.example.net/photos?file=vacation.jpg")
        .body(())?
        .into_parts();

    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let nonce = format!("{timestamp:x}");
    signer.sign_request(&mut parts, &cred, &nonce, timestamp, None)?;

    info!("{:?}", cred);
    println!("{}", parts.headers[AUTHORIZATION].to_str()?);
    Ok(())
}
