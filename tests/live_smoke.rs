use std::sync::Arc;

use okex_api_client::auth::EnvCredentials;
use okex_api_client::spot::rest::OkexRestClient;

fn live_tests_enabled() -> bool {
    std::env::var("OKEX_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = OkexRestClient::new();
    let ticker = client.get_ticker("btc_usd").await?;
    assert!(ticker.ticker.last > rust_decimal::Decimal::ZERO);

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = OkexRestClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    let info = client.get_user_info().await?;
    assert!(info.result);

    Ok(())
}
