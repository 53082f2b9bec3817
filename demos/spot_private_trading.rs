//! Example: Signed account and order requests.
//!
//! Reads OKEX_API_KEY and OKEX_SECRET_KEY from the environment (or a `.env`
//! file). The order is priced far below the market and cancelled right away.
//!
//! Run with: cargo run --example spot_private_trading

use std::sync::Arc;

use okex_api_client::auth::EnvCredentials;
use okex_api_client::spot::rest::OkexRestClient;
use okex_api_client::spot::rest::private::{OrderHistoryRequest, PlaceOrderRequest};
use okex_api_client::types::{OrderHistoryStatus, TradeType};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let credentials = EnvCredentials::from_env()?;
    let client = OkexRestClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    println!("=== Balances ===");
    let info = client.get_user_info().await?;
    for (currency, free) in &info.info.funds.free {
        println!("  {}: free {} total {}", currency, free, info.info.funds.total(currency));
    }

    println!("\n=== Place and cancel ===");
    let request = PlaceOrderRequest::limit(
        "ltc_usd",
        TradeType::Buy,
        Decimal::new(1, 2),
        Decimal::new(1, 1),
    );
    match client.place_order(&request).await {
        Ok(placed) => {
            println!("Placed order {}", placed.order_id);
            let cancelled = client
                .cancel_order("ltc_usd", &placed.order_id.to_string())
                .await?;
            println!("Cancelled: {:?}", cancelled.result);
        }
        Err(err) if err.api_error().is_some_and(|api| api.is_insufficient_balance()) => {
            println!("Not enough funds to place order");
        }
        Err(err) => return Err(err.into()),
    }

    println!("\n=== Open orders ===");
    let open = client.get_order_info("ltc_usd", -1).await?;
    for order in &open.orders {
        println!(
            "  #{} {} {} @ {} ({:?})",
            order.order_id,
            order.trade_type,
            order.amount,
            order.price,
            order.status()
        );
    }

    println!("\n=== Filled order history ===");
    let request = OrderHistoryRequest::new("ltc_usd", OrderHistoryStatus::Filled).page(1, 10);
    let history = client.get_order_history(&request).await?;
    println!("Total filled orders: {}", history.total);

    Ok(())
}
