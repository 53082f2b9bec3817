//! Example: Fetching public market data from OKEx.
//!
//! Public endpoints need no credentials.
//!
//! Run with: cargo run --example public_data

use okex_api_client::spot::rest::OkexRestClient;
use okex_api_client::spot::rest::public::{DepthRequest, KlineRequest};
use okex_api_client::types::KlineInterval;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = OkexRestClient::new();

    println!("=== Ticker (btc_usd) ===");
    let ticker = client.get_ticker("btc_usd").await?;
    println!("Date: {}", ticker.date);
    println!("  Last: {}", ticker.ticker.last);
    println!("  Buy: {} Sell: {}", ticker.ticker.buy, ticker.ticker.sell);
    println!("  High: {} Low: {}", ticker.ticker.high, ticker.ticker.low);
    println!("  Volume: {}", ticker.ticker.vol);

    println!("\n=== Order Book (btc_usd, size=5) ===");
    let book = client.get_depth(&DepthRequest::new("btc_usd").size(5)).await?;
    if let Some((price, amount)) = book.best_ask() {
        println!("Best ask: {} @ {}", amount, price);
    }
    if let Some((price, amount)) = book.best_bid() {
        println!("Best bid: {} @ {}", amount, price);
    }

    println!("\n=== Recent Trades (btc_usd) ===");
    let trades = client.get_trades("btc_usd", None).await?;
    for trade in trades.iter().take(5) {
        println!(
            "  #{} {} {} @ {} (time: {})",
            trade.tid, trade.side, trade.amount, trade.price, trade.date
        );
    }

    println!("\n=== Candles (ltc_usd, 1 hour) ===");
    let request = KlineRequest::new("ltc_usd")
        .interval(KlineInterval::Hour1)
        .size(3);
    for candle in client.get_kline(&request).await? {
        println!(
            "  Time: {}, O: {}, H: {}, L: {}, C: {}, Vol: {}",
            candle.timestamp, candle.open, candle.high, candle.low, candle.close, candle.volume
        );
    }

    println!("\n=== Lending Depth (btc_usd) ===");
    let lend = client.get_lend_depth("btc_usd").await?;
    for offer in lend.lend_depth.iter().take(5) {
        println!(
            "  {} for {} at {} ({} offers)",
            offer.amount, offer.days, offer.rate, offer.num
        );
    }

    println!("\nDone!");
    Ok(())
}
