//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::OkexError;
use crate::spot::rest::OkexRestClient;
use crate::spot::rest::endpoints::public;

impl OkexRestClient {
    /// Get the ticker for a trading pair.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use okex_api_client::spot::rest::OkexRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = OkexRestClient::new();
    ///     let ticker = client.get_ticker("ltc_usd").await?;
    ///     println!("{} bid / {} ask", ticker.ticker.buy, ticker.ticker.sell);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_ticker(&self, symbol: &str) -> Result<TickerResponse, OkexError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            symbol: &'a str,
        }
        self.public_get(public::TICKER, &Params { symbol }).await
    }

    /// Get the order book for a trading pair.
    ///
    /// Use [`DepthRequest::new`] for the default size (200) and merge (1).
    pub async fn get_depth(&self, request: &DepthRequest) -> Result<OrderBook, OkexError> {
        self.public_get(public::DEPTH, request).await
    }

    /// Get recent trades.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Trading pair.
    /// * `since` - Only return trades with an id greater than this.
    pub async fn get_trades(&self, symbol: &str, since: Option<i64>) -> Result<Vec<Trade>, OkexError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            symbol: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            since: Option<i64>,
        }
        self.public_get(public::TRADES, &Params { symbol, since })
            .await
    }

    /// Get candlestick data.
    pub async fn get_kline(&self, request: &KlineRequest) -> Result<Vec<Candle>, OkexError> {
        self.public_get(public::KLINE, request).await
    }

    /// Get the lending order book for a currency.
    pub async fn get_lend_depth(&self, symbol: &str) -> Result<LendDepth, OkexError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            symbol: &'a str,
        }
        self.public_get(public::LEND_DEPTH, &Params { symbol }).await
    }
}
