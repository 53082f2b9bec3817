//! Types for public REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::KlineInterval;
use crate::types::serde_helpers::lenient_i64;

/// Default number of order book levels requested by [`DepthRequest::new`].
pub const DEFAULT_DEPTH_SIZE: u32 = 200;
/// Default merge setting requested by [`DepthRequest::new`].
pub const DEFAULT_DEPTH_MERGE: u32 = 1;

/// Ticker response.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerResponse {
    /// Server time (unix seconds).
    #[serde(deserialize_with = "lenient_i64::deserialize")]
    pub date: i64,
    /// Ticker data.
    pub ticker: Ticker,
}

/// Ticker information.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    /// Best bid.
    pub buy: Decimal,
    /// Best ask.
    pub sell: Decimal,
    /// 24h high.
    pub high: Decimal,
    /// 24h low.
    pub low: Decimal,
    /// Last trade price.
    pub last: Decimal,
    /// 24h volume.
    pub vol: Decimal,
}

/// Request parameters for the order book.
#[derive(Debug, Clone, Serialize)]
pub struct DepthRequest {
    /// Trading pair (e.g. "btc_usd").
    pub symbol: String,
    /// Number of levels per side (1-200).
    pub size: u32,
    /// Merge depth levels (1 merges, 0 does not).
    pub merge: u32,
}

impl DepthRequest {
    /// Create a request with the default size of 200 and merge of 1.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            size: DEFAULT_DEPTH_SIZE,
            merge: DEFAULT_DEPTH_MERGE,
        }
    }

    /// Set the number of levels.
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the merge option.
    pub fn merge(mut self, merge: u32) -> Self {
        self.merge = merge;
        self
    }
}

/// Order book with `[price, amount]` levels.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBook {
    /// Asks, as returned (highest price first).
    pub asks: Vec<(Decimal, Decimal)>,
    /// Bids (highest price first).
    pub bids: Vec<(Decimal, Decimal)>,
}

impl OrderBook {
    /// Lowest ask.
    pub fn best_ask(&self) -> Option<(Decimal, Decimal)> {
        self.asks.iter().min_by_key(|(price, _)| *price).copied()
    }

    /// Highest bid.
    pub fn best_bid(&self) -> Option<(Decimal, Decimal)> {
        self.bids.iter().max_by_key(|(price, _)| *price).copied()
    }
}

/// A public trade.
#[derive(Debug, Clone, Deserialize)]
pub struct Trade {
    /// Trade id.
    #[serde(deserialize_with = "lenient_i64::deserialize")]
    pub tid: i64,
    /// Trade time (unix seconds).
    #[serde(deserialize_with = "lenient_i64::deserialize")]
    pub date: i64,
    /// Trade time in milliseconds, when provided.
    #[serde(default)]
    pub date_ms: Option<i64>,
    /// Price.
    pub price: Decimal,
    /// Amount.
    pub amount: Decimal,
    /// Taker side ("buy" or "sell").
    #[serde(rename = "type")]
    pub side: String,
}

/// Request parameters for candlesticks.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KlineRequest {
    /// Trading pair.
    pub symbol: String,
    /// Interval.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub interval: Option<KlineInterval>,
    /// Number of candles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Only return candles after this timestamp (milliseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
}

impl KlineRequest {
    /// Create a new request for a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// Set the interval.
    pub fn interval(mut self, interval: KlineInterval) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Set the number of candles.
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the since timestamp.
    pub fn since(mut self, since: i64) -> Self {
        self.since = Some(since);
        self
    }
}

/// A single candlestick, sent by OKEx as
/// `[timestamp, open, high, low, close, volume]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "CandleRow")]
pub struct Candle {
    /// Open time (unix milliseconds).
    pub timestamp: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

type CandleRow = (i64, Decimal, Decimal, Decimal, Decimal, Decimal);

impl From<CandleRow> for Candle {
    fn from((timestamp, open, high, low, close, volume): CandleRow) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Lending order book.
#[derive(Debug, Clone, Deserialize)]
pub struct LendDepth {
    /// Lending offers.
    #[serde(default)]
    pub lend_depth: Vec<LendOffer>,
}

/// A single lending offer.
#[derive(Debug, Clone, Deserialize)]
pub struct LendOffer {
    /// Amount offered.
    pub amount: Decimal,
    /// Lending term, e.g. "10 days".
    pub days: String,
    /// Number of offers at this rate.
    #[serde(deserialize_with = "lenient_i64::deserialize")]
    pub num: i64,
    /// Daily interest rate (percent).
    pub rate: Decimal,
}
