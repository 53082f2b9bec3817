//! Common domain types for the OKEx API.

use serde::{Deserialize, Serialize, Serializer};

/// Order type as OKEx names it in the `type` parameter of `trade.do`.
///
/// Market buys are sized by total cost in `price`; market sells by `amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeType {
    /// Limit buy
    Buy,
    /// Limit sell
    Sell,
    /// Market buy, `price` is the amount of quote currency to spend
    BuyMarket,
    /// Market sell, `amount` is the quantity of base currency to sell
    SellMarket,
}

impl TradeType {
    /// Whether this is a market order.
    pub fn is_market(&self) -> bool {
        matches!(self, TradeType::BuyMarket | TradeType::SellMarket)
    }
}

impl std::fmt::Display for TradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TradeType::Buy => "buy",
            TradeType::Sell => "sell",
            TradeType::BuyMarket => "buy_market",
            TradeType::SellMarket => "sell_market",
        };
        write!(f, "{s}")
    }
}

/// Candlestick interval for `kline.do`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KlineInterval {
    #[serde(rename = "1min")]
    Min1,
    #[serde(rename = "3min")]
    Min3,
    #[serde(rename = "5min")]
    Min5,
    #[serde(rename = "15min")]
    Min15,
    #[serde(rename = "30min")]
    Min30,
    #[serde(rename = "1hour")]
    Hour1,
    #[serde(rename = "2hour")]
    Hour2,
    #[serde(rename = "4hour")]
    Hour4,
    #[serde(rename = "6hour")]
    Hour6,
    #[serde(rename = "12hour")]
    Hour12,
    #[serde(rename = "1day")]
    Day1,
    #[serde(rename = "3day")]
    Day3,
    #[serde(rename = "1week")]
    Week1,
}

impl KlineInterval {
    /// Get the interval length in seconds.
    pub fn as_secs(&self) -> u64 {
        match self {
            KlineInterval::Min1 => 60,
            KlineInterval::Min3 => 180,
            KlineInterval::Min5 => 300,
            KlineInterval::Min15 => 900,
            KlineInterval::Min30 => 1800,
            KlineInterval::Hour1 => 3600,
            KlineInterval::Hour2 => 7200,
            KlineInterval::Hour4 => 14400,
            KlineInterval::Hour6 => 21600,
            KlineInterval::Hour12 => 43200,
            KlineInterval::Day1 => 86400,
            KlineInterval::Day3 => 259200,
            KlineInterval::Week1 => 604800,
        }
    }
}

/// Order filter for `orders_info.do` (sent as `type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrdersInfoType {
    /// Orders that are not (fully) filled yet
    Unfilled,
    /// Filled orders
    Filled,
}

impl Serialize for OrdersInfoType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(match self {
            OrdersInfoType::Unfilled => 1,
            OrdersInfoType::Filled => 2,
        })
    }
}

/// Order filter for `order_history.do` (sent as `status`).
///
/// Note the codes differ from [`OrdersInfoType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderHistoryStatus {
    /// Orders that are not (fully) filled yet
    Unfilled,
    /// Filled orders
    Filled,
}

impl Serialize for OrderHistoryStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(match self {
            OrderHistoryStatus::Unfilled => 0,
            OrderHistoryStatus::Filled => 1,
        })
    }
}

/// Record kind for `account_records.do` (sent as `type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountRecordType {
    /// Deposits
    Deposit,
    /// Withdrawals
    Withdrawal,
    /// Cancelled withdrawals
    CancelledWithdrawal,
}

impl Serialize for AccountRecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(match self {
            AccountRecordType::Deposit => 0,
            AccountRecordType::Withdrawal => 1,
            AccountRecordType::CancelledWithdrawal => 2,
        })
    }
}

/// Order status codes reported in order listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Cancelled,
    Unfilled,
    PartiallyFilled,
    FullyFilled,
    Cancelling,
    /// A status code this crate does not know about
    Other(i64),
}

impl From<i64> for OrderStatus {
    fn from(code: i64) -> Self {
        match code {
            -1 => OrderStatus::Cancelled,
            0 => OrderStatus::Unfilled,
            1 => OrderStatus::PartiallyFilled,
            2 => OrderStatus::FullyFilled,
            4 => OrderStatus::Cancelling,
            other => OrderStatus::Other(other),
        }
    }
}

impl OrderStatus {
    /// Whether the order can still trade.
    pub fn is_open(&self) -> bool {
        matches!(self, OrderStatus::Unfilled | OrderStatus::PartiallyFilled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_type_serialization() {
        assert_eq!(serde_json::to_string(&TradeType::Buy).unwrap(), "\"buy\"");
        assert_eq!(
            serde_json::to_string(&TradeType::SellMarket).unwrap(),
            "\"sell_market\""
        );
        assert_eq!(TradeType::BuyMarket.to_string(), "buy_market");
        assert!(TradeType::BuyMarket.is_market());
    }

    #[test]
    fn test_kline_interval_serialization() {
        assert_eq!(serde_json::to_string(&KlineInterval::Min15).unwrap(), "\"15min\"");
        assert_eq!(serde_json::to_string(&KlineInterval::Week1).unwrap(), "\"1week\"");
        assert_eq!(KlineInterval::Hour4.as_secs(), 14400);
    }

    #[test]
    fn test_numeric_filters() {
        assert_eq!(serde_json::to_string(&OrdersInfoType::Filled).unwrap(), "2");
        assert_eq!(serde_json::to_string(&OrderHistoryStatus::Filled).unwrap(), "1");
        assert_eq!(
            serde_json::to_string(&AccountRecordType::CancelledWithdrawal).unwrap(),
            "2"
        );
    }

    #[test]
    fn test_order_status_from_code() {
        assert_eq!(OrderStatus::from(-1), OrderStatus::Cancelled);
        assert!(OrderStatus::from(1).is_open());
        assert_eq!(OrderStatus::from(7), OrderStatus::Other(7));
    }
}
