//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::serde_helpers::{lenient_i64, lenient_string};
use crate::types::{AccountRecordType, OrderHistoryStatus, OrderStatus, OrdersInfoType, TradeType};

/// Maximum number of orders accepted by `batch_trade.do`.
pub const MAX_BATCH_ORDERS: usize = 5;

/// Response of `userinfo.do`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    /// Whether the call succeeded.
    pub result: bool,
    /// Account information.
    pub info: AccountInfo,
}

/// Account information.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfo {
    /// Balances.
    pub funds: Funds,
}

/// Balances keyed by currency (e.g. "btc", "usd").
#[derive(Debug, Clone, Deserialize)]
pub struct Funds {
    /// Available balances.
    #[serde(default)]
    pub free: HashMap<String, Decimal>,
    /// Balances locked in open orders.
    #[serde(default)]
    pub freezed: HashMap<String, Decimal>,
    /// Account totals, when provided.
    #[serde(default)]
    pub asset: Option<AssetSummary>,
}

impl Funds {
    /// Available plus frozen balance for a currency.
    pub fn total(&self, currency: &str) -> Decimal {
        let free = self.free.get(currency).copied().unwrap_or_default();
        let frozen = self.freezed.get(currency).copied().unwrap_or_default();
        free + frozen
    }
}

/// Account totals.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetSummary {
    /// Net asset value.
    pub net: Decimal,
    /// Total asset value.
    pub total: Decimal,
}

/// Request for placing a single order.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceOrderRequest {
    /// Trading pair.
    pub symbol: String,
    /// Order type.
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    /// Amount of base currency (limit orders and market sells).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// Limit price, or the total to spend for market buys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

impl PlaceOrderRequest {
    /// Limit order.
    pub fn limit(
        symbol: impl Into<String>,
        side: TradeType,
        price: Decimal,
        amount: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            trade_type: side,
            amount: Some(amount),
            price: Some(price),
        }
    }

    /// Market buy spending `cost` of the quote currency.
    pub fn market_buy(symbol: impl Into<String>, cost: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            trade_type: TradeType::BuyMarket,
            amount: None,
            price: Some(cost),
        }
    }

    /// Market sell of `amount` base currency.
    pub fn market_sell(symbol: impl Into<String>, amount: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            trade_type: TradeType::SellMarket,
            amount: Some(amount),
            price: None,
        }
    }
}

/// Response of `trade.do`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceOrderResponse {
    /// Whether the order was accepted.
    pub result: bool,
    /// New order id.
    #[serde(deserialize_with = "lenient_i64::deserialize")]
    pub order_id: i64,
}

/// One order inside a batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOrder {
    /// Limit price.
    pub price: Decimal,
    /// Amount.
    pub amount: Decimal,
    /// Per-order side, overriding the batch side.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub trade_type: Option<TradeType>,
}

impl BatchOrder {
    /// Order using the batch's side.
    pub fn new(price: Decimal, amount: Decimal) -> Self {
        Self {
            price,
            amount,
            trade_type: None,
        }
    }

    /// Order with its own side.
    pub fn with_side(price: Decimal, amount: Decimal, side: TradeType) -> Self {
        Self {
            price,
            amount,
            trade_type: Some(side),
        }
    }
}

/// Request for placing several limit orders at once.
///
/// The orders are sent as the JSON-encoded `orders_data` field.
#[derive(Debug, Clone)]
pub struct BatchOrderRequest {
    /// Trading pair.
    pub symbol: String,
    /// Side for orders that don't set their own.
    pub trade_type: TradeType,
    /// Orders to place (at most [`MAX_BATCH_ORDERS`]).
    pub orders: Vec<BatchOrder>,
}

impl BatchOrderRequest {
    /// Create a batch where every order has the given side.
    pub fn new(symbol: impl Into<String>, side: TradeType, orders: Vec<BatchOrder>) -> Self {
        Self {
            symbol: symbol.into(),
            trade_type: side,
            orders,
        }
    }
}

/// Wire form of [`BatchOrderRequest`].
#[derive(Debug, Serialize)]
pub(crate) struct BatchTradeParams<'a> {
    pub symbol: &'a str,
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    pub orders_data: String,
}

/// Response of `batch_trade.do`.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchOrderResponse {
    /// Whether the batch was processed.
    pub result: bool,
    /// Outcome per order, in request order.
    #[serde(default)]
    pub order_info: Vec<BatchOrderResult>,
}

/// Outcome of one order in a batch.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchOrderResult {
    /// Order id, `-1` when the order was rejected.
    #[serde(deserialize_with = "lenient_i64::deserialize")]
    pub order_id: i64,
    /// Rejection code, when the order was rejected.
    #[serde(default, deserialize_with = "lenient_string::option")]
    pub error_code: Option<String>,
}

impl BatchOrderResult {
    /// Whether this order was accepted.
    pub fn is_accepted(&self) -> bool {
        self.error_code.is_none() && self.order_id >= 0
    }
}

/// Response of `cancel_order.do`.
///
/// Cancelling one id returns `result` and `order_id`; cancelling a
/// comma-separated list returns the `success` and `error` id lists.
#[derive(Debug, Clone, Deserialize)]
pub struct CancelOrderResponse {
    #[serde(default)]
    pub result: Option<bool>,
    #[serde(default, deserialize_with = "lenient_string::option")]
    pub order_id: Option<String>,
    /// Comma-separated ids that were cancelled.
    #[serde(default, deserialize_with = "lenient_string::option")]
    pub success: Option<String>,
    /// Comma-separated ids that could not be cancelled.
    #[serde(default, deserialize_with = "lenient_string::option")]
    pub error: Option<String>,
}

/// Response of `order_info.do` and `orders_info.do`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersResponse {
    /// Whether the call succeeded.
    pub result: bool,
    /// Matching orders.
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// An order.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Order id.
    #[serde(deserialize_with = "lenient_i64::deserialize")]
    pub order_id: i64,
    /// Trading pair.
    pub symbol: String,
    /// Order type ("buy", "sell", "buy_market", "sell_market").
    #[serde(rename = "type")]
    pub trade_type: String,
    /// Limit price.
    pub price: Decimal,
    /// Ordered amount.
    pub amount: Decimal,
    /// Filled amount.
    #[serde(default)]
    pub deal_amount: Decimal,
    /// Average fill price.
    #[serde(default)]
    pub avg_price: Decimal,
    /// Creation time (unix milliseconds).
    #[serde(deserialize_with = "lenient_i64::deserialize")]
    pub create_date: i64,
    /// Raw status code, see [`Order::status`].
    #[serde(rename = "status", deserialize_with = "lenient_i64::deserialize")]
    pub status_code: i64,
}

impl Order {
    /// Decoded order status.
    pub fn status(&self) -> OrderStatus {
        OrderStatus::from(self.status_code)
    }
}

/// Request for `orders_info.do`.
#[derive(Debug, Clone, Serialize)]
pub struct OrdersInfoRequest {
    /// Trading pair.
    pub symbol: String,
    /// Filled or unfilled orders.
    #[serde(rename = "type")]
    pub query_type: OrdersInfoType,
    /// Comma-separated order ids.
    pub order_id: String,
}

impl OrdersInfoRequest {
    /// Query the given order ids.
    pub fn new(symbol: impl Into<String>, query_type: OrdersInfoType, order_ids: &[i64]) -> Self {
        Self {
            symbol: symbol.into(),
            query_type,
            order_id: order_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// Request for `account_records.do`.
#[derive(Debug, Clone, Serialize)]
pub struct AccountRecordsRequest {
    /// Currency (e.g. "btc", "usd").
    pub symbol: String,
    /// Deposits, withdrawals or cancelled withdrawals.
    #[serde(rename = "type")]
    pub record_type: AccountRecordType,
    /// Page number, starting at 1.
    pub current_page: u32,
    /// Records per page (at most 50).
    pub page_length: u32,
}

impl AccountRecordsRequest {
    /// First page of 50 records.
    pub fn new(symbol: impl Into<String>, record_type: AccountRecordType) -> Self {
        Self {
            symbol: symbol.into(),
            record_type,
            current_page: 1,
            page_length: 50,
        }
    }

    /// Select a page.
    pub fn page(mut self, current_page: u32, page_length: u32) -> Self {
        self.current_page = current_page;
        self.page_length = page_length;
        self
    }
}

/// Response of `account_records.do`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountRecords {
    /// Currency the records are for.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Records on this page.
    #[serde(default)]
    pub records: Vec<AccountRecord>,
}

/// A deposit or withdrawal record.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountRecord {
    /// Address involved.
    #[serde(default)]
    pub addr: Option<String>,
    /// Amount.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Fee charged.
    #[serde(default)]
    pub fee: Option<Decimal>,
    /// Time (unix milliseconds).
    #[serde(default)]
    pub date: Option<i64>,
    /// Status code.
    #[serde(default)]
    pub status: Option<i64>,
}

/// Request for `order_history.do`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderHistoryRequest {
    /// Trading pair.
    pub symbol: String,
    /// Filled or unfilled orders.
    pub status: OrderHistoryStatus,
    /// Page number, starting at 1.
    pub current_page: u32,
    /// Orders per page (at most 200).
    pub page_length: u32,
}

impl OrderHistoryRequest {
    /// First page of 200 orders.
    pub fn new(symbol: impl Into<String>, status: OrderHistoryStatus) -> Self {
        Self {
            symbol: symbol.into(),
            status,
            current_page: 1,
            page_length: 200,
        }
    }

    /// Select a page.
    pub fn page(mut self, current_page: u32, page_length: u32) -> Self {
        self.current_page = current_page;
        self.page_length = page_length;
        self
    }
}

/// Response of `order_history.do`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderHistory {
    /// Whether the call succeeded.
    pub result: bool,
    /// Total number of matching orders.
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub current_page: i64,
    #[serde(default)]
    pub page_length: i64,
    /// Orders on this page.
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Request for `withdraw.do`.
#[derive(Clone, Serialize)]
pub struct WithdrawRequest {
    /// Currency (e.g. "btc_usd").
    pub symbol: String,
    /// Network fee to pay.
    pub chargefee: Decimal,
    /// Trade password.
    pub trade_pwd: String,
    /// Destination address.
    pub withdraw_address: String,
    /// Amount to withdraw.
    pub withdraw_amount: Decimal,
}

impl WithdrawRequest {
    /// Create a withdrawal request.
    pub fn new(
        symbol: impl Into<String>,
        chargefee: Decimal,
        trade_pwd: impl Into<String>,
        withdraw_address: impl Into<String>,
        withdraw_amount: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            chargefee,
            trade_pwd: trade_pwd.into(),
            withdraw_address: withdraw_address.into(),
            withdraw_amount,
        }
    }
}

impl std::fmt::Debug for WithdrawRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WithdrawRequest")
            .field("symbol", &self.symbol)
            .field("chargefee", &self.chargefee)
            .field("trade_pwd", &"[REDACTED]")
            .field("withdraw_address", &self.withdraw_address)
            .field("withdraw_amount", &self.withdraw_amount)
            .finish()
    }
}

/// Response of `withdraw.do` and `cancel_withdraw.do`.
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawResponse {
    /// Whether the call succeeded.
    pub result: bool,
    /// Withdrawal id.
    #[serde(deserialize_with = "lenient_string::deserialize")]
    pub withdraw_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_market_buy_sends_price_only() {
        let request = PlaceOrderRequest::market_buy("btc_usd", dec("100"));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "buy_market");
        assert_eq!(json["price"], "100");
        assert!(json.get("amount").is_none());
    }

    #[test]
    fn test_orders_info_joins_ids() {
        let request = OrdersInfoRequest::new("ltc_usd", OrdersInfoType::Unfilled, &[10, 11, 12]);
        assert_eq!(request.order_id, "10,11,12");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], 1);
    }

    #[test]
    fn test_user_info_deserialization() {
        let json = r#"{
            "info": {"funds": {
                "free": {"btc": "0.5", "usd": "100.25"},
                "freezed": {"btc": "0.1", "usd": 0}
            }},
            "result": true
        }"#;
        let info: UserInfo = serde_json::from_str(json).unwrap();
        assert!(info.result);
        assert_eq!(info.info.funds.total("btc"), dec("0.6"));
        assert_eq!(info.info.funds.total("eth"), Decimal::ZERO);
    }

    #[test]
    fn test_order_deserialization() {
        let json = r#"{
            "amount": 0.1, "avg_price": 0, "create_date": 1418008467000,
            "deal_amount": 0, "order_id": 10000591, "orders_id": 10000591,
            "price": 500, "status": 0, "symbol": "btc_usd", "type": "sell"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id, 10000591);
        assert_eq!(order.status(), OrderStatus::Unfilled);
        assert!(order.status().is_open());
    }

    #[test]
    fn test_batch_result_rejected_order() {
        let json = r#"{"order_info":[{"order_id":41724206},{"error_code":10011,"order_id":-1}],"result":true}"#;
        let response: BatchOrderResponse = serde_json::from_str(json).unwrap();
        assert!(response.order_info[0].is_accepted());
        assert!(!response.order_info[1].is_accepted());
        assert_eq!(response.order_info[1].error_code.as_deref(), Some("10011"));
    }

    #[test]
    fn test_batch_trade_params_always_send_type() {
        let params = BatchTradeParams {
            symbol: "btc_usd",
            trade_type: TradeType::Sell,
            orders_data: r#"[{"price":"1","amount":"2"}]"#.to_string(),
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["type"], "sell");
        assert_eq!(json["symbol"], "btc_usd");
    }

    #[test]
    fn test_withdraw_request_debug_hides_password() {
        let request = WithdrawRequest::new("btc_usd", dec("0.0001"), "hunter2", "1Addr", dec("1"));
        assert!(!format!("{request:?}").contains("hunter2"));
    }
}
