//! Trait definition for the OKEx REST API client.
//!
//! [`OkexClient`] abstracts every endpoint method so strategies can be written
//! against a trait and tested with a mock implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use okex_api_client::spot::rest::{OkexClient, OkexRestClient};
//!
//! async fn spread<C: OkexClient>(client: &C) -> Result<(), okex_api_client::OkexError> {
//!     let ticker = client.get_ticker("btc_usd").await?;
//!     println!("Spread: {}", ticker.ticker.sell - ticker.ticker.buy);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use crate::error::OkexError;
use crate::spot::rest::OkexRestClient;
use crate::spot::rest::private::{
    AccountRecords, AccountRecordsRequest, BatchOrderRequest, BatchOrderResponse,
    CancelOrderResponse, OrderHistory, OrderHistoryRequest, OrdersInfoRequest, OrdersResponse,
    PlaceOrderRequest, PlaceOrderResponse, UserInfo, WithdrawRequest, WithdrawResponse,
};
use crate::spot::rest::public::{
    Candle, DepthRequest, KlineRequest, LendDepth, OrderBook, TickerResponse, Trade,
};

/// Trait defining all OKEx REST API operations.
///
/// All methods are async and return `Result<T, OkexError>`.
pub trait OkexClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get the ticker for a trading pair.
    fn get_ticker(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<TickerResponse, OkexError>> + Send;

    /// Get the order book for a trading pair.
    fn get_depth(
        &self,
        request: &DepthRequest,
    ) -> impl Future<Output = Result<OrderBook, OkexError>> + Send;

    /// Get recent trades.
    fn get_trades(
        &self,
        symbol: &str,
        since: Option<i64>,
    ) -> impl Future<Output = Result<Vec<Trade>, OkexError>> + Send;

    /// Get candlestick data.
    fn get_kline(
        &self,
        request: &KlineRequest,
    ) -> impl Future<Output = Result<Vec<Candle>, OkexError>> + Send;

    /// Get the lending order book.
    fn get_lend_depth(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<LendDepth, OkexError>> + Send;

    // ========== Private Endpoints - Account ==========

    /// Get account balances.
    fn get_user_info(&self) -> impl Future<Output = Result<UserInfo, OkexError>> + Send;

    /// Get deposit or withdrawal records.
    fn get_account_records(
        &self,
        request: &AccountRecordsRequest,
    ) -> impl Future<Output = Result<AccountRecords, OkexError>> + Send;

    /// Get the account's own trades.
    fn get_trade_history(
        &self,
        symbol: &str,
        since: i64,
    ) -> impl Future<Output = Result<Vec<Trade>, OkexError>> + Send;

    /// Get historical orders.
    fn get_order_history(
        &self,
        request: &OrderHistoryRequest,
    ) -> impl Future<Output = Result<OrderHistory, OkexError>> + Send;

    // ========== Private Endpoints - Trading ==========

    /// Place a single order.
    fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> impl Future<Output = Result<PlaceOrderResponse, OkexError>> + Send;

    /// Place several orders at once.
    fn place_batch_orders(
        &self,
        request: &BatchOrderRequest,
    ) -> impl Future<Output = Result<BatchOrderResponse, OkexError>> + Send;

    /// Cancel one or more orders.
    fn cancel_order(
        &self,
        symbol: &str,
        order_id: &str,
    ) -> impl Future<Output = Result<CancelOrderResponse, OkexError>> + Send;

    /// Get a single order.
    fn get_order_info(
        &self,
        symbol: &str,
        order_id: i64,
    ) -> impl Future<Output = Result<OrdersResponse, OkexError>> + Send;

    /// Get several orders by id.
    fn get_orders_info(
        &self,
        request: &OrdersInfoRequest,
    ) -> impl Future<Output = Result<OrdersResponse, OkexError>> + Send;

    // ========== Private Endpoints - Funding ==========

    /// Withdraw funds.
    fn withdraw(
        &self,
        request: &WithdrawRequest,
    ) -> impl Future<Output = Result<WithdrawResponse, OkexError>> + Send;

    /// Cancel a pending withdrawal.
    fn cancel_withdraw(
        &self,
        symbol: &str,
        withdraw_id: &str,
    ) -> impl Future<Output = Result<WithdrawResponse, OkexError>> + Send;
}

impl OkexClient for OkexRestClient {
    async fn get_ticker(&self, symbol: &str) -> Result<TickerResponse, OkexError> {
        OkexRestClient::get_ticker(self, symbol).await
    }

    async fn get_depth(&self, request: &DepthRequest) -> Result<OrderBook, OkexError> {
        OkexRestClient::get_depth(self, request).await
    }

    async fn get_trades(&self, symbol: &str, since: Option<i64>) -> Result<Vec<Trade>, OkexError> {
        OkexRestClient::get_trades(self, symbol, since).await
    }

    async fn get_kline(&self, request: &KlineRequest) -> Result<Vec<Candle>, OkexError> {
        OkexRestClient::get_kline(self, request).await
    }

    async fn get_lend_depth(&self, symbol: &str) -> Result<LendDepth, OkexError> {
        OkexRestClient::get_lend_depth(self, symbol).await
    }

    async fn get_user_info(&self) -> Result<UserInfo, OkexError> {
        OkexRestClient::get_user_info(self).await
    }

    async fn get_account_records(
        &self,
        request: &AccountRecordsRequest,
    ) -> Result<AccountRecords, OkexError> {
        OkexRestClient::get_account_records(self, request).await
    }

    async fn get_trade_history(&self, symbol: &str, since: i64) -> Result<Vec<Trade>, OkexError> {
        OkexRestClient::get_trade_history(self, symbol, since).await
    }

    async fn get_order_history(
        &self,
        request: &OrderHistoryRequest,
    ) -> Result<OrderHistory, OkexError> {
        OkexRestClient::get_order_history(self, request).await
    }

    async fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> Result<PlaceOrderResponse, OkexError> {
        OkexRestClient::place_order(self, request).await
    }

    async fn place_batch_orders(
        &self,
        request: &BatchOrderRequest,
    ) -> Result<BatchOrderResponse, OkexError> {
        OkexRestClient::place_batch_orders(self, request).await
    }

    async fn cancel_order(
        &self,
        symbol: &str,
        order_id: &str,
    ) -> Result<CancelOrderResponse, OkexError> {
        OkexRestClient::cancel_order(self, symbol, order_id).await
    }

    async fn get_order_info(&self, symbol: &str, order_id: i64) -> Result<OrdersResponse, OkexError> {
        OkexRestClient::get_order_info(self, symbol, order_id).await
    }

    async fn get_orders_info(
        &self,
        request: &OrdersInfoRequest,
    ) -> Result<OrdersResponse, OkexError> {
        OkexRestClient::get_orders_info(self, request).await
    }

    async fn withdraw(&self, request: &WithdrawRequest) -> Result<WithdrawResponse, OkexError> {
        OkexRestClient::withdraw(self, request).await
    }

    async fn cancel_withdraw(
        &self,
        symbol: &str,
        withdraw_id: &str,
    ) -> Result<WithdrawResponse, OkexError> {
        OkexRestClient::cancel_withdraw(self, symbol, withdraw_id).await
    }
}
