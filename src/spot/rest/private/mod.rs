//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.
//! Every request is signed; see [`crate::auth::sign_params`].

mod types;

pub use types::*;

use crate::error::OkexError;
use crate::spot::rest::OkexRestClient;
use crate::spot::rest::endpoints::private;

impl OkexRestClient {
    /// Get account balances.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use okex_api_client::spot::rest::OkexRestClient;
    /// use okex_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = OkexRestClient::builder().credentials(credentials).build();
    ///
    ///     let info = client.get_user_info().await?;
    ///     for (currency, amount) in &info.info.funds.free {
    ///         println!("{}: {}", currency, amount);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_user_info(&self) -> Result<UserInfo, OkexError> {
        #[derive(serde::Serialize)]
        struct Empty {}
        self.private_post(private::USER_INFO, &Empty {}).await
    }

    // ========== Trading Endpoints ==========

    /// Place a single order.
    pub async fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> Result<PlaceOrderResponse, OkexError> {
        self.private_post(private::TRADE, request).await
    }

    /// Place up to five limit orders in one request.
    pub async fn place_batch_orders(
        &self,
        request: &BatchOrderRequest,
    ) -> Result<BatchOrderResponse, OkexError> {
        let context = "private request to batch_trade";
        if request.orders.is_empty() || request.orders.len() > MAX_BATCH_ORDERS {
            return Err(OkexError::invalid_input(
                context,
                format!(
                    "batch must contain between 1 and {MAX_BATCH_ORDERS} orders, got {}",
                    request.orders.len()
                ),
            ));
        }

        let orders_data = serde_json::to_string(&request.orders)
            .map_err(|e| OkexError::invalid_input(context, e.to_string()))?;
        let params = BatchTradeParams {
            symbol: &request.symbol,
            trade_type: request.trade_type,
            orders_data,
        };
        self.private_post(private::BATCH_TRADE, &params).await
    }

    /// Cancel an order.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Trading pair.
    /// * `order_id` - Order id, or up to three comma-separated ids.
    pub async fn cancel_order(
        &self,
        symbol: &str,
        order_id: &str,
    ) -> Result<CancelOrderResponse, OkexError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            symbol: &'a str,
            order_id: &'a str,
        }
        self.private_post(private::CANCEL_ORDER, &Params { symbol, order_id })
            .await
    }

    /// Get a single order.
    ///
    /// An `order_id` of `-1` returns all unfilled orders for the pair.
    pub async fn get_order_info(
        &self,
        symbol: &str,
        order_id: i64,
    ) -> Result<OrdersResponse, OkexError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            symbol: &'a str,
            order_id: i64,
        }
        self.private_post(private::ORDER_INFO, &Params { symbol, order_id })
            .await
    }

    /// Get several orders by id.
    pub async fn get_orders_info(
        &self,
        request: &OrdersInfoRequest,
    ) -> Result<OrdersResponse, OkexError> {
        self.private_post(private::ORDERS_INFO, request).await
    }

    // ========== Account History Endpoints ==========

    /// Get deposit or withdrawal records.
    pub async fn get_account_records(
        &self,
        request: &AccountRecordsRequest,
    ) -> Result<AccountRecords, OkexError> {
        self.private_post(private::ACCOUNT_RECORDS, request).await
    }

    /// Get the account's own trades, starting after trade id `since`.
    pub async fn get_trade_history(
        &self,
        symbol: &str,
        since: i64,
    ) -> Result<Vec<crate::spot::rest::public::Trade>, OkexError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            symbol: &'a str,
            since: i64,
        }
        self.private_post(private::TRADE_HISTORY, &Params { symbol, since })
            .await
    }

    /// Get historical orders.
    pub async fn get_order_history(
        &self,
        request: &OrderHistoryRequest,
    ) -> Result<OrderHistory, OkexError> {
        self.private_post(private::ORDER_HISTORY, request).await
    }

    // ========== Funding Endpoints ==========

    /// Withdraw funds.
    pub async fn withdraw(&self, request: &WithdrawRequest) -> Result<WithdrawResponse, OkexError> {
        self.private_post(private::WITHDRAW, request).await
    }

    /// Cancel a pending withdrawal.
    pub async fn cancel_withdraw(
        &self,
        symbol: &str,
        withdraw_id: &str,
    ) -> Result<WithdrawResponse, OkexError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            symbol: &'a str,
            withdraw_id: &'a str,
        }
        self.private_post(private::CANCEL_WITHDRAW, &Params { symbol, withdraw_id })
            .await
    }
}
