//! OKEx v1 REST API endpoint names.
//!
//! Every endpoint lives at `{base_url}/api/v1/{name}.do`.

/// Base URL for the OKEx REST API.
pub const OKEX_BASE_URL: &str = "https://www.okex.com";

/// Path prefix shared by every v1 endpoint.
pub const API_V1_PREFIX: &str = "/api/v1/";

/// Suffix appended to every endpoint name.
pub const ENDPOINT_SUFFIX: &str = ".do";

/// Public endpoints (no authentication required).
pub mod public {
    /// Get ticker.
    pub const TICKER: &str = "ticker";
    /// Get order book.
    pub const DEPTH: &str = "depth";
    /// Get recent trades.
    pub const TRADES: &str = "trades";
    /// Get candlesticks.
    pub const KLINE: &str = "kline";
    /// Get lending order book.
    pub const LEND_DEPTH: &str = "lend_depth";
}

/// Private endpoints (signed requests).
pub mod private {
    // Account endpoints
    /// Get account funds.
    pub const USER_INFO: &str = "userinfo";
    /// Get deposit/withdrawal records.
    pub const ACCOUNT_RECORDS: &str = "account_records";
    /// Get own trade history.
    pub const TRADE_HISTORY: &str = "trade_history";
    /// Get order history.
    pub const ORDER_HISTORY: &str = "order_history";

    // Trading endpoints
    /// Place an order.
    pub const TRADE: &str = "trade";
    /// Place up to five orders at once.
    pub const BATCH_TRADE: &str = "batch_trade";
    /// Cancel one or more orders.
    pub const CANCEL_ORDER: &str = "cancel_order";
    /// Get a single order (or all unfilled ones).
    pub const ORDER_INFO: &str = "order_info";
    /// Get several orders by id.
    pub const ORDERS_INFO: &str = "orders_info";

    // Funding endpoints
    /// Withdraw funds.
    pub const WITHDRAW: &str = "withdraw";
    /// Cancel a withdrawal.
    pub const CANCEL_WITHDRAW: &str = "cancel_withdraw";
}
