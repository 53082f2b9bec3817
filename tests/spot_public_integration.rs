use std::time::Duration;

use rust_decimal::Decimal;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use okex_api_client::error::OkexError;
use okex_api_client::spot::rest::{OkexClient, OkexRestClient};
use okex_api_client::spot::rest::public::{DepthRequest, KlineRequest};
use okex_api_client::types::KlineInterval;

fn build_public_client(server: &MockServer) -> OkexRestClient {
    OkexRestClient::builder().base_url(server.uri()).build()
}

#[tokio::test]
async fn test_get_ticker() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "date": "1410431279",
        "ticker": {
            "buy": "33.15",
            "high": "34.15",
            "last": "4000.0",
            "low": "32.05",
            "sell": "33.16",
            "vol": "10532696.39199642"
        }
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/ticker.do"))
        .and(query_param("symbol", "btc_usd"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let ticker = client.get_ticker("btc_usd").await.unwrap();
    assert_eq!(ticker.date, 1410431279);
    assert_eq!(ticker.ticker.last.to_string(), "4000.0");
    assert_eq!(ticker.ticker.sell.to_string(), "33.16");
}

#[tokio::test]
async fn test_raw_public_request_returns_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/ticker.do"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "last": "4000.0" })),
        )
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let payload = client
        .public_request("ticker", &serde_json::json!({ "symbol": "btc_usd" }))
        .await
        .unwrap();
    assert_eq!(payload, serde_json::json!({ "last": "4000.0" }));
}

#[tokio::test]
async fn test_get_depth_sends_defaults() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "asks": [[792, 5], [789.68, 0.018], [788.99, 0.042]],
        "bids": [[787.1, 0.035], [787, 12.071], [786.5, 0.014]]
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/depth.do"))
        .and(query_param("symbol", "btc_usd"))
        .and(query_param("size", "200"))
        .and(query_param("merge", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let book = client.get_depth(&DepthRequest::new("btc_usd")).await.unwrap();
    assert_eq!(book.asks.len(), 3);
    assert_eq!(book.best_ask().unwrap().0.to_string(), "788.99");
    assert_eq!(book.best_bid().unwrap().0.to_string(), "787.1");
}

#[tokio::test]
async fn test_get_trades_with_since() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {
            "date": "1367130137",
            "date_ms": 1367130137000_i64,
            "price": 787.71,
            "amount": 0.003,
            "tid": "230433",
            "type": "sell"
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/v1/trades.do"))
        .and(query_param("symbol", "btc_usd"))
        .and(query_param("since", "230400"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let trades = client.get_trades("btc_usd", Some(230400)).await.unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].tid, 230433);
    assert_eq!(trades[0].side, "sell");
    assert_eq!(trades[0].date_ms, Some(1367130137000));
}

#[tokio::test]
async fn test_get_kline_with_interval_and_since() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        [1417478400000_i64, 2339.11, 2383.15, 2322, 2369.85, 83850.06],
        [1417564800000_i64, 2370.16, 2380, 2352.99, 2367.37, 17259.83]
    ]);

    Mock::given(method("GET"))
        .and(path("/api/v1/kline.do"))
        .and(query_param("symbol", "ltc_usd"))
        .and(query_param("type", "1day"))
        .and(query_param("size", "2"))
        .and(query_param("since", "1417449600000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let request = KlineRequest::new("ltc_usd")
        .interval(KlineInterval::Day1)
        .size(2)
        .since(1417449600000);
    let candles = client.get_kline(&request).await.unwrap();
    assert_eq!(candles.len(), 2);
    assert_eq!(candles[0].timestamp, 1417478400000);
    assert_eq!(candles[1].close.to_string(), "2367.37");
}

#[tokio::test]
async fn test_get_lend_depth_uses_its_own_endpoint() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "lend_depth": [
            { "amount": "78", "days": "10 days", "num": 2, "rate": "0.2" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/lend_depth.do"))
        .and(query_param("symbol", "btc_usd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let depth = client.get_lend_depth("btc_usd").await.unwrap();
    assert_eq!(depth.lend_depth.len(), 1);
    assert_eq!(depth.lend_depth[0].num, 2);
}

#[tokio::test]
async fn test_http_status_checked_before_error_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/ticker.do"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({ "error_code": 10002 })),
        )
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let err = client.get_ticker("btc_usd").await.unwrap_err();
    match err {
        OkexError::HttpStatus { status, request } => {
            assert_eq!(status, 500);
            assert!(request.contains("ticker.do"));
            assert!(request.contains("btc_usd"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_error_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/ticker.do"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "error_code": 99999 })),
        )
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let err = client.get_ticker("btc_usd").await.unwrap_err();
    let api = err.api_error().expect("expected an API error");
    assert_eq!(api.code, "99999");
    assert_eq!(api.message, "Unknown error code: 99999");
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/depth.do"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let err = client.get_depth(&DepthRequest::new("btc_usd")).await.unwrap_err();
    match err {
        OkexError::Parse { body, .. } => assert_eq!(body, "<html>maintenance</html>"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/ticker.do"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "last": "1" }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = OkexRestClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(100))
        .build();
    let err = client
        .public_request("ticker", &serde_json::json!({}))
        .await
        .unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = OkexRestClient::builder()
        .base_url("http://127.0.0.1:1")
        .build();
    let err = client.get_ticker("btc_usd").await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_non_object_params_rejected_before_dispatch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let err = client
        .public_request("ticker", &["btc_usd"])
        .await
        .unwrap_err();
    assert!(err.is_invalid_input());
}

async fn spread<C: OkexClient>(client: &C, symbol: &str) -> Result<Decimal, OkexError> {
    let ticker = client.get_ticker(symbol).await?;
    Ok(ticker.ticker.sell - ticker.ticker.buy)
}

#[tokio::test]
async fn test_client_trait_dispatches_to_rest_client() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "date": 1410431279,
        "ticker": {
            "buy": "33.15", "high": "34.15", "last": "33.15",
            "low": "32.05", "sell": "33.16", "vol": "10532696.39"
        }
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/ticker.do"))
        .and(query_param("symbol", "ltc_usd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let value = spread(&client, "ltc_usd").await.unwrap();
    assert_eq!(value.to_string(), "0.01");
}

/// Serve one response whose body is cut short of its Content-Length.
async fn truncated_body_server(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let head = format!("HTTP/1.1 {status_line}\r\nContent-Length: 100\r\n\r\n{{\"error");
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.shutdown().await;
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_unreadable_body_on_failed_status_is_http_status() {
    let base_url = truncated_body_server("503 Service Unavailable").await;
    let client = OkexRestClient::builder().base_url(base_url).build();

    let err = client.get_ticker("btc_usd").await.unwrap_err();
    assert_eq!(err.status(), Some(503), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_unreadable_body_on_success_is_transport_error() {
    let base_url = truncated_body_server("200 OK").await;
    let client = OkexRestClient::builder().base_url(base_url).build();

    let err = client.get_ticker("btc_usd").await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err:?}");
}
