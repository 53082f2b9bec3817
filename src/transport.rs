//! The HTTP boundary of the client.
//!
//! The dispatcher never talks to `reqwest` directly. It builds a
//! [`RequestEnvelope`] and hands it to a [`Transport`], which sends exactly one
//! HTTP request and reports either the raw status and body or the error that
//! prevented a response.

use std::time::Duration;

use futures_util::future::BoxFuture;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, Request};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use url::Url;

use crate::error::TransportError;

/// Content type of private request bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Body of an outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// No body; parameters travel in the URL query string.
    Empty,
    /// A `application/x-www-form-urlencoded` body.
    Form(String),
}

/// A fully resolved request, ready for the transport.
#[derive(Debug, Clone)]
pub struct RequestEnvelope {
    /// HTTP method (GET for public endpoints, POST for private ones).
    pub method: Method,
    /// Full URL including any query string.
    pub url: Url,
    /// Per-request headers, on top of the transport defaults.
    pub headers: HeaderMap,
    /// Request body.
    pub body: RequestBody,
    /// Time allowed for the whole request.
    pub timeout: Option<Duration>,
}

impl RequestEnvelope {
    /// A GET request that expects a JSON response.
    pub fn get_json(url: Url, timeout: Option<Duration>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Self {
            method: Method::GET,
            url,
            headers,
            body: RequestBody::Empty,
            timeout,
        }
    }

    /// A POST request carrying a urlencoded form body.
    pub fn post_form(url: Url, form: String, timeout: Option<Duration>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        Self {
            method: Method::POST,
            url,
            headers,
            body: RequestBody::Form(form),
            timeout,
        }
    }

    /// Whether the response body is declared to be JSON.
    pub fn expects_json(&self) -> bool {
        self.headers
            .get(ACCEPT)
            .is_some_and(|v| v.as_bytes().starts_with(b"application/json"))
    }
}

/// Status and body of an HTTP response, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    /// Build a response from a status code and body text.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends a single HTTP request.
///
/// Implementations must not retry; a failed attempt is reported as-is.
pub trait Transport: Send + Sync {
    /// Execute the request and return the raw response.
    fn execute(&self, envelope: RequestEnvelope)
    -> BoxFuture<'_, Result<RawResponse, TransportError>>;
}

/// The default transport: `reqwest` with tracing middleware.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: ClientWithMiddleware,
}

impl HttpTransport {
    /// Create a transport that sends the given user agent.
    pub fn new(user_agent: &str) -> Self {
        let mut headers = HeaderMap::new();
        let header_value = HeaderValue::from_str(user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("okex-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self::from_client(reqwest_client)
    }

    /// Wrap an existing `reqwest` client.
    pub fn from_client(client: reqwest::Client) -> Self {
        let client = ClientBuilder::new(client)
            .with(TracingMiddleware::default())
            .build();
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(&format!("okex-api-client/{}", env!("CARGO_PKG_VERSION")))
    }
}

impl Transport for HttpTransport {
    fn execute(
        &self,
        envelope: RequestEnvelope,
    ) -> BoxFuture<'_, Result<RawResponse, TransportError>> {
        Box::pin(async move {
            let mut request = Request::new(envelope.method, envelope.url);
            *request.headers_mut() = envelope.headers;
            *request.timeout_mut() = envelope.timeout;
            if let RequestBody::Form(form) = envelope.body {
                *request.body_mut() = Some(form.into());
            }

            let response = self.client.execute(request).await?;
            let status = response.status().as_u16();
            // A failed status outranks a body that could not be read.
            let body = match response.text().await {
                Ok(body) => body,
                Err(_) if !(200..300).contains(&status) => String::new(),
                Err(e) => return Err(e.into()),
            };
            Ok(RawResponse { status, body })
        })
    }
}
