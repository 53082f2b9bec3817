//! OKEx spot REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::auth::{Credentials, CredentialsProvider, sign_params};
use crate::error::OkexError;
use crate::params::Params;
use crate::spot::rest::endpoints::{API_V1_PREFIX, ENDPOINT_SUFFIX, OKEX_BASE_URL};
use crate::spot::rest::response::{classify, decode};
use crate::transport::{HttpTransport, RequestEnvelope, Transport};

/// Default time allowed for a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Immutable per-client settings, fixed when the client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host the `/api/v1/` paths are appended to.
    pub base_url: String,
    /// Timeout attached to every request envelope.
    pub timeout: Duration,
    /// User agent sent by the default transport.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: OKEX_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("okex-api-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// The OKEx spot REST API client.
///
/// Public endpoints work without credentials. Private endpoints sign every
/// request with the configured secret key and fail with
/// [`OkexError::InvalidInput`] before sending anything if no credentials are
/// set.
///
/// Each call sends exactly one HTTP request; nothing is retried or cached.
///
/// # Example
///
/// ```rust,no_run
/// use okex_api_client::spot::rest::OkexRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = OkexRestClient::new();
///     let ticker = client.get_ticker("btc_usd").await?;
///     println!("Last price: {}", ticker.ticker.last);
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use okex_api_client::spot::rest::OkexRestClient;
/// use okex_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "secret_key"));
///     let client = OkexRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let info = client.get_user_info().await?;
///     println!("Free funds: {:?}", info.info.funds.free);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct OkexRestClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    credentials: Option<Arc<dyn CredentialsProvider>>,
}

impl OkexRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`OkexRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> OkexRestClientBuilder {
        OkexRestClientBuilder::new()
    }

    /// The settings this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send an unauthenticated GET request to `{base_url}/api/v1/{endpoint}.do`.
    ///
    /// `params` must serialize to a map of scalar values (pass
    /// `serde_json::json!({})` for none). They are sent as the query string.
    pub async fn public_request<Q>(&self, endpoint: &str, params: &Q) -> Result<Value, OkexError>
    where
        Q: Serialize + ?Sized,
    {
        let (envelope, request) = self.public_envelope(endpoint, params)?;
        self.dispatch(envelope, &request).await
    }

    /// Send a signed POST request to `{base_url}/api/v1/{endpoint}.do`.
    ///
    /// `api_key` and `sign` are added to a copy of `params`; the caller's value
    /// is left untouched. The form body carries exactly the strings that were
    /// signed.
    pub async fn private_request<P>(&self, endpoint: &str, params: &P) -> Result<Value, OkexError>
    where
        P: Serialize + ?Sized,
    {
        let (envelope, request) = self.private_envelope(endpoint, params)?;
        self.dispatch(envelope, &request).await
    }

    /// Make a public GET request and decode the payload.
    pub(crate) async fn public_get<T, Q>(&self, endpoint: &str, params: &Q) -> Result<T, OkexError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let (envelope, request) = self.public_envelope(endpoint, params)?;
        let payload = self.dispatch(envelope, &request).await?;
        decode(payload, &request)
    }

    /// Make a signed POST request and decode the payload.
    pub(crate) async fn private_post<T, P>(&self, endpoint: &str, params: &P) -> Result<T, OkexError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let (envelope, request) = self.private_envelope(endpoint, params)?;
        let payload = self.dispatch(envelope, &request).await?;
        decode(payload, &request)
    }

    fn public_envelope<Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<(RequestEnvelope, String), OkexError>
    where
        Q: Serialize + ?Sized,
    {
        let context = format!("public request to {endpoint}");
        let params = Params::from_serialize(params, &context)?;

        let mut url = self.endpoint_url(endpoint, &context)?;
        let request = format!("GET request to url {url} with params {}", params.redacted());

        let query = params.to_urlencoded()?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        let envelope = RequestEnvelope::get_json(url, Some(self.config.timeout));
        Ok((envelope, request))
    }

    fn private_envelope<P>(
        &self,
        endpoint: &str,
        params: &P,
    ) -> Result<(RequestEnvelope, String), OkexError>
    where
        P: Serialize + ?Sized,
    {
        let context = format!("private request to {endpoint}");
        let credentials = self.credentials(&context)?;
        let mut params = Params::from_serialize(params, &context)?;

        params.remove("sign");
        params.insert("api_key", credentials.api_key.as_str());
        let signature = sign_params(&params, credentials.expose_secret());
        params.insert("sign", signature);

        let url = self.endpoint_url(endpoint, &context)?;
        let request = format!("POST request to url {url} with params {}", params.redacted());

        let form = params.to_urlencoded()?;
        let envelope = RequestEnvelope::post_form(url, form, Some(self.config.timeout));
        Ok((envelope, request))
    }

    fn credentials(&self, context: &str) -> Result<&Credentials, OkexError> {
        self.credentials
            .as_ref()
            .map(|provider| provider.get_credentials())
            .filter(|credentials| credentials.is_complete())
            .ok_or_else(|| {
                OkexError::invalid_input(
                    context,
                    "must provide api_key and secret_key to make this API request",
                )
            })
    }

    fn endpoint_url(&self, endpoint: &str, context: &str) -> Result<Url, OkexError> {
        let raw = format!(
            "{}{}{}{}",
            self.config.base_url.trim_end_matches('/'),
            API_V1_PREFIX,
            endpoint,
            ENDPOINT_SUFFIX
        );
        Url::parse(&raw)
            .map_err(|e| OkexError::invalid_input(context, format!("invalid url {raw}: {e}")))
    }

    /// Send one envelope and classify whatever comes back.
    async fn dispatch(&self, envelope: RequestEnvelope, request: &str) -> Result<Value, OkexError> {
        tracing::debug!(request, "sending OKEx request");

        let expects_json = envelope.expects_json();
        let outcome = match self.transport.execute(envelope).await {
            Ok(raw) => classify(raw, expects_json, request),
            Err(source) => Err(OkexError::Transport {
                request: request.to_string(),
                source,
            }),
        };

        if let Err(error) = &outcome {
            tracing::warn!(%error, "OKEx request failed");
        }
        outcome
    }
}

impl Default for OkexRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OkexRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OkexRestClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`OkexRestClient`].
pub struct OkexRestClientBuilder {
    config: ClientConfig,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    transport: Option<Arc<dyn Transport>>,
}

impl OkexRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            credentials: None,
            transport: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    ///
    /// Only applies to the default transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Replace the HTTP transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> OkexRestClient {
        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(HttpTransport::new(&self.config.user_agent)));

        OkexRestClient {
            config: Arc::new(self.config),
            transport,
            credentials: self.credentials,
        }
    }
}

impl Default for OkexRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
