//! LearnHub API client
//!
//! [`ApiClient`] attaches the stored bearer token for the request's namespace,
//! renews an expired admin token once through the refresh endpoint, and clears
//! the session (notifying the [`SessionListener`]) when a 401 cannot be
//! recovered. Everything else is passed through to the caller.

pub mod admin;
pub mod auth;
pub mod error;
pub mod events;
pub mod learning;
pub mod request;

mod refresh;

pub use refresh::REFRESH_TOKEN_PATH;

use error::ClientError;
use events::SessionListener;
use learnhub_core::storage::{self, KeyValueStore};
use learnhub_core::{ClientConfig, SessionStore};
use request::{ApiRequest, RequestContext};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use std::sync::Arc;
use std::time::Duration;

/// LearnHub API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: SessionStore,
    listener: Arc<dyn SessionListener>,
    refresh_lock: Arc<tokio::sync::Mutex<()>>,
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a client from environment configuration
    pub fn from_env() -> Result<Self, ClientError> {
        let config = ClientConfig::from_env()?;
        Self::builder().config(config).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Credential store used by this client
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Send a request, recovering from an expired session where possible
    ///
    /// Successful responses are returned untouched. Non-2xx statuses other
    /// than an unrecoverable 401 become the matching [`ClientError`].
    pub async fn send(&self, request: ApiRequest) -> Result<Response, ClientError> {
        let namespace = request.namespace();
        let bearer = if request.is_public() {
            None
        } else {
            self.session.access_token(namespace)?
        };
        let ctx = RequestContext::initial(namespace, bearer);

        let response = self.dispatch(&request, &ctx).await?;

        if response.status() == StatusCode::UNAUTHORIZED && !request.is_public() {
            return self.recover_unauthorized(&request, ctx, response).await;
        }

        Self::check_status(response).await
    }

    /// Send a request and decode the JSON response
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send a request whose response body is not needed
    pub async fn execute_empty(&self, request: ApiRequest) -> Result<(), ClientError> {
        self.send(request).await?;
        Ok(())
    }

    /// Dispatch one attempt with the credential held by `ctx`
    async fn dispatch(
        &self,
        request: &ApiRequest,
        ctx: &RequestContext,
    ) -> Result<Response, ClientError> {
        let url = format!("{}{}", self.base_url, request.path());

        let mut headers = request.headers().clone();
        if let Some(token) = ctx.bearer() {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                ClientError::Configuration("stored token is not a valid header value".into())
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = self
            .client
            .request(request.method().clone(), url)
            .headers(headers);

        if !request.query_pairs().is_empty() {
            builder = builder.query(request.query_pairs());
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        tracing::debug!(
            method = %request.method(),
            path = request.path(),
            namespace = %ctx.namespace(),
            attempt = ?ctx.attempt(),
            authenticated = ctx.bearer().is_some(),
            "dispatching request"
        );

        Ok(builder.send().await?)
    }

    /// Turn a non-2xx response into the matching error
    async fn check_status(response: Response) -> Result<Response, ClientError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn error_from_response(response: Response) -> ClientError {
        let status = response.status();
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        ClientError::from_status(status, message)
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    store: Option<Arc<dyn KeyValueStore>>,
    listener: Option<Arc<dyn SessionListener>>,
}

impl ApiClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Apply a loaded [`ClientConfig`]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.base_url = Some(config.api_base_url);
        self.user_agent = Some(config.user_agent);
        self.timeout = config.timeout_secs.map(Duration::from_secs);
        self
    }

    /// Set the request timeout (ignored on wasm32)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Key-value store holding the credentials
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Subscriber notified when a session is cleared
    pub fn listener(mut self, listener: impl SessionListener + 'static) -> Self {
        self.listener = Some(Arc::new(listener));
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| ClientConfig::default().user_agent);
        client_builder = client_builder.user_agent(user_agent);

        let client = client_builder.build()?;

        let store = self.store.unwrap_or_else(storage::default_store);
        let listener = self.listener.unwrap_or_else(default_listener);

        Ok(ApiClient {
            client,
            base_url,
            session: SessionStore::new(store),
            listener,
            refresh_lock: Arc::new(tokio::sync::Mutex::new(())),
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn default_listener() -> Arc<dyn SessionListener> {
    Arc::new(events::BrowserRedirect)
}

#[cfg(not(target_arch = "wasm32"))]
fn default_listener() -> Arc<dyn SessionListener> {
    Arc::new(events::NoopListener)
}
