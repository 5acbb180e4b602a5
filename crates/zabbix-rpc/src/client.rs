//! HTTP transport for the Zabbix frontend.
//!
//! Each call is one POST of a JSON-RPC envelope to `api_jsonrpc.php`. The
//! session token from `user.login` (or a configured API token) is attached to
//! every request except the anonymous methods.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{Value, json};
use tokio::sync::RwLock;
use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::protocol::{Request, RequestId, Response, is_anonymous_method};
use crate::transport::Transport;

const CONTENT_TYPE: &str = "application/json-rpc";

/// `Transport` over HTTP(S) using `reqwest`.
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
    auth: RwLock<Option<String>>,
    next_id: AtomicU64,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Build a transport from validated config.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the config fails validation, or
    /// `Error::Http` if the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            url: config.url.trim().to_string(),
            auth: RwLock::new(config.api_token.clone()),
            next_id: AtomicU64::new(1),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn is_authenticated(&self) -> bool {
        self.auth.read().await.is_some()
    }

    /// Open a session with `user.login` and keep its token.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or `Error::UnexpectedResponse` if the
    /// server answers with something other than a token string.
    pub async fn login(&self, user: &str, password: &str) -> Result<()> {
        let result = self
            .send(
                "user.login",
                json!({"user": user, "password": password}),
                None,
            )
            .await?;

        let Value::String(token) = result else {
            return Err(Error::UnexpectedResponse);
        };

        *self.auth.write().await = Some(token);
        debug!("Session opened");
        Ok(())
    }

    /// Close the session with `user.logout` and drop the token.
    ///
    /// Does nothing when no token is held.
    ///
    /// # Errors
    ///
    /// Returns the transport error; the token is dropped regardless.
    pub async fn logout(&self) -> Result<()> {
        let Some(token) = self.auth.write().await.take() else {
            return Ok(());
        };

        self.send("user.logout", json!([]), Some(token)).await?;
        debug!("Logged out");
        Ok(())
    }

    async fn send(&self, method: &str, params: Value, auth: Option<String>) -> Result<Value> {
        let id = RequestId::Number(self.next_id.fetch_add(1, Ordering::SeqCst));
        debug!("-> {method} (id={id})");

        let request = Request::new(method, params, id.clone()).with_auth(auth);
        let body = serde_json::to_vec(&request)?;

        let resp = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes().await?;
        trace!("<- {method} (id={id}, {} bytes)", bytes.len());

        let response: Response = serde_json::from_slice(&bytes)?;
        if let Some(error) = response.error {
            debug!("<- {method} (id={id}) error code {}", error.code);
            return Err(error.into());
        }

        response.result.ok_or(Error::UnexpectedResponse)
    }
}

impl Transport for HttpTransport {
    async fn call(&self, method: &str, params: Value) -> Result<Value> {
        let auth = if is_anonymous_method(method) {
            None
        } else {
            self.auth.read().await.clone()
        };
        self.send(method, params, auth).await
    }
}
