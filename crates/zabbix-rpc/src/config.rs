use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const ENV_URL: &str = "ZABBIX_URL";
pub const ENV_USER: &str = "ZABBIX_USER";
pub const ENV_PASSWORD: &str = "ZABBIX_PASSWORD";
pub const ENV_API_TOKEN: &str = "ZABBIX_API_TOKEN";

fn default_timeout_secs() -> u64 {
    30
}

/// Connection settings for a Zabbix frontend.
///
/// Either `user`/`password` (session login) or `api_token` is used for
/// authentication; a configured token wins.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    /// Full endpoint, e.g. `https://zabbix.example.com/api_jsonrpc.php`.
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn redact(secret: Option<&String>) -> Option<&'static str> {
            secret.map(|_| "<redacted>")
        }

        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &redact(self.password.as_ref()))
            .field("api_token", &redact(self.api_token.as_ref()))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: default_timeout_secs(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the URL is empty or not http(s), or
    /// the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(Error::InvalidConfig("url is empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::InvalidConfig(format!(
                "url must start with http:// or https://, got {url}"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::InvalidConfig("timeoutSecs must be positive".to_string()));
        }
        Ok(())
    }

    /// Override fields from `ZABBIX_*` variables looked up through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn merge_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key| lookup(key).filter(|v: &String| !v.is_empty());

        if let Some(url) = get(ENV_URL) {
            self.url = url;
        }
        if let Some(user) = get(ENV_USER) {
            self.user = Some(user);
        }
        if let Some(password) = get(ENV_PASSWORD) {
            self.password = Some(password);
        }
        if let Some(token) = get(ENV_API_TOKEN) {
            self.api_token = Some(token);
        }
    }

    /// Credentials for `user.login`, when both halves are present.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        Some((self.user.as_deref()?, self.password.as_deref()?))
    }
}
