//! Typed operations over the Zabbix JSON-RPC API.
//!
//! [`Api`] wraps any [`Transport`] and hands out one [`Repository`] per
//! entity. Every repository shares the same pipeline: build
//! `<entity>.<verb>`, send params, decode the result into typed records from
//! `zabbix-types`.
//!
//! # Example
//!
//! ```no_run
//! use zabbix_api::{Api, Params};
//! use zabbix_rpc::{ClientConfig, HttpTransport};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::new(&ClientConfig::new(
//!     "https://zabbix.example.com/api_jsonrpc.php",
//! ))?;
//! transport.login("Admin", "zabbix").await?;
//!
//! let api = Api::new(transport);
//! for item in api.items().get_by_host_id("10084").await? {
//!     println!("{} {}", item.key, item.last_value);
//! }
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
mod history;
mod host;
mod item;
pub mod params;
pub mod repository;
mod script;
mod trigger;

use zabbix_rpc::Transport;
use zabbix_types::{HistoryItem, Host, Item, Proxy, Script, Template, Trigger};

pub use entity::{Entity, Identified, Updatable};
pub use error::{Error, Result};
pub use params::Params;
pub use repository::Repository;

pub type Items<'a, T> = Repository<'a, T, Item>;
pub type Triggers<'a, T> = Repository<'a, T, Trigger>;
pub type Templates<'a, T> = Repository<'a, T, Template>;
pub type Proxies<'a, T> = Repository<'a, T, Proxy>;
pub type Scripts<'a, T> = Repository<'a, T, Script>;
pub type Hosts<'a, T> = Repository<'a, T, Host>;
pub type History<'a, T> = Repository<'a, T, HistoryItem>;

/// Entry point holding the transport.
#[derive(Debug)]
pub struct Api<T> {
    transport: T,
}

impl<T: Transport> Api<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn into_transport(self) -> T {
        self.transport
    }

    #[must_use]
    pub fn items(&self) -> Items<'_, T> {
        Repository::new(&self.transport)
    }

    #[must_use]
    pub fn triggers(&self) -> Triggers<'_, T> {
        Repository::new(&self.transport)
    }

    #[must_use]
    pub fn templates(&self) -> Templates<'_, T> {
        Repository::new(&self.transport)
    }

    #[must_use]
    pub fn proxies(&self) -> Proxies<'_, T> {
        Repository::new(&self.transport)
    }

    #[must_use]
    pub fn scripts(&self) -> Scripts<'_, T> {
        Repository::new(&self.transport)
    }

    #[must_use]
    pub fn hosts(&self) -> Hosts<'_, T> {
        Repository::new(&self.transport)
    }

    #[must_use]
    pub fn history(&self) -> History<'_, T> {
        Repository::new(&self.transport)
    }

    /// Server version via `apiinfo.version`, e.g. `"4.0.3"`.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or `Error::Decode` if the result is not
    /// a string.
    pub async fn version(&self) -> Result<String> {
        const METHOD: &str = "apiinfo.version";

        let result = self
            .transport
            .call(METHOD, serde_json::Value::Array(Vec::new()))
            .await?;
        repository::decode(METHOD, result)
    }
}
