//! JSON-RPC 2.0 plumbing for the Zabbix API.
//!
//! This crate provides the protocol envelope, the [`Transport`] seam used by
//! `zabbix-api`, and [`HttpTransport`], which speaks to a Zabbix frontend
//! over HTTP(S).
//!
//! # Modules
//!
//! - [`protocol`]: JSON-RPC 2.0 message types (Request, Response, `RpcError`)
//! - [`transport`]: the `Transport` trait
//! - [`client`]: `HttpTransport` with session login/logout
//! - [`config`]: `ClientConfig` and its environment overrides
//! - [`error`]: Error and Result types
//!
//! # Example
//!
//! ```no_run
//! use zabbix_rpc::{ClientConfig, HttpTransport, Transport};
//!
//! # async fn example() -> zabbix_rpc::Result<()> {
//! let config = ClientConfig::new("https://zabbix.example.com/api_jsonrpc.php");
//! let transport = HttpTransport::new(&config)?;
//! transport.login("Admin", "zabbix").await?;
//!
//! let version = transport.call("apiinfo.version", serde_json::json!([])).await?;
//! println!("Zabbix {version}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod transport;

pub use client::HttpTransport;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use protocol::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, JSONRPC_VERSION, METHOD_NOT_FOUND,
    PARSE_ERROR, Request, RequestId, Response, RpcError,
};
pub use transport::Transport;
