//! Error types for the zabbix-rpc crate.
//!
//! This module provides a unified error type for all transport operations.

use crate::protocol::RpcError;

/// Unified error type for RPC operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("RPC error {code}: {message}{}", data_suffix(.data))]
    Rpc {
        code: i32,
        message: String,
        data: Option<String>,
    },

    #[error("Unexpected response")]
    UnexpectedResponse,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub fn rpc(code: i32, message: impl Into<String>) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// JSON-RPC error code, if the server answered with an error object.
    #[must_use]
    pub fn rpc_code(&self) -> Option<i32> {
        match self {
            Self::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<RpcError> for Error {
    fn from(e: RpcError) -> Self {
        let data = e.detail();
        Self::Rpc {
            code: e.code,
            message: e.message,
            data,
        }
    }
}

#[allow(clippy::ref_option)] // Called with a borrowed field from the derive
fn data_suffix(data: &Option<String>) -> String {
    data.as_ref().map(|d| format!(" ({d})")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, Error>;
