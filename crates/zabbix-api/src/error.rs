//! Error types for the zabbix-api crate.

/// Failure of a typed API operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transport failed or the server returned an error object.
    #[error(transparent)]
    Transport(#[from] zabbix_rpc::Error),

    #[error("Failed to encode params for {method}: {source}")]
    Encode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to decode result of {method}: {source}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Result of {method} has no {key}")]
    MissingField { method: String, key: String },

    #[error("{method} returned {actual} ids for {expected} records")]
    IdCountMismatch {
        method: String,
        expected: usize,
        actual: usize,
    },

    #[error("Expected exactly one result, got {0}")]
    ExpectedOneResult(usize),

    /// The server acknowledged fewer (or more) deletions than requested.
    #[error("Expected {expected}, got {actual}")]
    ExpectedMore { expected: usize, actual: usize },

    #[error(transparent)]
    DuplicateKey(#[from] zabbix_types::DuplicateKey),
}

impl Error {
    /// JSON-RPC error code when the server rejected the call.
    #[must_use]
    pub fn rpc_code(&self) -> Option<i32> {
        match self {
            Self::Transport(e) => e.rpc_code(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
