//! The request/response seam between typed operations and the wire.

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;

/// Sends one JSON-RPC call and yields its `result` value.
///
/// Implementations surface server-side error objects as [`crate::Error::Rpc`]
/// and never inspect the shape of `result`.
pub trait Transport: Send + Sync {
    fn call(&self, method: &str, params: Value) -> impl Future<Output = Result<Value>> + Send;
}

impl<T: Transport> Transport for &T {
    fn call(&self, method: &str, params: Value) -> impl Future<Output = Result<Value>> + Send {
        (**self).call(method, params)
    }
}

impl<T: Transport> Transport for Arc<T> {
    fn call(&self, method: &str, params: Value) -> impl Future<Output = Result<Value>> + Send {
        (**self).call(method, params)
    }
}
