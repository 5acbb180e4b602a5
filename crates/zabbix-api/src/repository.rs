//! Call-and-decode pipeline shared by every entity.
//!
//! Each operation builds the `<entity>.<verb>` method name, hands params to
//! the [`Transport`], and decodes the result into typed records. Transport
//! errors are returned untouched; nothing is retried.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::trace;
use zabbix_rpc::Transport;
use zabbix_types::IdList;
use zabbix_types::wire::Id;

use crate::entity::{Entity, Identified, Updatable};
use crate::error::{Error, Result};
use crate::params::{OUTPUT, OUTPUT_EXTEND, Params};

/// Typed operations for one entity, borrowed from [`crate::Api`].
pub struct Repository<'a, T, E> {
    transport: &'a T,
    _entity: PhantomData<fn() -> E>,
}

impl<T, E> Clone for Repository<'_, T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E> Copy for Repository<'_, T, E> {}

fn method_name<E: Entity>(verb: &str) -> String {
    format!("{}.{verb}", E::METHOD_PREFIX)
}

pub(crate) fn decode<R: DeserializeOwned>(method: &str, value: Value) -> Result<R> {
    serde_json::from_value(value).map_err(|source| Error::Decode {
        method: method.to_string(),
        source,
    })
}

/// Pull `key` out of an object result.
fn take_field(method: &str, value: Value, key: &str) -> Result<Value> {
    let mut map: serde_json::Map<String, Value> = decode(method, value)?;
    map.remove(key).ok_or_else(|| Error::MissingField {
        method: method.to_string(),
        key: key.to_string(),
    })
}

impl<'a, T: Transport, E: Entity> Repository<'a, T, E> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self {
            transport,
            _entity: PhantomData,
        }
    }

    pub(crate) async fn call<P: Serialize + ?Sized>(&self, method: &str, params: &P) -> Result<Value> {
        let params = serde_json::to_value(params).map_err(|source| Error::Encode {
            method: method.to_string(),
            source,
        })?;
        Ok(self.transport.call(method, params).await?)
    }

    /// `<entity>.get` with `output = "extend"` unless the caller set it.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or `Error::Decode` if the result is not a
    /// sequence of records.
    pub async fn get(&self, mut params: Params) -> Result<Vec<E>> {
        E::apply_defaults(&mut params);

        let method = method_name::<E>("get");
        let result = self.transport.call(&method, params.into_value()).await?;
        let records: Vec<E> = decode(&method, result)?;

        trace!("{method} returned {} records", records.len());
        Ok(records)
    }
}

impl<T: Transport, E: Identified> Repository<'_, T, E> {
    /// Fetch the single record with identifier `id`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ExpectedOneResult` unless exactly one record matches.
    pub async fn get_by_id(&self, id: &str) -> Result<E> {
        let mut records = self.get(Params::new().with(E::ID_KEY, id)).await?;
        if records.len() != 1 {
            return Err(Error::ExpectedOneResult(records.len()));
        }
        records.pop().ok_or(Error::ExpectedOneResult(0))
    }

    /// Create `records` and write the assigned ids back by position.
    ///
    /// # Errors
    ///
    /// Returns `Error::IdCountMismatch` if the server returned a different
    /// number of ids; no record is modified in that case.
    pub async fn create(&self, records: &mut [E]) -> Result<()> {
        let method = method_name::<E>("create");
        let result = self.call(&method, &*records).await?;
        let ids: Vec<Id> = decode(&method, take_field(&method, result, E::ID_KEY)?)?;

        if ids.len() != records.len() {
            return Err(Error::IdCountMismatch {
                method,
                expected: records.len(),
                actual: ids.len(),
            });
        }

        for (record, id) in records.iter_mut().zip(ids) {
            record.set_id(id.into_inner());
        }
        Ok(())
    }

    /// Delete by identifier.
    ///
    /// # Errors
    ///
    /// Returns `Error::ExpectedMore` when the server reports a different
    /// number of deleted ids than requested.
    pub async fn delete_by_ids(&self, ids: &[String]) -> Result<()> {
        let method = method_name::<E>("delete");
        let result = self.call(&method, ids).await?;
        let deleted: IdList = decode(&method, take_field(&method, result, E::ID_KEY)?)?;

        if deleted.count() != ids.len() {
            return Err(Error::ExpectedMore {
                expected: ids.len(),
                actual: deleted.count(),
            });
        }
        Ok(())
    }

    /// Delete `records` and clear their ids.
    ///
    /// Ids are cleared on success and on `Error::ExpectedMore`, which the
    /// server only reports after performing the deletion.
    ///
    /// # Errors
    ///
    /// Same as [`Self::delete_by_ids`].
    pub async fn delete(&self, records: &mut [E]) -> Result<()> {
        let ids: Vec<String> = records.iter().map(|r| r.id().to_string()).collect();
        let result = self.delete_by_ids(&ids).await;

        if matches!(result, Ok(()) | Err(Error::ExpectedMore { .. })) {
            for record in records.iter_mut() {
                record.clear_id();
            }
        }
        result
    }
}

impl<T: Transport, E: Updatable> Repository<'_, T, E> {
    /// `<entity>.update` returning the identifiers of the updated records.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or a decode error if the result lacks
    /// the id list.
    pub async fn update(&self, mut params: Params) -> Result<Vec<E::IdRecord>> {
        params.set_default(OUTPUT, OUTPUT_EXTEND);

        let method = method_name::<E>("update");
        let result = self.transport.call(&method, params.into_value()).await?;
        let ids: Vec<Id> = decode(&method, take_field(&method, result, E::ID_KEY)?)?;

        Ok(ids.into_iter().map(|id| id.into_inner().into()).collect())
    }
}
