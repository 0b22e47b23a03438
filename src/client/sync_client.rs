// src/client/sync_client.rs

use super::{SerializerSource, reject_error_reply, requests};
use crate::core::commands::JsonCommandSpec;
use crate::core::commands::helpers::Numeric;
use crate::core::commands::json::{GetOptions, SetOptions};
use crate::core::reply::{IndexedCollection, OperationResult, PathedResult};
use crate::core::serializer::JsonSerializer;
use crate::core::{Executor, RespValue, SpinelJsonError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Blocking JSON operations over an [`Executor`].
///
/// Every method makes exactly one executor call. Paths given as `None` (or `""`)
/// address the document root.
#[derive(Debug, Clone)]
pub struct JsonClient<E> {
    executor: E,
    serializer: SerializerSource,
}

impl<E: Executor> JsonClient<E> {
    /// A client that uses the process-wide serializer registered with
    /// [`set_serializer`](crate::core::serializer::set_serializer).
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            serializer: SerializerSource::Global,
        }
    }

    pub fn with_serializer(executor: E, serializer: Arc<dyn JsonSerializer>) -> Self {
        Self {
            executor,
            serializer: SerializerSource::Explicit(serializer),
        }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Builds, sends and decodes any command.
    pub fn run<C: JsonCommandSpec>(&self, cmd: &C) -> Result<C::Output, SpinelJsonError> {
        let args = cmd.to_resp_args()?;
        let name = cmd.command().wire_name();
        debug!(command = name, args = args.len(), "Dispatching JSON command");
        let reply = self.executor.execute(name, args)?;
        cmd.decode(reject_error_reply(reply)?)
    }

    fn serializer(&self) -> Result<Arc<dyn JsonSerializer>, SpinelJsonError> {
        self.serializer.resolve()
    }

    // --- Documents ---

    pub fn del(&self, key: impl AsRef<[u8]>, path: Option<&str>) -> Result<i64, SpinelJsonError> {
        self.run(&requests::del(key, path))
    }

    /// Same as [`del`](Self::del), sent as `JSON.FORGET`.
    pub fn forget(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
    ) -> Result<i64, SpinelJsonError> {
        self.run(&requests::forget(key, path))
    }

    pub fn get(&self, key: impl AsRef<[u8]>, paths: &[&str]) -> Result<RespValue, SpinelJsonError> {
        self.get_with_options(key, &GetOptions::default(), paths)
    }

    pub fn get_with_options(
        &self,
        key: impl AsRef<[u8]>,
        options: &GetOptions,
        paths: &[&str],
    ) -> Result<RespValue, SpinelJsonError> {
        self.run(&requests::get(key, options, paths))
    }

    /// Reads `paths` and deserializes the match(es) into `T`.
    pub fn get_as<T: DeserializeOwned>(
        &self,
        key: impl AsRef<[u8]>,
        paths: &[&str],
    ) -> Result<PathedResult<T>, SpinelJsonError> {
        self.run(&requests::get_as(self.serializer()?, key, paths))
    }

    pub fn mget<K: AsRef<[u8]>>(
        &self,
        keys: &[K],
        path: Option<&str>,
    ) -> Result<Vec<RespValue>, SpinelJsonError> {
        self.run(&requests::mget(keys, path))
    }

    /// One entry per key, in order; missing keys are `None`.
    pub fn mget_as<T: DeserializeOwned, K: AsRef<[u8]>>(
        &self,
        keys: &[K],
        path: Option<&str>,
    ) -> Result<Vec<Option<T>>, SpinelJsonError> {
        self.run(&requests::mget_as(self.serializer()?, keys, path))
    }

    pub fn set<T: Serialize + ?Sized>(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
        value: &T,
        options: SetOptions,
    ) -> Result<OperationResult, SpinelJsonError> {
        let cmd = requests::set(self.serializer()?.as_ref(), key, path, value, options)?;
        self.run(&cmd)
    }

    /// Stores already-serialized JSON text as is.
    pub fn set_raw(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
        json: &str,
        options: SetOptions,
    ) -> Result<OperationResult, SpinelJsonError> {
        self.run(&requests::set_raw(key, path, json, options))
    }

    pub fn type_of(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
    ) -> Result<RespValue, SpinelJsonError> {
        self.run(&requests::type_of(key, path))
    }

    // --- Numbers and strings ---

    pub fn num_incr_by(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
        increment: impl Into<Numeric>,
    ) -> Result<RespValue, SpinelJsonError> {
        self.run(&requests::num_incr_by(key, path, increment.into()))
    }

    pub fn num_mult_by(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
        multiplier: impl Into<Numeric>,
    ) -> Result<RespValue, SpinelJsonError> {
        self.run(&requests::num_mult_by(key, path, multiplier.into()))
    }

    pub fn str_append(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
        suffix: &str,
    ) -> Result<i64, SpinelJsonError> {
        let cmd = requests::str_append(self.serializer()?.as_ref(), key, path, suffix)?;
        self.run(&cmd)
    }

    pub fn str_len(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
    ) -> Result<Option<i64>, SpinelJsonError> {
        self.run(&requests::str_len(key, path))
    }

    // --- Arrays ---

    pub fn arr_append<T: Serialize>(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
        values: &[T],
    ) -> Result<i64, SpinelJsonError> {
        let cmd = requests::arr_append(self.serializer()?.as_ref(), key, path, values)?;
        self.run(&cmd)
    }

    /// Position of `scalar` within `[start, stop)`; `None` bounds search everything.
    pub fn arr_index<T: Serialize + ?Sized>(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
        scalar: &T,
        start: Option<i64>,
        stop: Option<i64>,
    ) -> Result<i64, SpinelJsonError> {
        let serializer = self.serializer()?;
        let cmd = requests::arr_index(serializer.as_ref(), key, path, scalar, start, stop)?;
        self.run(&cmd)
    }

    pub fn arr_insert<T: Serialize>(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
        index: i64,
        values: &[T],
    ) -> Result<i64, SpinelJsonError> {
        let serializer = self.serializer()?;
        let cmd = requests::arr_insert(serializer.as_ref(), key, path, index, values)?;
        self.run(&cmd)
    }

    pub fn arr_len(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
    ) -> Result<Option<i64>, SpinelJsonError> {
        self.run(&requests::arr_len(key, path))
    }

    /// Pops the element at `index` (the last one when `None`).
    pub fn arr_pop(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
        index: Option<i64>,
    ) -> Result<RespValue, SpinelJsonError> {
        self.run(&requests::arr_pop(key, path, index))
    }

    pub fn arr_pop_as<T: DeserializeOwned>(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
        index: Option<i64>,
    ) -> Result<Option<T>, SpinelJsonError> {
        self.run(&requests::arr_pop_as(self.serializer()?, key, path, index))
    }

    pub fn arr_trim(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
        start: i64,
        stop: i64,
    ) -> Result<i64, SpinelJsonError> {
        self.run(&requests::arr_trim(key, path, start, stop))
    }

    // --- Objects ---

    pub fn obj_keys(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
    ) -> Result<Vec<String>, SpinelJsonError> {
        self.run(&requests::obj_keys(key, path))
    }

    pub fn obj_len(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
    ) -> Result<Option<i64>, SpinelJsonError> {
        self.run(&requests::obj_len(key, path))
    }

    // --- Introspection ---

    pub fn debug_memory(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
    ) -> Result<i64, SpinelJsonError> {
        self.run(&requests::debug_memory(key, path))
    }

    pub fn get_resp(
        &self,
        key: impl AsRef<[u8]>,
        path: Option<&str>,
    ) -> Result<RespValue, SpinelJsonError> {
        self.run(&requests::get_resp(key, path))
    }

    // --- Secondary indexes ---

    pub fn index_add(
        &self,
        index: impl AsRef<[u8]>,
        field: &str,
        path: Option<&str>,
    ) -> Result<RespValue, SpinelJsonError> {
        self.run(&requests::index_add(index, field, path))
    }

    pub fn index_delete(
        &self,
        index: impl AsRef<[u8]>,
        field: &str,
    ) -> Result<RespValue, SpinelJsonError> {
        self.run(&requests::index_delete(index, field))
    }

    pub fn index_get(
        &self,
        index: impl AsRef<[u8]>,
        query: &str,
        path: Option<&str>,
    ) -> Result<RespValue, SpinelJsonError> {
        self.run(&requests::index_get(index, query, path))
    }

    pub fn index_get_as<T: DeserializeOwned>(
        &self,
        index: impl AsRef<[u8]>,
        query: &str,
        path: Option<&str>,
    ) -> Result<IndexedCollection<T>, SpinelJsonError> {
        self.run(&requests::index_get_as(self.serializer()?, index, query, path))
    }
}
