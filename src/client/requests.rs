// src/client/requests.rs

//! Builds the command for each client operation. Both clients share these, so a
//! client method only has to pick a builder and run the result.

use crate::core::commands::JsonCommandSpec;
use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::helpers::{self, Numeric};
use crate::core::commands::json::{
    GetOptions, JsonArrAppend, JsonArrIndex, JsonArrInsert, JsonArrLen, JsonArrPop, JsonArrTrim,
    JsonDebugMemory, JsonDel, JsonGet, JsonIndex, JsonMGet, JsonNumIncrBy, JsonNumMultBy,
    JsonObjKeys, JsonObjLen, JsonQGet, JsonResp, JsonSet, JsonStrAppend, JsonStrLen, JsonType,
    SetOptions,
};
use crate::core::reply::{IndexedCollection, PathedResult, decoders};
use crate::core::serializer::{JsonSerializer, to_json};
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// A command whose decoded output goes through one more step, typically
/// deserialization into a caller type.
pub(super) struct Decoded<C, F> {
    cmd: C,
    then: F,
}

impl<C, F, T> JsonCommandSpec for Decoded<C, F>
where
    C: JsonCommandSpec,
    F: Fn(C::Output) -> Result<T, SpinelJsonError>,
{
    type Output = T;

    fn command(&self) -> JsonCommand {
        self.cmd.command()
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        self.cmd.to_resp_args()
    }

    fn decode(&self, reply: RespValue) -> Result<T, SpinelJsonError> {
        (self.then)(self.cmd.decode(reply)?)
    }
}

fn json_bytes<T: Serialize + ?Sized>(
    serializer: &dyn JsonSerializer,
    value: &T,
) -> Result<Bytes, SpinelJsonError> {
    to_json(serializer, value).map(Bytes::from)
}

fn json_values<T: Serialize>(
    serializer: &dyn JsonSerializer,
    values: &[T],
) -> Result<Vec<Bytes>, SpinelJsonError> {
    values.iter().map(|v| json_bytes(serializer, v)).collect()
}

// --- Documents ---

pub(super) fn del(key: impl AsRef<[u8]>, path: Option<&str>) -> JsonDel {
    JsonDel::new(helpers::key_bytes(key), path)
}

pub(super) fn forget(key: impl AsRef<[u8]>, path: Option<&str>) -> JsonDel {
    JsonDel::forget(helpers::key_bytes(key), path)
}

pub(super) fn get(key: impl AsRef<[u8]>, options: &GetOptions, paths: &[&str]) -> JsonGet {
    JsonGet::new(helpers::key_bytes(key), options.clone(), paths)
}

pub(super) fn get_as<T: DeserializeOwned>(
    serializer: Arc<dyn JsonSerializer>,
    key: impl AsRef<[u8]>,
    paths: &[&str],
) -> Decoded<JsonGet, impl Fn(RespValue) -> Result<PathedResult<T>, SpinelJsonError>> {
    Decoded {
        cmd: get(key, &GetOptions::default(), paths),
        then: move |reply| Ok(decoders::pathed(reply, Arc::clone(&serializer))),
    }
}

pub(super) fn mget<K: AsRef<[u8]>>(keys: &[K], path: Option<&str>) -> JsonMGet {
    JsonMGet::new(keys.iter().map(helpers::key_bytes).collect(), path)
}

pub(super) fn mget_as<T: DeserializeOwned, K: AsRef<[u8]>>(
    serializer: Arc<dyn JsonSerializer>,
    keys: &[K],
    path: Option<&str>,
) -> Decoded<JsonMGet, impl Fn(Vec<RespValue>) -> Result<Vec<Option<T>>, SpinelJsonError>> {
    Decoded {
        cmd: mget(keys, path),
        then: move |replies| {
            decoders::typed_array(RespValue::Array(replies), serializer.as_ref())
        },
    }
}

pub(super) fn set<T: Serialize + ?Sized>(
    serializer: &dyn JsonSerializer,
    key: impl AsRef<[u8]>,
    path: Option<&str>,
    value: &T,
    options: SetOptions,
) -> Result<JsonSet, SpinelJsonError> {
    Ok(JsonSet::new(
        helpers::key_bytes(key),
        path,
        json_bytes(serializer, value)?,
        options,
    ))
}

pub(super) fn set_raw(
    key: impl AsRef<[u8]>,
    path: Option<&str>,
    json: &str,
    options: SetOptions,
) -> JsonSet {
    JsonSet::new(
        helpers::key_bytes(key),
        path,
        Bytes::copy_from_slice(json.as_bytes()),
        options,
    )
}

pub(super) fn type_of(key: impl AsRef<[u8]>, path: Option<&str>) -> JsonType {
    JsonType::new(helpers::key_bytes(key), path)
}

// --- Numbers and strings ---

pub(super) fn num_incr_by(key: impl AsRef<[u8]>, path: Option<&str>, by: Numeric) -> JsonNumIncrBy {
    JsonNumIncrBy::new(helpers::key_bytes(key), path, by)
}

pub(super) fn num_mult_by(key: impl AsRef<[u8]>, path: Option<&str>, by: Numeric) -> JsonNumMultBy {
    JsonNumMultBy::new(helpers::key_bytes(key), path, by)
}

pub(super) fn str_append(
    serializer: &dyn JsonSerializer,
    key: impl AsRef<[u8]>,
    path: Option<&str>,
    suffix: &str,
) -> Result<JsonStrAppend, SpinelJsonError> {
    Ok(JsonStrAppend::new(
        helpers::key_bytes(key),
        path,
        json_bytes(serializer, suffix)?,
    ))
}

pub(super) fn str_len(key: impl AsRef<[u8]>, path: Option<&str>) -> JsonStrLen {
    JsonStrLen::new(helpers::key_bytes(key), path)
}

// --- Arrays ---

pub(super) fn arr_append<T: Serialize>(
    serializer: &dyn JsonSerializer,
    key: impl AsRef<[u8]>,
    path: Option<&str>,
    values: &[T],
) -> Result<JsonArrAppend, SpinelJsonError> {
    Ok(JsonArrAppend::new(
        helpers::key_bytes(key),
        path,
        json_values(serializer, values)?,
    ))
}

pub(super) fn arr_index<T: Serialize + ?Sized>(
    serializer: &dyn JsonSerializer,
    key: impl AsRef<[u8]>,
    path: Option<&str>,
    scalar: &T,
    start: Option<i64>,
    stop: Option<i64>,
) -> Result<JsonArrIndex, SpinelJsonError> {
    Ok(JsonArrIndex::new(
        helpers::key_bytes(key),
        path,
        json_bytes(serializer, scalar)?,
        start,
        stop,
    ))
}

pub(super) fn arr_insert<T: Serialize>(
    serializer: &dyn JsonSerializer,
    key: impl AsRef<[u8]>,
    path: Option<&str>,
    index: i64,
    values: &[T],
) -> Result<JsonArrInsert, SpinelJsonError> {
    Ok(JsonArrInsert::new(
        helpers::key_bytes(key),
        path,
        index,
        json_values(serializer, values)?,
    ))
}

pub(super) fn arr_len(key: impl AsRef<[u8]>, path: Option<&str>) -> JsonArrLen {
    JsonArrLen::new(helpers::key_bytes(key), path)
}

pub(super) fn arr_pop(key: impl AsRef<[u8]>, path: Option<&str>, index: Option<i64>) -> JsonArrPop {
    JsonArrPop::new(helpers::key_bytes(key), path, index)
}

pub(super) fn arr_pop_as<T: DeserializeOwned>(
    serializer: Arc<dyn JsonSerializer>,
    key: impl AsRef<[u8]>,
    path: Option<&str>,
    index: Option<i64>,
) -> Decoded<JsonArrPop, impl Fn(RespValue) -> Result<Option<T>, SpinelJsonError>> {
    Decoded {
        cmd: arr_pop(key, path, index),
        then: move |reply| decoders::optional(reply, serializer.as_ref()),
    }
}

pub(super) fn arr_trim(
    key: impl AsRef<[u8]>,
    path: Option<&str>,
    start: i64,
    stop: i64,
) -> JsonArrTrim {
    JsonArrTrim::new(helpers::key_bytes(key), path, start, stop)
}

// --- Objects ---

pub(super) fn obj_keys(key: impl AsRef<[u8]>, path: Option<&str>) -> JsonObjKeys {
    JsonObjKeys::new(helpers::key_bytes(key), path)
}

pub(super) fn obj_len(key: impl AsRef<[u8]>, path: Option<&str>) -> JsonObjLen {
    JsonObjLen::new(helpers::key_bytes(key), path)
}

// --- Introspection ---

pub(super) fn debug_memory(key: impl AsRef<[u8]>, path: Option<&str>) -> JsonDebugMemory {
    JsonDebugMemory::new(helpers::key_bytes(key), path)
}

pub(super) fn get_resp(key: impl AsRef<[u8]>, path: Option<&str>) -> JsonResp {
    JsonResp::new(helpers::key_bytes(key), path)
}

// --- Secondary indexes ---

pub(super) fn index_add(index: impl AsRef<[u8]>, field: &str, path: Option<&str>) -> JsonIndex {
    JsonIndex::add(helpers::key_bytes(index), field, path)
}

pub(super) fn index_delete(index: impl AsRef<[u8]>, field: &str) -> JsonIndex {
    JsonIndex::delete(helpers::key_bytes(index), field)
}

pub(super) fn index_get(index: impl AsRef<[u8]>, query: &str, path: Option<&str>) -> JsonQGet {
    JsonQGet::new(helpers::key_bytes(index), query, path)
}

pub(super) fn index_get_as<T: DeserializeOwned>(
    serializer: Arc<dyn JsonSerializer>,
    index: impl AsRef<[u8]>,
    query: &str,
    path: Option<&str>,
) -> Decoded<JsonQGet, impl Fn(RespValue) -> Result<IndexedCollection<T>, SpinelJsonError>> {
    Decoded {
        cmd: index_get(index, query, path),
        then: move |reply| decoders::indexed(reply, serializer.as_ref()),
    }
}
