// src/core/reply/decoders.rs

//! Shape-specific reply decoders shared by the command implementations.

use super::{IndexedCollection, OperationResult, PathedResult};
use crate::core::serializer::{JsonSerializer, from_reply};
use crate::core::{RespValue, SpinelJsonError};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use std::sync::Arc;

fn unexpected(expected: &str, reply: &RespValue) -> SpinelJsonError {
    SpinelJsonError::UnexpectedReply(format!(
        "expected {expected}, got a {} reply",
        reply.kind()
    ))
}

/// Scalar integer. A null reply is an error.
pub fn integer(reply: RespValue) -> Result<i64, SpinelJsonError> {
    match reply {
        RespValue::Integer(i) => Ok(i),
        RespValue::BulkString(_) | RespValue::SimpleString(_) => reply.to_integer(),
        other => Err(unexpected("an integer", &other)),
    }
}

/// Nullable integer. A null reply is `None`, never zero.
pub fn nullable_integer(reply: RespValue) -> Result<Option<i64>, SpinelJsonError> {
    if reply.is_null() {
        return Ok(None);
    }
    integer(reply).map(Some)
}

/// Flat array of strings. A null reply (missing key) is an empty list.
pub fn bulk_strings(reply: RespValue) -> Result<Vec<String>, SpinelJsonError> {
    match reply {
        RespValue::Array(items) => items
            .into_iter()
            .map(|item| match item {
                RespValue::BulkString(_) | RespValue::SimpleString(_) => item.to_text(),
                other => Err(unexpected("a bulk string element", &other)),
            })
            .collect(),
        RespValue::Null | RespValue::NullArray => Ok(Vec::new()),
        other => Err(unexpected("an array", &other)),
    }
}

/// Array of raw replies, as returned by multi-key reads.
pub fn array(reply: RespValue) -> Result<Vec<RespValue>, SpinelJsonError> {
    match reply {
        RespValue::Array(items) => Ok(items),
        other => Err(unexpected("an array", &other)),
    }
}

/// Typed array. A bulk string is a one-element sequence; an array decodes each
/// element, with null elements becoming `None`.
pub fn typed_array<T: DeserializeOwned>(
    reply: RespValue,
    serializer: &dyn JsonSerializer,
) -> Result<Vec<Option<T>>, SpinelJsonError> {
    match reply {
        RespValue::BulkString(_) => Ok(vec![Some(from_reply(serializer, &reply)?)]),
        RespValue::Array(items) => items
            .iter()
            .map(|item| {
                if item.is_null() {
                    Ok(None)
                } else {
                    from_reply(serializer, item).map(Some)
                }
            })
            .collect(),
        other => Err(unexpected("a bulk string or an array", &other)),
    }
}

/// A single optional value: null is `None`, anything else is deserialized.
pub fn optional<T: DeserializeOwned>(
    reply: RespValue,
    serializer: &dyn JsonSerializer,
) -> Result<Option<T>, SpinelJsonError> {
    if reply.is_null() {
        return Ok(None);
    }
    from_reply(serializer, &reply).map(Some)
}

pub fn pathed<T: DeserializeOwned>(
    reply: RespValue,
    serializer: Arc<dyn JsonSerializer>,
) -> PathedResult<T> {
    PathedResult::new(reply, serializer)
}

pub fn operation_result(reply: RespValue) -> Result<OperationResult, SpinelJsonError> {
    OperationResult::from_reply(&reply)
}

/// Index query reply: a JSON object mapping document keys to arrays of matches.
pub fn indexed<T: DeserializeOwned>(
    reply: RespValue,
    serializer: &dyn JsonSerializer,
) -> Result<IndexedCollection<T>, SpinelJsonError> {
    match reply {
        RespValue::Null | RespValue::NullArray => Ok(IndexedCollection::default()),
        RespValue::BulkString(_) | RespValue::SimpleString(_) => {
            let entries: IndexMap<String, Vec<T>> = from_reply(serializer, &reply)?;
            Ok(IndexedCollection::new(entries))
        }
        other => Err(unexpected("a JSON object string", &other)),
    }
}
