// src/core/serializer.rs

//! Pluggable JSON (de)serialization and the process-wide serializer slot.
//!
//! Clients normally receive their serializer at construction. Code that prefers a
//! single process-wide instance registers one with [`set_serializer`] at startup;
//! the first registration wins and later ones are ignored.

use crate::core::{RespValue, SpinelJsonError};
use once_cell::sync::OnceCell;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Converts between JSON text and `serde_json::Value`.
///
/// The trait works on `Value` so it stays object safe; [`to_json`] and [`from_reply`]
/// bridge it to concrete serde types.
pub trait JsonSerializer: Send + Sync + fmt::Debug {
    fn serialize_value(&self, value: &Value) -> Result<String, SpinelJsonError>;
    fn deserialize_value(&self, raw: &[u8]) -> Result<Value, SpinelJsonError>;
}

/// The default serializer: compact `serde_json` text.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerdeJsonSerializer;

impl JsonSerializer for SerdeJsonSerializer {
    fn serialize_value(&self, value: &Value) -> Result<String, SpinelJsonError> {
        Ok(serde_json::to_string(value)?)
    }

    fn deserialize_value(&self, raw: &[u8]) -> Result<Value, SpinelJsonError> {
        Ok(serde_json::from_slice(raw)?)
    }
}

/// Serializes any serde value through `serializer`.
pub fn to_json<T>(serializer: &dyn JsonSerializer, value: &T) -> Result<String, SpinelJsonError>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(value)?;
    serializer.serialize_value(&value)
}

/// Deserializes a reply into `T`. A null reply is read as JSON `null`.
pub fn from_reply<T>(serializer: &dyn JsonSerializer, reply: &RespValue) -> Result<T, SpinelJsonError>
where
    T: DeserializeOwned,
{
    let value = match reply {
        RespValue::Null | RespValue::NullArray => Value::Null,
        RespValue::BulkString(b) => serializer.deserialize_value(b)?,
        RespValue::SimpleString(s) => serializer.deserialize_value(s.as_bytes())?,
        RespValue::Integer(i) => Value::from(*i),
        other => {
            return Err(SpinelJsonError::UnexpectedReply(format!(
                "cannot deserialize a {} reply",
                other.kind()
            )));
        }
    };
    Ok(serde_json::from_value(value)?)
}

static SERIALIZER: OnceCell<Arc<dyn JsonSerializer>> = OnceCell::new();

/// Registers the process-wide serializer. Returns `false` when one was already set,
/// in which case `serializer` is dropped and the existing one stays in place.
pub fn set_serializer(serializer: Arc<dyn JsonSerializer>) -> bool {
    match SERIALIZER.set(serializer) {
        Ok(()) => {
            debug!("Process-wide JSON serializer registered");
            true
        }
        Err(rejected) => {
            warn!("Ignoring serializer {rejected:?}: a process-wide serializer is already set");
            false
        }
    }
}

/// Returns the process-wide serializer, or a configuration error if none was set.
pub fn serializer() -> Result<Arc<dyn JsonSerializer>, SpinelJsonError> {
    SERIALIZER.get().cloned().ok_or_else(|| {
        SpinelJsonError::Configuration(
            "no JSON serializer has been registered; call set_serializer at startup \
             or construct the client with an explicit serializer"
                .to_string(),
        )
    })
}
