// src/core/reply/pathed.rs

//! A reply that may hold one matched value or many, depending on how the server
//! expanded the requested path.

use crate::core::serializer::{JsonSerializer, from_reply};
use crate::core::{RespValue, SpinelJsonError};
use once_cell::unsync::OnceCell;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

/// Wraps a single reply and decodes it lazily into a sequence of `T`.
///
/// - a null reply is an empty sequence;
/// - a reply whose text is a JSON array (`[` ... `]`) is a sequence of `T`;
/// - anything else is exactly one `T`.
pub struct PathedResult<T> {
    reply: RespValue,
    serializer: Arc<dyn JsonSerializer>,
    values: OnceCell<Vec<T>>,
}

impl<T> fmt::Debug for PathedResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathedResult")
            .field("reply", &self.reply)
            .field("decoded", &self.values.get().is_some())
            .finish()
    }
}

impl<T: DeserializeOwned> PathedResult<T> {
    pub fn new(reply: RespValue, serializer: Arc<dyn JsonSerializer>) -> Self {
        Self {
            reply,
            serializer,
            values: OnceCell::new(),
        }
    }

    /// The undecoded reply.
    pub fn raw(&self) -> &RespValue {
        &self.reply
    }

    /// True when the reply text is array-shaped and decodes as many values.
    pub fn is_multi(&self) -> bool {
        is_array_text(&self.reply)
    }

    /// Decoded values, computed on first access.
    pub fn values(&self) -> Result<&[T], SpinelJsonError> {
        self.values
            .get_or_try_init(|| self.decode())
            .map(Vec::as_slice)
    }

    pub fn len(&self) -> Result<usize, SpinelJsonError> {
        Ok(self.values()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, SpinelJsonError> {
        Ok(self.values()?.is_empty())
    }

    pub fn into_vec(self) -> Result<Vec<T>, SpinelJsonError> {
        match self.values.into_inner() {
            Some(values) => Ok(values),
            None => decode(&self.reply, self.serializer.as_ref()),
        }
    }

    /// The one matched value. Fails with `EmptyResult` when nothing matched and with
    /// `AmbiguousPath` when the path matched more than one value.
    pub fn single(self) -> Result<T, SpinelJsonError> {
        let mut values = self.into_vec()?;
        match values.len() {
            0 => Err(SpinelJsonError::EmptyResult),
            1 => Ok(values.remove(0)),
            n => Err(SpinelJsonError::AmbiguousPath(n)),
        }
    }

    fn decode(&self) -> Result<Vec<T>, SpinelJsonError> {
        decode(&self.reply, self.serializer.as_ref())
    }
}

fn decode<T: DeserializeOwned>(
    reply: &RespValue,
    serializer: &dyn JsonSerializer,
) -> Result<Vec<T>, SpinelJsonError> {
    if reply.is_null() {
        return Ok(Vec::new());
    }
    if is_array_text(reply) {
        from_reply::<Vec<T>>(serializer, reply)
    } else {
        Ok(vec![from_reply::<T>(serializer, reply)?])
    }
}

fn is_array_text(reply: &RespValue) -> bool {
    reply
        .as_bytes()
        .map(|b| b.trim_ascii())
        .is_some_and(|b| b.starts_with(b"[") && b.ends_with(b"]"))
}
