// src/core/protocol/resp_value.rs

//! Defines the reply value handed back by executors.

use crate::core::SpinelJsonError;
use bytes::Bytes;
use std::fmt;

/// `RespValue` is a simplified version of `RespFrame`.
///
/// It is the reply type every executor returns and every decoder consumes. A reply is
/// immutable and owned by the call that received it until it is fully decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum RespValue {
    SimpleString(String),
    BulkString(Bytes),
    Integer(i64),
    Array(Vec<RespValue>),
    Null,
    NullArray,
    Error(String),
}

/// The coarse shape of a reply, used by decoders to pick a strategy and to name
/// the offending shape when a reply cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Null,
    Integer,
    SimpleString,
    BulkString,
    Array,
    Error,
}

impl fmt::Display for ReplyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReplyKind::Null => "null",
            ReplyKind::Integer => "integer",
            ReplyKind::SimpleString => "simple string",
            ReplyKind::BulkString => "bulk string",
            ReplyKind::Array => "array",
            ReplyKind::Error => "error",
        };
        f.write_str(name)
    }
}

impl RespValue {
    pub fn kind(&self) -> ReplyKind {
        match self {
            RespValue::Null | RespValue::NullArray => ReplyKind::Null,
            RespValue::Integer(_) => ReplyKind::Integer,
            RespValue::SimpleString(_) => ReplyKind::SimpleString,
            RespValue::BulkString(_) => ReplyKind::BulkString,
            RespValue::Array(_) => ReplyKind::Array,
            RespValue::Error(_) => ReplyKind::Error,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RespValue::Null | RespValue::NullArray)
    }

    /// Returns the raw payload of a string-shaped reply.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            RespValue::BulkString(b) => Some(b),
            RespValue::SimpleString(s) => Some(s.as_bytes()),
            _ => None,
        }
    }

    /// Indexes into an array reply.
    pub fn get(&self, index: usize) -> Option<&RespValue> {
        match self {
            RespValue::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Explicit numeric conversion. Integers pass through; string replies must parse.
    pub fn to_integer(&self) -> Result<i64, SpinelJsonError> {
        match self {
            RespValue::Integer(i) => Ok(*i),
            RespValue::BulkString(_) | RespValue::SimpleString(_) => {
                let text = self.to_text()?;
                text.trim().parse::<i64>().map_err(|_| {
                    SpinelJsonError::UnexpectedReply(format!("'{text}' is not an integer"))
                })
            }
            other => Err(SpinelJsonError::UnexpectedReply(format!(
                "cannot read an integer from a {} reply",
                other.kind()
            ))),
        }
    }

    /// Explicit string conversion. Integers are rendered in decimal.
    pub fn to_text(&self) -> Result<String, SpinelJsonError> {
        match self {
            RespValue::BulkString(b) => Ok(std::str::from_utf8(b)?.to_string()),
            RespValue::SimpleString(s) => Ok(s.clone()),
            RespValue::Integer(i) => Ok(itoa::Buffer::new().format(*i).to_string()),
            other => Err(SpinelJsonError::UnexpectedReply(format!(
                "cannot read a string from a {} reply",
                other.kind()
            ))),
        }
    }
}

impl From<RespValue> for super::RespFrame {
    fn from(val: RespValue) -> Self {
        match val {
            RespValue::SimpleString(s) => super::RespFrame::SimpleString(s),
            RespValue::BulkString(b) => super::RespFrame::BulkString(b),
            RespValue::Integer(i) => super::RespFrame::Integer(i),
            // Recursively convert elements of an array.
            RespValue::Array(arr) => {
                super::RespFrame::Array(arr.into_iter().map(Into::into).collect())
            }
            RespValue::Null => super::RespFrame::Null,
            RespValue::NullArray => super::RespFrame::NullArray,
            RespValue::Error(s) => super::RespFrame::Error(s),
        }
    }
}

impl From<super::RespFrame> for RespValue {
    fn from(frame: super::RespFrame) -> Self {
        match frame {
            super::RespFrame::SimpleString(s) => RespValue::SimpleString(s),
            super::RespFrame::BulkString(b) => RespValue::BulkString(b),
            super::RespFrame::Integer(i) => RespValue::Integer(i),
            super::RespFrame::Array(arr) => {
                RespValue::Array(arr.into_iter().map(Into::into).collect())
            }
            super::RespFrame::Null => RespValue::Null,
            super::RespFrame::NullArray => RespValue::NullArray,
            super::RespFrame::Error(s) => RespValue::Error(s),
        }
    }
}
