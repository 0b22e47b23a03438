// src/core/reply/operation_result.rs

use crate::core::{RespValue, SpinelJsonError};

/// The outcome of a set-style command: whether the server acknowledged it, plus the
/// raw status text it replied with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperationResult {
    pub is_success: bool,
    pub raw_result: String,
}

impl OperationResult {
    pub fn new(is_success: bool, raw_result: impl Into<String>) -> Self {
        Self {
            is_success,
            raw_result: raw_result.into(),
        }
    }

    /// `"OK"` is success, any other string is not. A null reply (a conditional set
    /// whose condition failed) is unsuccessful with an empty raw result.
    pub fn from_reply(reply: &RespValue) -> Result<Self, SpinelJsonError> {
        if reply.is_null() {
            return Ok(Self::default());
        }
        let raw = reply.to_text()?;
        Ok(Self::new(raw == "OK", raw))
    }

    pub fn is_success(&self) -> bool {
        self.is_success
    }
}

impl From<OperationResult> for bool {
    fn from(result: OperationResult) -> Self {
        result.is_success
    }
}

impl From<&OperationResult> for bool {
    fn from(result: &OperationResult) -> Self {
        result.is_success
    }
}
