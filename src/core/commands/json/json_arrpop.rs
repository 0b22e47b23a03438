// src/core/commands/json/json_arrpop.rs

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, combine};
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

/// Index used when none is given: the last element.
pub const LAST_ELEMENT: i64 = -1;

#[derive(Debug, Clone)]
pub struct JsonArrPop {
    pub key: Bytes,
    pub path: String,
    pub index: i64,
}

impl JsonArrPop {
    pub fn new(key: Bytes, path: Option<&str>, index: Option<i64>) -> Self {
        JsonArrPop {
            key,
            path: helpers::path_or_root(path),
            index: index.unwrap_or(LAST_ELEMENT),
        }
    }
}

impl JsonCommandSpec for JsonArrPop {
    /// The popped element as JSON text, or null for an empty array.
    type Output = RespValue;

    fn command(&self) -> JsonCommand {
        JsonCommand::ArrPop
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        combine([
            helpers::required(&self.key, "key", JsonCommand::ArrPop)?,
            ArgToken::from(&self.path),
            ArgToken::Int(self.index),
        ])
    }

    fn decode(&self, reply: RespValue) -> Result<RespValue, SpinelJsonError> {
        Ok(reply)
    }
}
