// src/core/commands/json/json_type.rs

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, combine};
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

/// `JSON.TYPE <key> [path]`. The reply is the type name (`object`, `array`, ...)
/// or null for a missing key.
#[derive(Debug, Clone, Default)]
pub struct JsonType {
    pub key: Bytes,
    pub path: String,
}

impl JsonType {
    pub fn new(key: Bytes, path: Option<&str>) -> Self {
        JsonType {
            key,
            path: helpers::path_or_root(path),
        }
    }
}

impl JsonCommandSpec for JsonType {
    type Output = RespValue;

    fn command(&self) -> JsonCommand {
        JsonCommand::Type
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        combine([
            helpers::required(&self.key, "key", JsonCommand::Type)?,
            ArgToken::from(&self.path),
        ])
    }

    fn decode(&self, reply: RespValue) -> Result<RespValue, SpinelJsonError> {
        Ok(reply)
    }
}
