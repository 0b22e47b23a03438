// src/core/commands/json/json_debug.rs

//! Implements `JSON.DEBUG MEMORY`.

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, combine};
use crate::core::reply::decoders;
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonDebugMemory {
    pub key: Bytes,
    pub path: String,
}

impl JsonDebugMemory {
    pub fn new(key: Bytes, path: Option<&str>) -> Self {
        JsonDebugMemory {
            key,
            path: helpers::path_or_root(path),
        }
    }
}

impl JsonCommandSpec for JsonDebugMemory {
    /// Size of the value in bytes.
    type Output = i64;

    fn command(&self) -> JsonCommand {
        JsonCommand::Debug
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        // The subcommand token comes before the key.
        combine([
            ArgToken::from("MEMORY"),
            helpers::required(&self.key, "key", JsonCommand::Debug)?,
            ArgToken::from(&self.path),
        ])
    }

    fn decode(&self, reply: RespValue) -> Result<i64, SpinelJsonError> {
        decoders::integer(reply)
    }
}
