// src/core/commands/json/json_strlen.rs

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, combine};
use crate::core::reply::decoders;
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonStrLen {
    pub key: Bytes,
    pub path: String,
}

impl JsonStrLen {
    pub fn new(key: Bytes, path: Option<&str>) -> Self {
        JsonStrLen {
            key,
            path: helpers::path_or_root(path),
        }
    }
}

impl JsonCommandSpec for JsonStrLen {
    /// `None` when the key or path does not exist.
    type Output = Option<i64>;

    fn command(&self) -> JsonCommand {
        JsonCommand::StrLen
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        combine([
            helpers::required(&self.key, "key", JsonCommand::StrLen)?,
            ArgToken::from(&self.path),
        ])
    }

    fn decode(&self, reply: RespValue) -> Result<Option<i64>, SpinelJsonError> {
        decoders::nullable_integer(reply)
    }
}
