// src/core/commands/json/json_strappend.rs

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, combine};
use crate::core::reply::decoders;
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

/// `JSON.STRAPPEND <key> [path] <json-string>`
#[derive(Debug, Clone, Default)]
pub struct JsonStrAppend {
    pub key: Bytes,
    pub path: String,
    /// The suffix, already encoded as a JSON string literal (quotes included).
    pub value_json_str: Bytes,
}

impl JsonStrAppend {
    pub fn new(key: Bytes, path: Option<&str>, value_json_str: Bytes) -> Self {
        JsonStrAppend {
            key,
            path: helpers::path_or_root(path),
            value_json_str,
        }
    }
}

impl JsonCommandSpec for JsonStrAppend {
    /// The string's new length.
    type Output = i64;

    fn command(&self) -> JsonCommand {
        JsonCommand::StrAppend
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        combine([
            helpers::required(&self.key, "key", JsonCommand::StrAppend)?,
            ArgToken::from(&self.path),
            helpers::required(&self.value_json_str, "JSON string", JsonCommand::StrAppend)?,
        ])
    }

    fn decode(&self, reply: RespValue) -> Result<i64, SpinelJsonError> {
        decoders::integer(reply)
    }
}
