// src/core/commands/json/json_arrindex.rs

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, combine};
use crate::core::reply::decoders;
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

/// `JSON.ARRINDEX <key> <path> <json-scalar> <start> <stop>`
///
/// `start` and `stop` are always sent; `0`/`0` searches the whole array.
#[derive(Debug, Clone, Default)]
pub struct JsonArrIndex {
    pub key: Bytes,
    pub path: String,
    pub scalar_json_str: Bytes,
    pub start: i64,
    pub stop: i64,
}

impl JsonArrIndex {
    pub fn new(
        key: Bytes,
        path: Option<&str>,
        scalar_json_str: Bytes,
        start: Option<i64>,
        stop: Option<i64>,
    ) -> Self {
        JsonArrIndex {
            key,
            path: helpers::path_or_root(path),
            scalar_json_str,
            start: start.unwrap_or(0),
            stop: stop.unwrap_or(0),
        }
    }
}

impl JsonCommandSpec for JsonArrIndex {
    /// Position of the first match, or `-1`.
    type Output = i64;

    fn command(&self) -> JsonCommand {
        JsonCommand::ArrIndex
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        combine([
            helpers::required(&self.key, "key", JsonCommand::ArrIndex)?,
            ArgToken::from(&self.path),
            helpers::required(&self.scalar_json_str, "JSON scalar", JsonCommand::ArrIndex)?,
            ArgToken::Int(self.start),
            ArgToken::Int(self.stop),
        ])
    }

    fn decode(&self, reply: RespValue) -> Result<i64, SpinelJsonError> {
        decoders::integer(reply)
    }
}
