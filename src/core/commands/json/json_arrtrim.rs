// src/core/commands/json/json_arrtrim.rs

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, combine};
use crate::core::reply::decoders;
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

/// `JSON.ARRTRIM <key> <path> <start> <stop>`, both bounds inclusive.
#[derive(Debug, Clone, Default)]
pub struct JsonArrTrim {
    pub key: Bytes,
    pub path: String,
    pub start: i64,
    pub stop: i64,
}

impl JsonArrTrim {
    pub fn new(key: Bytes, path: Option<&str>, start: i64, stop: i64) -> Self {
        JsonArrTrim {
            key,
            path: helpers::path_or_root(path),
            start,
            stop,
        }
    }
}

impl JsonCommandSpec for JsonArrTrim {
    type Output = i64;

    fn command(&self) -> JsonCommand {
        JsonCommand::ArrTrim
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        combine([
            helpers::required(&self.key, "key", JsonCommand::ArrTrim)?,
            ArgToken::from(&self.path),
            ArgToken::Int(self.start),
            ArgToken::Int(self.stop),
        ])
    }

    fn decode(&self, reply: RespValue) -> Result<i64, SpinelJsonError> {
        decoders::integer(reply)
    }
}
