// src/core/commands/json/json_arrappend.rs

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, combine};
use crate::core::reply::decoders;
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

/// `JSON.ARRAPPEND <key> <path> <json> [json ...]`
#[derive(Debug, Clone, Default)]
pub struct JsonArrAppend {
    pub key: Bytes,
    pub path: String,
    pub values: Vec<Bytes>,
}

impl JsonArrAppend {
    pub fn new(key: Bytes, path: Option<&str>, values: Vec<Bytes>) -> Self {
        JsonArrAppend {
            key,
            path: helpers::path_or_root(path),
            values,
        }
    }
}

impl JsonCommandSpec for JsonArrAppend {
    /// The array's new length.
    type Output = i64;

    fn command(&self) -> JsonCommand {
        JsonCommand::ArrAppend
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        if self.values.is_empty() {
            return Err(SpinelJsonError::InvalidArgument(
                "JSON.ARRAPPEND requires at least one value".to_string(),
            ));
        }
        combine([
            helpers::required(&self.key, "key", JsonCommand::ArrAppend)?,
            ArgToken::from(&self.path),
            ArgToken::from(self.values.as_slice()),
        ])
    }

    fn decode(&self, reply: RespValue) -> Result<i64, SpinelJsonError> {
        decoders::integer(reply)
    }
}
