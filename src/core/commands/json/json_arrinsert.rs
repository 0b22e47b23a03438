// src/core/commands/json/json_arrinsert.rs

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, combine};
use crate::core::reply::decoders;
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonArrInsert {
    pub key: Bytes,
    pub path: String,
    /// Insert before this position. Negative values count from the end.
    pub index: i64,
    pub values: Vec<Bytes>,
}

impl JsonArrInsert {
    pub fn new(key: Bytes, path: Option<&str>, index: i64, values: Vec<Bytes>) -> Self {
        JsonArrInsert {
            key,
            path: helpers::path_or_root(path),
            index,
            values,
        }
    }
}

impl JsonCommandSpec for JsonArrInsert {
    type Output = i64;

    fn command(&self) -> JsonCommand {
        JsonCommand::ArrInsert
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        if self.values.is_empty() {
            return Err(SpinelJsonError::InvalidArgument(
                "JSON.ARRINSERT requires at least one value".to_string(),
            ));
        }
        combine([
            helpers::required(&self.key, "key", JsonCommand::ArrInsert)?,
            ArgToken::from(&self.path),
            ArgToken::Int(self.index),
            ArgToken::from(self.values.as_slice()),
        ])
    }

    fn decode(&self, reply: RespValue) -> Result<i64, SpinelJsonError> {
        decoders::integer(reply)
    }
}
