// src/core/commands/json/json_numincrby.rs

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, Numeric, combine};
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct JsonNumIncrBy {
    pub key: Bytes,
    pub path: String,
    pub increment: Numeric,
}

impl JsonNumIncrBy {
    pub fn new(key: Bytes, path: Option<&str>, increment: Numeric) -> Self {
        JsonNumIncrBy {
            key,
            path: helpers::path_or_root(path),
            increment,
        }
    }
}

impl JsonCommandSpec for JsonNumIncrBy {
    /// The new value, as the server renders it.
    type Output = RespValue;

    fn command(&self) -> JsonCommand {
        JsonCommand::NumIncrBy
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        combine([
            helpers::required(&self.key, "key", JsonCommand::NumIncrBy)?,
            ArgToken::from(&self.path),
            ArgToken::from(self.increment),
        ])
    }

    fn decode(&self, reply: RespValue) -> Result<RespValue, SpinelJsonError> {
        Ok(reply)
    }
}
