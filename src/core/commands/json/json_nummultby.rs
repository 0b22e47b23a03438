// src/core/commands/json/json_nummultby.rs

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, Numeric, combine};
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct JsonNumMultBy {
    pub key: Bytes,
    pub path: String,
    pub multiplier: Numeric,
}

impl JsonNumMultBy {
    pub fn new(key: Bytes, path: Option<&str>, multiplier: Numeric) -> Self {
        JsonNumMultBy {
            key,
            path: helpers::path_or_root(path),
            multiplier,
        }
    }
}

impl JsonCommandSpec for JsonNumMultBy {
    type Output = RespValue;

    fn command(&self) -> JsonCommand {
        JsonCommand::NumMultBy
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        combine([
            helpers::required(&self.key, "key", JsonCommand::NumMultBy)?,
            ArgToken::from(&self.path),
            ArgToken::from(self.multiplier),
        ])
    }

    fn decode(&self, reply: RespValue) -> Result<RespValue, SpinelJsonError> {
        Ok(reply)
    }
}
