// src/core/commands/json/json_resp.rs

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, combine};
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

/// `JSON.RESP <key> [path]`: the value rendered as nested RESP instead of JSON text.
#[derive(Debug, Clone, Default)]
pub struct JsonResp {
    pub key: Bytes,
    pub path: String,
}

impl JsonResp {
    pub fn new(key: Bytes, path: Option<&str>) -> Self {
        JsonResp {
            key,
            path: helpers::path_or_root(path),
        }
    }
}

impl JsonCommandSpec for JsonResp {
    type Output = RespValue;

    fn command(&self) -> JsonCommand {
        JsonCommand::Resp
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        combine([
            helpers::required(&self.key, "key", JsonCommand::Resp)?,
            ArgToken::from(&self.path),
        ])
    }

    fn decode(&self, reply: RespValue) -> Result<RespValue, SpinelJsonError> {
        Ok(reply)
    }
}
