// src/core/commands/json/json_objlen.rs

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, combine};
use crate::core::reply::decoders;
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonObjLen {
    pub key: Bytes,
    pub path: String,
}

impl JsonObjLen {
    pub fn new(key: Bytes, path: Option<&str>) -> Self {
        JsonObjLen {
            key,
            path: helpers::path_or_root(path),
        }
    }
}

impl JsonCommandSpec for JsonObjLen {
    type Output = Option<i64>;

    fn command(&self) -> JsonCommand {
        JsonCommand::ObjLen
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        combine([
            helpers::required(&self.key, "key", JsonCommand::ObjLen)?,
            ArgToken::from(&self.path),
        ])
    }

    fn decode(&self, reply: RespValue) -> Result<Option<i64>, SpinelJsonError> {
        decoders::nullable_integer(reply)
    }
}
