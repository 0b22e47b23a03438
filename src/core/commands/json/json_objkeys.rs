// src/core/commands/json/json_objkeys.rs

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, combine};
use crate::core::reply::decoders;
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonObjKeys {
    pub key: Bytes,
    pub path: String,
}

impl JsonObjKeys {
    pub fn new(key: Bytes, path: Option<&str>) -> Self {
        JsonObjKeys {
            key,
            path: helpers::path_or_root(path),
        }
    }
}

impl JsonCommandSpec for JsonObjKeys {
    /// Member names in document order; empty for a missing key.
    type Output = Vec<String>;

    fn command(&self) -> JsonCommand {
        JsonCommand::ObjKeys
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        combine([
            helpers::required(&self.key, "key", JsonCommand::ObjKeys)?,
            ArgToken::from(&self.path),
        ])
    }

    fn decode(&self, reply: RespValue) -> Result<Vec<String>, SpinelJsonError> {
        decoders::bulk_strings(reply)
    }
}
