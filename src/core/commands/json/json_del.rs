// src/core/commands/json/json_del.rs

//! Implements `JSON.DEL` and its alias `JSON.FORGET`.

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, combine};
use crate::core::reply::decoders;
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonDel {
    pub key: Bytes,
    pub path: String,
    /// Send as `JSON.FORGET` instead of `JSON.DEL`.
    pub forget: bool,
}

impl JsonDel {
    pub fn new(key: Bytes, path: Option<&str>) -> Self {
        JsonDel {
            key,
            path: helpers::path_or_root(path),
            forget: false,
        }
    }

    pub fn forget(key: Bytes, path: Option<&str>) -> Self {
        JsonDel {
            forget: true,
            ..Self::new(key, path)
        }
    }
}

impl JsonCommandSpec for JsonDel {
    /// Number of values deleted.
    type Output = i64;

    fn command(&self) -> JsonCommand {
        if self.forget {
            JsonCommand::Forget
        } else {
            JsonCommand::Del
        }
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        combine([
            helpers::required(&self.key, "key", self.command())?,
            ArgToken::from(&self.path),
        ])
    }

    fn decode(&self, reply: RespValue) -> Result<i64, SpinelJsonError> {
        decoders::integer(reply)
    }
}
