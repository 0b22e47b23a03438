// src/core/commands/json/json_mget.rs

//! Implements the `JSON.MGET` command for retrieving a path from multiple JSON documents.

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, combine};
use crate::core::reply::decoders;
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonMGet {
    pub keys: Vec<Bytes>,
    pub path: String,
}

impl JsonMGet {
    pub fn new(keys: Vec<Bytes>, path: Option<&str>) -> Self {
        JsonMGet {
            keys,
            path: helpers::path_or_root(path),
        }
    }
}

impl JsonCommandSpec for JsonMGet {
    /// One reply per key, in key order. Missing keys are null.
    type Output = Vec<RespValue>;

    fn command(&self) -> JsonCommand {
        JsonCommand::MGet
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        if self.keys.is_empty() {
            return Err(SpinelJsonError::InvalidArgument(
                "JSON.MGET requires at least one key".to_string(),
            ));
        }
        let mut tokens = self
            .keys
            .iter()
            .map(|key| helpers::required(key, "key", JsonCommand::MGet))
            .collect::<Result<Vec<_>, _>>()?;
        tokens.push(ArgToken::from(&self.path));
        combine(tokens)
    }

    fn decode(&self, reply: RespValue) -> Result<Vec<RespValue>, SpinelJsonError> {
        decoders::array(reply)
    }
}
