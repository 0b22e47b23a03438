// src/core/commands/json/json_qget.rs

//! Implements `JSON.QGET`, a query against a named index.

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, combine};
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct JsonQGet {
    pub index: Bytes,
    pub query: String,
    pub path: String,
}

impl JsonQGet {
    pub fn new(index: Bytes, query: &str, path: Option<&str>) -> Self {
        JsonQGet {
            index,
            query: query.to_string(),
            path: helpers::path_or_root(path),
        }
    }
}

impl JsonCommandSpec for JsonQGet {
    /// A JSON object mapping matched document keys to their values at `path`.
    type Output = RespValue;

    fn command(&self) -> JsonCommand {
        JsonCommand::QGet
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        combine([
            helpers::required(&self.index, "index name", JsonCommand::QGet)?,
            helpers::required_text(&self.query, "query", JsonCommand::QGet)?,
            ArgToken::from(&self.path),
        ])
    }

    fn decode(&self, reply: RespValue) -> Result<RespValue, SpinelJsonError> {
        Ok(reply)
    }
}
