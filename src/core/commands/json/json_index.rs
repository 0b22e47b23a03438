// src/core/commands/json/json_index.rs

//! Implements the `JSON.INDEX ADD|DEL` subcommands.

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, combine};
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSubcommand {
    /// `ADD <index> <field> <path>`
    Add { field: String, path: String },
    /// `DEL <index> <field>`
    Del { field: String },
}

#[derive(Debug, Clone)]
pub struct JsonIndex {
    pub index: Bytes,
    pub subcommand: IndexSubcommand,
}

impl JsonIndex {
    pub fn add(index: Bytes, field: &str, path: Option<&str>) -> Self {
        JsonIndex {
            index,
            subcommand: IndexSubcommand::Add {
                field: field.to_string(),
                path: helpers::path_or_root(path),
            },
        }
    }

    pub fn delete(index: Bytes, field: &str) -> Self {
        JsonIndex {
            index,
            subcommand: IndexSubcommand::Del {
                field: field.to_string(),
            },
        }
    }
}

impl JsonCommandSpec for JsonIndex {
    type Output = RespValue;

    fn command(&self) -> JsonCommand {
        JsonCommand::Index
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        let index = helpers::required(&self.index, "index name", JsonCommand::Index)?;
        match &self.subcommand {
            IndexSubcommand::Add { field, path } => combine([
                ArgToken::from("ADD"),
                index,
                helpers::required_text(field, "field", JsonCommand::Index)?,
                ArgToken::from(path),
            ]),
            IndexSubcommand::Del { field } => combine([
                ArgToken::from("DEL"),
                index,
                helpers::required_text(field, "field", JsonCommand::Index)?,
            ]),
        }
    }

    fn decode(&self, reply: RespValue) -> Result<RespValue, SpinelJsonError> {
        Ok(reply)
    }
}
