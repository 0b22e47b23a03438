// src/core/commands/json/json_set.rs

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, combine};
use crate::core::reply::{OperationResult, decoders};
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetCondition {
    #[default]
    Always,
    IfExists,    // XX
    IfNotExists, // NX
}

impl SetCondition {
    fn to_token(self) -> ArgToken {
        match self {
            SetCondition::Always => ArgToken::Omitted,
            SetCondition::IfExists => ArgToken::from("XX"),
            SetCondition::IfNotExists => ArgToken::from("NX"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetOptions {
    pub condition: SetCondition,
    /// Index the stored document under this name (`INDEX <name>`).
    pub index: Option<String>,
}

impl SetOptions {
    pub fn if_not_exists() -> Self {
        SetOptions {
            condition: SetCondition::IfNotExists,
            ..Default::default()
        }
    }

    pub fn if_exists() -> Self {
        SetOptions {
            condition: SetCondition::IfExists,
            ..Default::default()
        }
    }

    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }
}

/// `JSON.SET <key> <path> <json> [NX|XX] [INDEX <name>]`
///
/// New keys may only be created at the root; the server rejects anything else.
#[derive(Debug, Clone, Default)]
pub struct JsonSet {
    pub key: Bytes,
    pub path: String,
    pub value_json_str: Bytes,
    pub options: SetOptions,
}

impl JsonSet {
    pub fn new(key: Bytes, path: Option<&str>, value_json_str: Bytes, options: SetOptions) -> Self {
        JsonSet {
            key,
            path: helpers::path_or_root(path),
            value_json_str,
            options,
        }
    }
}

impl JsonCommandSpec for JsonSet {
    type Output = OperationResult;

    fn command(&self) -> JsonCommand {
        JsonCommand::Set
    }

    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        let index = self.options.index.as_deref().filter(|name| !name.is_empty());
        combine([
            helpers::required(&self.key, "key", JsonCommand::Set)?,
            ArgToken::from(&self.path),
            helpers::required(&self.value_json_str, "JSON value", JsonCommand::Set)?,
            self.options.condition.to_token(),
            ArgToken::from(index.map(|_| "INDEX")),
            ArgToken::from(index),
        ])
    }

    fn decode(&self, reply: RespValue) -> Result<OperationResult, SpinelJsonError> {
        decoders::operation_result(reply)
    }
}
