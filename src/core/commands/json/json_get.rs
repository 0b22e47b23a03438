// src/core/commands/json/json_get.rs

//! Implements the `JSON.GET` command for retrieving values from a JSON document.

use crate::core::commands::command_name::JsonCommand;
use crate::core::commands::command_spec::JsonCommandSpec;
use crate::core::commands::helpers::{self, ArgToken, ROOT_PATH, combine};
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

/// Formatting options understood by `JSON.GET`. Unset or empty values are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOptions {
    /// Send `NOESCAPE`.
    pub no_escape: bool,
    /// Indentation string for nested levels (`INDENT`).
    pub indent: Option<String>,
    /// String printed at the end of each line (`NEWLINE`).
    pub newline: Option<String>,
    /// String placed between a key and its value (`SPACE`).
    pub space: Option<String>,
}

impl GetOptions {
    fn to_tokens(&self) -> Vec<ArgToken> {
        let mut tokens = Vec::with_capacity(7);
        if self.no_escape {
            tokens.push(ArgToken::from("NOESCAPE"));
        }
        for (flag, value) in [
            ("INDENT", &self.indent),
            ("NEWLINE", &self.newline),
            ("SPACE", &self.space),
        ] {
            // The flag is only meaningful with a value after it.
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                tokens.push(ArgToken::from(flag));
                tokens.push(ArgToken::from(v));
            }
        }
        tokens
    }
}

/// Represents the `JSON.GET` command.
#[derive(Debug, Clone, Default)]
pub struct JsonGet {
    /// The key of the JSON document.
    pub key: Bytes,
    pub options: GetOptions,
    /// One or more paths to read. Never empty once constructed.
    pub paths: Vec<String>,
}

impl JsonGet {
    /// Builds the command. With no paths, the document root is read; empty paths
    /// are read as the root too.
    pub fn new(key: Bytes, options: GetOptions, paths: &[&str]) -> Self {
        let paths = if paths.is_empty() {
            vec![ROOT_PATH.to_string()]
        } else {
            paths.iter().map(|p| helpers::path_or_root(Some(p))).collect()
        };
        JsonGet {
            key,
            options,
            paths,
        }
    }
}

impl JsonCommandSpec for JsonGet {
    type Output = RespValue;

    fn command(&self) -> JsonCommand {
        JsonCommand::Get
    }

    /// `JSON.GET <key> [NOESCAPE] [INDENT i] [NEWLINE n] [SPACE s] <path...>`
    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError> {
        let mut tokens = vec![helpers::required(&self.key, "key", JsonCommand::Get)?];
        tokens.extend(self.options.to_tokens());
        tokens.push(ArgToken::from(self.paths.as_slice()));
        combine(tokens)
    }

    fn decode(&self, reply: RespValue) -> Result<RespValue, SpinelJsonError> {
        Ok(reply)
    }
}
