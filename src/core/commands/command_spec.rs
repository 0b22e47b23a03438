// src/core/commands/command_spec.rs

//! Defines the `JsonCommandSpec` trait implemented by every `JSON.*` command.

use crate::core::commands::command_name::JsonCommand;
use crate::core::{RespValue, SpinelJsonError};
use bytes::Bytes;

/// Describes one invocation of a remote JSON command: which wire command it is, the
/// exact positional arguments to send, and how to read the reply.
///
/// Implementations are plain data. Building arguments and decoding replies never
/// touch the network, so both can be tested without an executor.
pub trait JsonCommandSpec {
    /// What the decoded reply turns into.
    type Output;

    fn command(&self) -> JsonCommand;

    /// The ordered argument list, without the command name. Never contains an
    /// empty token.
    fn to_resp_args(&self) -> Result<Vec<Bytes>, SpinelJsonError>;

    fn decode(&self, reply: RespValue) -> Result<Self::Output, SpinelJsonError>;
}
