// src/core/commands/mod.rs

//! The `JSON.*` command set: wire names, argument building, and one module per
//! remote command.

pub mod command_name;
pub mod command_spec;
pub mod helpers;
pub mod json;

pub use command_name::JsonCommand;
pub use command_spec::JsonCommandSpec;
pub use helpers::{ArgToken, Numeric, ROOT_PATH};
