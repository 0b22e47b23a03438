// src/core/mod.rs

//! Command building, reply decoding and the collaborator seams of the client.

pub mod commands;
pub mod errors;
pub mod executor;
pub mod protocol;
pub mod reply;
pub mod serializer;

pub use errors::SpinelJsonError;
pub use executor::{AsyncExecutor, Executor};
pub use protocol::RespValue;
