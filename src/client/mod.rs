// src/client/mod.rs

//! The operation facade: one method per JSON operation, over a blocking or an
//! asynchronous executor.

mod async_client;
mod requests;
mod sync_client;
mod tcp;

pub use async_client::AsyncJsonClient;
pub use sync_client::JsonClient;
pub use tcp::TcpExecutor;

use crate::core::serializer::{self, JsonSerializer};
use crate::core::{RespValue, SpinelJsonError};
use std::sync::Arc;

/// Where a client gets its serializer from.
#[derive(Debug, Clone, Default)]
enum SerializerSource {
    /// Read the process-wide slot at call time.
    #[default]
    Global,
    Explicit(Arc<dyn JsonSerializer>),
}

impl SerializerSource {
    fn resolve(&self) -> Result<Arc<dyn JsonSerializer>, SpinelJsonError> {
        match self {
            SerializerSource::Global => serializer::serializer(),
            SerializerSource::Explicit(s) => Ok(Arc::clone(s)),
        }
    }
}

/// Error replies arrive as values from some executors; surface them as server errors.
fn reject_error_reply(reply: RespValue) -> Result<RespValue, SpinelJsonError> {
    match reply {
        RespValue::Error(message) => Err(SpinelJsonError::Server(message)),
        other => Ok(other),
    }
}
