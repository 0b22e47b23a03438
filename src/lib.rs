// src/lib.rs

pub mod client;
pub mod config;
pub mod core;

// Re-export
pub use crate::client::{AsyncJsonClient, JsonClient, TcpExecutor};
pub use crate::core::commands::json::{GetOptions, SetCondition, SetOptions};
pub use crate::core::commands::{JsonCommand, Numeric};
pub use crate::core::reply::{IndexedCollection, OperationResult, PathedResult};
pub use crate::core::serializer::{JsonSerializer, SerdeJsonSerializer, set_serializer};
pub use crate::core::{AsyncExecutor, Executor, RespValue, SpinelJsonError};
