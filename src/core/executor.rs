// src/core/executor.rs

//! The seam between the command layer and whatever actually talks to the server.

use crate::core::{RespValue, SpinelJsonError};
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

/// Sends one command and returns its reply, blocking the caller.
///
/// Implementations own connection handling, pipelining and retries. Whatever error
/// they return reaches the caller of the JSON operation unchanged.
pub trait Executor {
    fn execute(&self, command: &str, args: Vec<Bytes>) -> Result<RespValue, SpinelJsonError>;
}

/// The asynchronous twin of [`Executor`].
#[async_trait]
pub trait AsyncExecutor: Send + Sync {
    async fn execute(&self, command: &str, args: Vec<Bytes>)
    -> Result<RespValue, SpinelJsonError>;
}

impl<E: Executor + ?Sized> Executor for &E {
    fn execute(&self, command: &str, args: Vec<Bytes>) -> Result<RespValue, SpinelJsonError> {
        (**self).execute(command, args)
    }
}

impl<E: Executor + ?Sized> Executor for Arc<E> {
    fn execute(&self, command: &str, args: Vec<Bytes>) -> Result<RespValue, SpinelJsonError> {
        (**self).execute(command, args)
    }
}

#[async_trait]
impl<E: AsyncExecutor + ?Sized> AsyncExecutor for &E {
    async fn execute(
        &self,
        command: &str,
        args: Vec<Bytes>,
    ) -> Result<RespValue, SpinelJsonError> {
        (**self).execute(command, args).await
    }
}

#[async_trait]
impl<E: AsyncExecutor + ?Sized> AsyncExecutor for Arc<E> {
    async fn execute(
        &self,
        command: &str,
        args: Vec<Bytes>,
    ) -> Result<RespValue, SpinelJsonError> {
        (**self).execute(command, args).await
    }
}
