// src/core/errors.rs

//! Defines the primary error type for the client bindings.

use std::sync::Arc;
use thiserror::Error;

/// The main error enum, representing every failure a JSON command call can surface.
///
/// The first group is raised by this crate itself (configuration, arguments, reply
/// decoding). The transport group is produced by executors and is passed through the
/// operation layer untouched.
#[derive(Error, Debug)]
pub enum SpinelJsonError {
    /// The process-wide serializer was read before it was configured.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An argument could not be turned into a wire token.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The reply shape does not match what the operation decodes.
    #[error("Unexpected reply: {0}")]
    UnexpectedReply(String),

    /// A single value was requested from a path that matched several.
    #[error("Path matched {0} values where exactly one was expected")]
    AmbiguousPath(usize),

    /// A single value was requested from a path that matched nothing.
    #[error("Path matched no values")]
    EmptyResult,

    #[error("Serialization error: {0}")]
    Serialization(String),

    // --- Transport errors ---
    #[error("IO Error: {0}")]
    Io(Arc<std::io::Error>),

    #[error("Incomplete data in stream")]
    IncompleteData,

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Connection closed by peer")]
    ConnectionClosed,

    /// An error reply sent by the server (e.g. `-ERR ...`).
    #[error("{0}")]
    Server(String),
}

// Manual implementation of Clone because `std::io::Error` is not cloneable.
impl Clone for SpinelJsonError {
    fn clone(&self) -> Self {
        match self {
            SpinelJsonError::Configuration(s) => SpinelJsonError::Configuration(s.clone()),
            SpinelJsonError::InvalidArgument(s) => SpinelJsonError::InvalidArgument(s.clone()),
            SpinelJsonError::UnexpectedReply(s) => SpinelJsonError::UnexpectedReply(s.clone()),
            SpinelJsonError::AmbiguousPath(n) => SpinelJsonError::AmbiguousPath(*n),
            SpinelJsonError::EmptyResult => SpinelJsonError::EmptyResult,
            SpinelJsonError::Serialization(s) => SpinelJsonError::Serialization(s.clone()),
            SpinelJsonError::Io(e) => SpinelJsonError::Io(Arc::clone(e)),
            SpinelJsonError::IncompleteData => SpinelJsonError::IncompleteData,
            SpinelJsonError::Protocol(s) => SpinelJsonError::Protocol(s.clone()),
            SpinelJsonError::Timeout(s) => SpinelJsonError::Timeout(s.clone()),
            SpinelJsonError::ConnectionClosed => SpinelJsonError::ConnectionClosed,
            SpinelJsonError::Server(s) => SpinelJsonError::Server(s.clone()),
        }
    }
}

impl PartialEq for SpinelJsonError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SpinelJsonError::Io(e1), SpinelJsonError::Io(e2)) => e1.to_string() == e2.to_string(),
            (SpinelJsonError::Configuration(s1), SpinelJsonError::Configuration(s2)) => s1 == s2,
            (SpinelJsonError::InvalidArgument(s1), SpinelJsonError::InvalidArgument(s2)) => {
                s1 == s2
            }
            (SpinelJsonError::UnexpectedReply(s1), SpinelJsonError::UnexpectedReply(s2)) => {
                s1 == s2
            }
            (SpinelJsonError::AmbiguousPath(n1), SpinelJsonError::AmbiguousPath(n2)) => n1 == n2,
            (SpinelJsonError::Serialization(s1), SpinelJsonError::Serialization(s2)) => s1 == s2,
            (SpinelJsonError::Protocol(s1), SpinelJsonError::Protocol(s2)) => s1 == s2,
            (SpinelJsonError::Timeout(s1), SpinelJsonError::Timeout(s2)) => s1 == s2,
            (SpinelJsonError::Server(s1), SpinelJsonError::Server(s2)) => s1 == s2,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl SpinelJsonError {
    /// Returns true for errors raised by the executor rather than by this crate.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SpinelJsonError::Io(_)
                | SpinelJsonError::IncompleteData
                | SpinelJsonError::Protocol(_)
                | SpinelJsonError::Timeout(_)
                | SpinelJsonError::ConnectionClosed
                | SpinelJsonError::Server(_)
        )
    }
}

// --- From trait implementations for easy error conversion ---

impl From<std::io::Error> for SpinelJsonError {
    fn from(e: std::io::Error) -> Self {
        SpinelJsonError::Io(Arc::new(e))
    }
}

impl From<serde_json::Error> for SpinelJsonError {
    fn from(e: serde_json::Error) -> Self {
        SpinelJsonError::Serialization(e.to_string())
    }
}

impl From<std::str::Utf8Error> for SpinelJsonError {
    fn from(e: std::str::Utf8Error) -> Self {
        SpinelJsonError::UnexpectedReply(format!("reply is not valid UTF-8: {e}"))
    }
}

impl From<std::string::FromUtf8Error> for SpinelJsonError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        SpinelJsonError::UnexpectedReply(format!("reply is not valid UTF-8: {e}"))
    }
}
