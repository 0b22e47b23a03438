// src/core/reply/mod.rs

//! Reply decoding strategies and the typed wrappers handed back to callers.

pub mod decoders;
pub mod indexed;
pub mod operation_result;
pub mod pathed;

pub use indexed::IndexedCollection;
pub use operation_result::OperationResult;
pub use pathed::PathedResult;
