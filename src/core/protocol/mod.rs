// src/core/protocol/mod.rs

pub mod resp_frame;
pub mod resp_value;
pub use resp_frame::{RespFrame, RespFrameCodec};
pub use resp_value::{ReplyKind, RespValue};
