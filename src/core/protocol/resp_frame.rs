// src/core/protocol/resp_frame.rs

//! Implements the RESP frame structure and the `Encoder`/`Decoder` pair the TCP
//! executor uses to talk to the server.

use crate::core::SpinelJsonError;
use bytes::{Buf, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

const CRLF: &[u8] = b"\r\n";
const CRLF_LEN: usize = 2;

// Protocol-level limits applied to server replies.
const MAX_FRAME_ELEMENTS: usize = 1_024 * 1_024;
const MAX_BULK_STRING_SIZE: usize = 512 * 1024 * 1024;
const MAX_RECURSION_DEPTH: usize = 256;
// Array headers are untrusted until the elements arrive, so capacity grows past this on push.
const MAX_PREALLOCATED_ELEMENTS: usize = 1_024;

/// A single frame in the RESP protocol.
#[derive(Debug, Clone, PartialEq)]
pub enum RespFrame {
    SimpleString(String),
    Error(String),
    Integer(i64),
    BulkString(Bytes),
    Null,
    NullArray,
    Array(Vec<RespFrame>),
}

impl RespFrame {
    /// Builds a request frame: an array of bulk strings, command name first.
    pub fn command(name: &str, args: Vec<Bytes>) -> Self {
        let mut parts = Vec::with_capacity(args.len() + 1);
        parts.push(RespFrame::BulkString(Bytes::copy_from_slice(name.as_bytes())));
        parts.extend(args.into_iter().map(RespFrame::BulkString));
        RespFrame::Array(parts)
    }

    /// Encodes the frame into a standalone byte vector.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, SpinelJsonError> {
        let mut buf = BytesMut::new();
        RespFrameCodec.encode(self.clone(), &mut buf)?;
        Ok(buf.to_vec())
    }
}

/// A `tokio_util::codec` implementation for encoding and decoding `RespFrame`s.
#[derive(Debug, Default, Clone, Copy)]
pub struct RespFrameCodec;

impl Encoder<RespFrame> for RespFrameCodec {
    type Error = SpinelJsonError;

    fn encode(&mut self, item: RespFrame, dst: &mut BytesMut) -> Result<(), Self::Error> {
        match item {
            RespFrame::SimpleString(s) => {
                dst.extend_from_slice(b"+");
                dst.extend_from_slice(s.as_bytes());
                dst.extend_from_slice(CRLF);
            }
            RespFrame::Error(s) => {
                dst.extend_from_slice(b"-");
                dst.extend_from_slice(s.as_bytes());
                dst.extend_from_slice(CRLF);
            }
            RespFrame::Integer(i) => {
                dst.extend_from_slice(b":");
                dst.extend_from_slice(itoa::Buffer::new().format(i).as_bytes());
                dst.extend_from_slice(CRLF);
            }
            RespFrame::BulkString(b) => {
                dst.extend_from_slice(b"$");
                dst.extend_from_slice(itoa::Buffer::new().format(b.len()).as_bytes());
                dst.extend_from_slice(CRLF);
                dst.extend_from_slice(&b);
                dst.extend_from_slice(CRLF);
            }
            RespFrame::Null => dst.extend_from_slice(b"$-1\r\n"),
            RespFrame::NullArray => dst.extend_from_slice(b"*-1\r\n"),
            RespFrame::Array(arr) => {
                dst.extend_from_slice(b"*");
                dst.extend_from_slice(itoa::Buffer::new().format(arr.len()).as_bytes());
                dst.extend_from_slice(CRLF);
                for frame in arr {
                    self.encode(frame, dst)?;
                }
            }
        }
        Ok(())
    }
}

impl Decoder for RespFrameCodec {
    type Item = RespFrame;
    type Error = SpinelJsonError;

    /// Decodes one frame, or returns `Ok(None)` when the buffer holds only part of it.
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }

        let mut bytes = &src[..];
        match decode_frame(&mut bytes, 0) {
            Ok(frame) => {
                let consumed = src.len() - bytes.len();
                src.advance(consumed);
                Ok(Some(frame))
            }
            Err(SpinelJsonError::IncompleteData) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

fn decode_frame(bytes: &mut &[u8], depth: usize) -> Result<RespFrame, SpinelJsonError> {
    if depth > MAX_RECURSION_DEPTH {
        return Err(SpinelJsonError::Protocol(
            "reply nesting exceeds the recursion limit".to_string(),
        ));
    }
    let Some(&prefix) = bytes.first() else {
        return Err(SpinelJsonError::IncompleteData);
    };
    *bytes = &bytes[1..];

    match prefix {
        b'+' => Ok(RespFrame::SimpleString(read_text_line(bytes)?)),
        b'-' => Ok(RespFrame::Error(read_text_line(bytes)?)),
        b':' => Ok(RespFrame::Integer(read_length(bytes)?)),
        b'$' => {
            let len = read_length(bytes)?;
            if len == -1 {
                return Ok(RespFrame::Null);
            }
            let len = checked_len(len, MAX_BULK_STRING_SIZE, "bulk string")?;
            if bytes.len() < len + CRLF_LEN {
                return Err(SpinelJsonError::IncompleteData);
            }
            if &bytes[len..len + CRLF_LEN] != CRLF {
                return Err(SpinelJsonError::Protocol(
                    "bulk string is not terminated by CRLF".to_string(),
                ));
            }
            let data = Bytes::copy_from_slice(&bytes[..len]);
            *bytes = &bytes[len + CRLF_LEN..];
            Ok(RespFrame::BulkString(data))
        }
        b'*' => {
            let len = read_length(bytes)?;
            if len == -1 {
                return Ok(RespFrame::NullArray);
            }
            let len = checked_len(len, MAX_FRAME_ELEMENTS, "array")?;
            let mut frames = Vec::with_capacity(len.min(MAX_PREALLOCATED_ELEMENTS));
            for _ in 0..len {
                frames.push(decode_frame(bytes, depth + 1)?);
            }
            Ok(RespFrame::Array(frames))
        }
        other => Err(SpinelJsonError::Protocol(format!(
            "unknown frame prefix byte 0x{other:02x}"
        ))),
    }
}

/// Splits off the next CRLF-terminated line and advances past it.
fn read_line<'a>(bytes: &mut &'a [u8]) -> Result<&'a [u8], SpinelJsonError> {
    let pos = bytes
        .windows(CRLF_LEN)
        .position(|window| window == CRLF)
        .ok_or(SpinelJsonError::IncompleteData)?;
    let line = &bytes[..pos];
    *bytes = &bytes[pos + CRLF_LEN..];
    Ok(line)
}

fn read_text_line(bytes: &mut &[u8]) -> Result<String, SpinelJsonError> {
    Ok(String::from_utf8_lossy(read_line(bytes)?).into_owned())
}

fn read_length(bytes: &mut &[u8]) -> Result<i64, SpinelJsonError> {
    let line = read_line(bytes)?;
    std::str::from_utf8(line)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| {
            SpinelJsonError::Protocol(format!(
                "invalid integer line '{}'",
                String::from_utf8_lossy(line)
            ))
        })
}

fn checked_len(len: i64, max: usize, what: &str) -> Result<usize, SpinelJsonError> {
    usize::try_from(len)
        .ok()
        .filter(|len| *len <= max)
        .ok_or_else(|| SpinelJsonError::Protocol(format!("invalid {what} length {len}")))
}
