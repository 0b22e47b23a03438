// src/core/commands/helpers.rs

//! Builds positional wire arguments from typed inputs.
//!
//! Every command assembles its arguments as a sequence of [`ArgToken`]s and hands
//! them to [`combine`], which flattens them into the final token list. Omitted
//! values and empty strings never reach the wire.

use crate::core::SpinelJsonError;
use crate::core::commands::command_name::JsonCommand;
use bytes::Bytes;

/// The document root. Used whenever a caller gives no path or an empty one.
pub const ROOT_PATH: &str = ".";

/// One input to [`combine`].
#[derive(Debug, Clone, PartialEq)]
pub enum ArgToken {
    Bulk(Bytes),
    Int(i64),
    Float(f64),
    Many(Vec<Bytes>),
    Omitted,
}

/// A numeric operand, kept distinct so integers are never printed with a fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

impl From<i64> for Numeric {
    fn from(v: i64) -> Self {
        Numeric::Int(v)
    }
}

impl From<i32> for Numeric {
    fn from(v: i32) -> Self {
        Numeric::Int(v.into())
    }
}

impl From<u32> for Numeric {
    fn from(v: u32) -> Self {
        Numeric::Int(v.into())
    }
}

impl From<f64> for Numeric {
    fn from(v: f64) -> Self {
        Numeric::Float(v)
    }
}

impl From<f32> for Numeric {
    fn from(v: f32) -> Self {
        Numeric::Float(v.into())
    }
}

impl From<Numeric> for ArgToken {
    fn from(n: Numeric) -> Self {
        match n {
            Numeric::Int(i) => ArgToken::Int(i),
            Numeric::Float(f) => ArgToken::Float(f),
        }
    }
}

impl From<&str> for ArgToken {
    fn from(s: &str) -> Self {
        ArgToken::Bulk(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for ArgToken {
    fn from(s: String) -> Self {
        ArgToken::Bulk(s.into())
    }
}

impl From<&String> for ArgToken {
    fn from(s: &String) -> Self {
        s.as_str().into()
    }
}

impl From<Bytes> for ArgToken {
    fn from(b: Bytes) -> Self {
        ArgToken::Bulk(b)
    }
}

impl From<&Bytes> for ArgToken {
    fn from(b: &Bytes) -> Self {
        ArgToken::Bulk(b.clone())
    }
}

impl From<i64> for ArgToken {
    fn from(i: i64) -> Self {
        ArgToken::Int(i)
    }
}

impl From<f64> for ArgToken {
    fn from(f: f64) -> Self {
        ArgToken::Float(f)
    }
}

impl From<bool> for ArgToken {
    fn from(b: bool) -> Self {
        ArgToken::Bulk(Bytes::from_static(if b { b"true" } else { b"false" }))
    }
}

impl From<Vec<Bytes>> for ArgToken {
    fn from(items: Vec<Bytes>) -> Self {
        ArgToken::Many(items)
    }
}

impl From<&[Bytes]> for ArgToken {
    fn from(items: &[Bytes]) -> Self {
        ArgToken::Many(items.to_vec())
    }
}

impl From<Vec<String>> for ArgToken {
    fn from(items: Vec<String>) -> Self {
        ArgToken::Many(items.into_iter().map(Bytes::from).collect())
    }
}

impl From<&[String]> for ArgToken {
    fn from(items: &[String]) -> Self {
        ArgToken::Many(
            items
                .iter()
                .map(|s| Bytes::copy_from_slice(s.as_bytes()))
                .collect(),
        )
    }
}

impl<T: Into<ArgToken>> From<Option<T>> for ArgToken {
    fn from(value: Option<T>) -> Self {
        value.map_or(ArgToken::Omitted, Into::into)
    }
}

/// Flattens tokens into the ordered list of wire arguments.
///
/// Arrays expand in place, omitted and zero-length tokens are dropped, and order is
/// otherwise preserved. Non-finite floats have no wire form and are rejected.
pub fn combine<I>(tokens: I) -> Result<Vec<Bytes>, SpinelJsonError>
where
    I: IntoIterator<Item = ArgToken>,
{
    let tokens = tokens.into_iter();
    let mut args = Vec::with_capacity(tokens.size_hint().0);
    for token in tokens {
        match token {
            ArgToken::Bulk(b) => push_non_empty(&mut args, b),
            ArgToken::Int(i) => args.push(format_int(i)),
            ArgToken::Float(f) => args.push(format_float(f)?),
            ArgToken::Many(items) => {
                for item in items {
                    push_non_empty(&mut args, item);
                }
            }
            ArgToken::Omitted => {}
        }
    }
    Ok(args)
}

fn push_non_empty(args: &mut Vec<Bytes>, token: Bytes) {
    if !token.is_empty() {
        args.push(token);
    }
}

fn format_int(i: i64) -> Bytes {
    Bytes::copy_from_slice(itoa::Buffer::new().format(i).as_bytes())
}

fn format_float(f: f64) -> Result<Bytes, SpinelJsonError> {
    if !f.is_finite() {
        return Err(SpinelJsonError::InvalidArgument(format!(
            "{f} cannot be sent as a JSON number"
        )));
    }
    Ok(Bytes::copy_from_slice(ryu::Buffer::new().format_finite(f).as_bytes()))
}

/// Resolves an optional path to a concrete one, defaulting to the root.
pub fn path_or_root(path: Option<&str>) -> String {
    match path {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => ROOT_PATH.to_string(),
    }
}

/// A positional token that must be present: a key or a JSON payload. Passing an
/// empty one would shift every later argument, so it is rejected up front.
pub fn required(
    token: &Bytes,
    what: &str,
    command: JsonCommand,
) -> Result<ArgToken, SpinelJsonError> {
    if token.is_empty() {
        return Err(SpinelJsonError::InvalidArgument(format!(
            "{command} requires a non-empty {what}"
        )));
    }
    Ok(ArgToken::Bulk(token.clone()))
}

/// [`required`] for textual positionals such as an index field or a query.
pub fn required_text(
    text: &str,
    what: &str,
    command: JsonCommand,
) -> Result<ArgToken, SpinelJsonError> {
    if text.is_empty() {
        return Err(SpinelJsonError::InvalidArgument(format!(
            "{command} requires a non-empty {what}"
        )));
    }
    Ok(ArgToken::from(text))
}

/// Copies a caller-supplied key into an owned wire token.
pub fn key_bytes(key: impl AsRef<[u8]>) -> Bytes {
    Bytes::copy_from_slice(key.as_ref())
}
