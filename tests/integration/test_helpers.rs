// tests/integration/test_helpers.rs

//! Test helpers and utilities for integration tests

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use spineljson::core::{AsyncExecutor, Executor, RespValue, SpinelJsonError};
use spineljson::{AsyncJsonClient, JsonClient, SerdeJsonSerializer};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Installs a quiet subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("warn"))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

pub fn bulk(s: &str) -> RespValue {
    RespValue::BulkString(Bytes::copy_from_slice(s.as_bytes()))
}

/// Records every call (command name first) and answers from a queue of canned replies.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<Vec<String>>>,
    replies: Mutex<VecDeque<Result<RespValue, SpinelJsonError>>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        init_tracing();
        Self::default()
    }

    pub fn replying(reply: RespValue) -> Self {
        let executor = Self::new();
        executor.push_reply(reply);
        executor
    }

    pub fn push_reply(&self, reply: RespValue) {
        self.replies.lock().unwrap().push_back(Ok(reply));
    }

    pub fn push_error(&self, err: SpinelJsonError) {
        self.replies.lock().unwrap().push_back(Err(err));
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Vec<String> {
        self.calls().pop().expect("no command was executed")
    }

    fn record(&self, command: &str, args: Vec<Bytes>) -> Result<RespValue, SpinelJsonError> {
        let mut call = vec![command.to_string()];
        call.extend(
            args.iter()
                .map(|a| String::from_utf8(a.to_vec()).expect("argument is not UTF-8")),
        );
        self.calls.lock().unwrap().push(call);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(SpinelJsonError::Protocol("no reply queued".to_string())))
    }
}

impl Executor for RecordingExecutor {
    fn execute(&self, command: &str, args: Vec<Bytes>) -> Result<RespValue, SpinelJsonError> {
        self.record(command, args)
    }
}

#[async_trait]
impl AsyncExecutor for RecordingExecutor {
    async fn execute(
        &self,
        command: &str,
        args: Vec<Bytes>,
    ) -> Result<RespValue, SpinelJsonError> {
        self.record(command, args)
    }
}

/// A client over a recording executor, with an explicit serializer.
pub fn recording_client(executor: &RecordingExecutor) -> JsonClient<&RecordingExecutor> {
    JsonClient::with_serializer(executor, Arc::new(SerdeJsonSerializer))
}

pub fn async_recording_client(
    executor: &RecordingExecutor,
) -> AsyncJsonClient<&RecordingExecutor> {
    AsyncJsonClient::with_serializer(executor, Arc::new(SerdeJsonSerializer))
}

/// A tiny stand-in for the remote document store. It understands enough of
/// `JSON.SET`, `JSON.GET`, `JSON.DEL` and `JSON.ARRAPPEND` (dotted object paths
/// only) to run end-to-end scenarios.
#[derive(Debug, Default)]
pub struct InMemoryJsonStore {
    docs: Mutex<HashMap<String, Value>>,
}

fn segments(path: &str) -> Vec<&str> {
    path.split('.').filter(|s| !s.is_empty()).collect()
}

fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    segments(path)
        .into_iter()
        .try_fold(root, |node, segment| node.get(segment))
}

fn lookup_mut<'a>(root: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    segments(path)
        .into_iter()
        .try_fold(root, |node, segment| node.get_mut(segment))
}

impl InMemoryJsonStore {
    pub fn new() -> Self {
        init_tracing();
        Self::default()
    }

    fn handle(&self, command: &str, args: Vec<Bytes>) -> Result<RespValue, SpinelJsonError> {
        let args: Vec<String> = args
            .iter()
            .map(|a| String::from_utf8_lossy(a).into_owned())
            .collect();
        let mut docs = self.docs.lock().unwrap();
        let parse = |raw: &str| -> Result<Value, SpinelJsonError> {
            serde_json::from_str(raw).map_err(|e| SpinelJsonError::Server(format!("ERR {e}")))
        };

        match command {
            "JSON.SET" => {
                let (key, path, value) = (&args[0], &args[1], parse(&args[2])?);
                let nx = args.get(3).is_some_and(|a| a == "NX");
                if segments(path).is_empty() {
                    if nx && docs.contains_key(key) {
                        return Ok(RespValue::Null);
                    }
                    docs.insert(key.clone(), value);
                    return Ok(RespValue::SimpleString("OK".into()));
                }
                let mut parts = segments(path);
                let last = parts.pop().unwrap_or_default().to_string();
                let root = docs
                    .get_mut(key)
                    .ok_or_else(|| SpinelJsonError::Server("ERR new objects must be created at the root".into()))?;
                let parent = lookup_mut(root, &parts.join("."))
                    .and_then(Value::as_object_mut)
                    .ok_or_else(|| SpinelJsonError::Server("ERR missing parent".into()))?;
                parent.insert(last, value);
                Ok(RespValue::SimpleString("OK".into()))
            }
            "JSON.GET" => {
                let path = args.last().map(String::as_str).unwrap_or(".");
                let found = docs.get(&args[0]).and_then(|root| lookup(root, path));
                Ok(match found {
                    Some(v) => bulk(&v.to_string()),
                    None => RespValue::Null,
                })
            }
            "JSON.DEL" | "JSON.FORGET" => {
                if segments(&args[1]).is_empty() {
                    let removed = docs.remove(&args[0]).is_some();
                    return Ok(RespValue::Integer(removed as i64));
                }
                Err(SpinelJsonError::Server("ERR only root deletes are supported".into()))
            }
            "JSON.ARRAPPEND" => {
                let values = args[2..].iter().map(|a| parse(a)).collect::<Result<Vec<_>, _>>()?;
                let target = docs
                    .get_mut(&args[0])
                    .and_then(|root| lookup_mut(root, &args[1]))
                    .and_then(Value::as_array_mut)
                    .ok_or_else(|| SpinelJsonError::Server("ERR not an array".into()))?;
                target.extend(values);
                Ok(RespValue::Integer(target.len() as i64))
            }
            other => Ok(RespValue::Error(format!("ERR unknown command '{other}'"))),
        }
    }
}

impl Executor for InMemoryJsonStore {
    fn execute(&self, command: &str, args: Vec<Bytes>) -> Result<RespValue, SpinelJsonError> {
        self.handle(command, args)
    }
}

#[async_trait]
impl AsyncExecutor for InMemoryJsonStore {
    async fn execute(
        &self,
        command: &str,
        args: Vec<Bytes>,
    ) -> Result<RespValue, SpinelJsonError> {
        self.handle(command, args)
    }
}
