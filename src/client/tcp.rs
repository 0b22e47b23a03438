// src/client/tcp.rs

//! A minimal executor over a single TCP connection.

use crate::config::ClientConfig;
use crate::core::protocol::{RespFrame, RespFrameCodec};
use crate::core::{AsyncExecutor, RespValue, SpinelJsonError};
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, info, warn};

/// One connection, one command in flight at a time. There is no pooling,
/// reconnection or retry: a failed call leaves recovery to the caller.
///
/// A call that fails after its command may have reached the socket (a timeout,
/// an I/O error, a malformed reply) leaves the stream out of step with the
/// server, so the connection is marked broken and every later call fails with
/// [`SpinelJsonError::ConnectionClosed`].
#[derive(Debug)]
pub struct TcpExecutor {
    conn: Mutex<Connection>,
    read_timeout: Duration,
    write_timeout: Duration,
}

#[derive(Debug)]
struct Connection {
    stream: TcpStream,
    codec: RespFrameCodec,
    // Bytes read past the end of the previous reply.
    read_buf: BytesMut,
    broken: bool,
}

impl TcpExecutor {
    /// Opens a TCP connection to the configured address with a timeout.
    pub async fn connect(config: &ClientConfig) -> Result<Self, SpinelJsonError> {
        let addr = config.addr();
        let stream = tokio::time::timeout(config.connect_timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| SpinelJsonError::Timeout(format!("connecting to {addr}")))??;
        info!("Connected to {addr}");
        Ok(Self {
            conn: Mutex::new(Connection {
                stream,
                codec: RespFrameCodec,
                read_buf: BytesMut::with_capacity(4096),
                broken: false,
            }),
            read_timeout: config.read_timeout,
            write_timeout: config.write_timeout,
        })
    }

    /// Sends a single frame and waits for a single reply frame.
    async fn send_and_receive(&self, frame: RespFrame) -> Result<RespFrame, SpinelJsonError> {
        let mut conn = self.conn.lock().await;
        if conn.broken {
            return Err(SpinelJsonError::ConnectionClosed);
        }

        let mut write_buf = BytesMut::new();
        conn.codec.encode(frame, &mut write_buf)?;

        let result = conn
            .exchange(&write_buf, self.write_timeout, self.read_timeout)
            .await;
        if let Err(e) = &result {
            warn!("Connection marked broken after failed call: {e}");
            conn.broken = true;
        }
        result
    }
}

impl Connection {
    async fn exchange(
        &mut self,
        request: &[u8],
        write_timeout: Duration,
        read_timeout: Duration,
    ) -> Result<RespFrame, SpinelJsonError> {
        tokio::time::timeout(write_timeout, self.stream.write_all(request))
            .await
            .map_err(|_| SpinelJsonError::Timeout("writing command".to_string()))??;

        loop {
            if let Some(reply) = self.codec.decode(&mut self.read_buf)? {
                return Ok(reply);
            }
            match tokio::time::timeout(read_timeout, self.stream.read_buf(&mut self.read_buf)).await
            {
                Ok(Ok(0)) => return Err(SpinelJsonError::ConnectionClosed),
                Ok(Ok(_)) => {}
                Ok(Err(e)) => return Err(e.into()),
                Err(_) => {
                    return Err(SpinelJsonError::Timeout(
                        "waiting for reply".to_string(),
                    ));
                }
            }
        }
    }
}

#[async_trait]
impl AsyncExecutor for TcpExecutor {
    async fn execute(
        &self,
        command: &str,
        args: Vec<Bytes>,
    ) -> Result<RespValue, SpinelJsonError> {
        debug!("Sending {command} with {} argument(s)", args.len());
        match self.send_and_receive(RespFrame::command(command, args)).await? {
            RespFrame::Error(message) => Err(SpinelJsonError::Server(message)),
            frame => Ok(frame.into()),
        }
    }
}
