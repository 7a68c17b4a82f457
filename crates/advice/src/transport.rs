//! Line-delimited JSON bridge transport.

use std::future::Future;

use log::debug;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::advice::AdviceError;
use crate::chat::{ChatRequest, ChatResponse, ChatTransport};

pub const DEFAULT_BRIDGE_ADDR: &str = "127.0.0.1:7788";

/// Longest reply line accepted from the bridge, newline included
pub const MAX_REPLY_BYTES: usize = 64 * 1024;

/// Opens one TCP connection per request, writes the request as a single JSON
/// line and reads a single JSON line back.
#[derive(Debug, Clone)]
pub struct LineTransport {
    addr: String,
}

impl LineTransport {
    pub fn new(addr: impl Into<String>) -> Self {
        Self { addr: addr.into() }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }
}

impl Default for LineTransport {
    fn default() -> Self {
        Self::new(DEFAULT_BRIDGE_ADDR)
    }
}

impl ChatTransport for LineTransport {
    fn complete(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<ChatResponse, AdviceError>> + Send {
        let encoded = serde_json::to_vec(request);
        let addr = self.addr.clone();
        async move {
            let mut line = encoded?;
            line.push(b'\n');

            let stream = TcpStream::connect(&addr).await?;
            let (reader, mut writer) = stream.into_split();
            writer.write_all(&line).await?;
            writer.flush().await?;

            let mut reader = BufReader::new(reader.take(MAX_REPLY_BYTES as u64));
            let mut reply = Vec::new();
            let n = reader.read_until(b'\n', &mut reply).await?;
            debug!("bridge {addr}: sent {} bytes, received {n} bytes", line.len());
            if n >= MAX_REPLY_BYTES && reply.last() != Some(&b'\n') {
                return Err(AdviceError::ReplyTooLong(MAX_REPLY_BYTES));
            }
            if reply.iter().all(u8::is_ascii_whitespace) {
                return Err(AdviceError::EmptyReply);
            }

            Ok(serde_json::from_slice(&reply)?)
        }
    }
}
