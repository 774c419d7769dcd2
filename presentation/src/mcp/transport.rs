//! Line-framed transport for MCP.
//!
//! Frames are single-line JSON documents separated by `\n`, in both
//! directions. Every outbound frame goes through one [`Outbound`] channel
//! drained by a single [`write_loop`] task, so concurrent handlers never
//! interleave partial lines.
//!
//! # Types
//!
//! - [`MessageKind`]: classifies each incoming frame so the server can
//!   dispatch it (request, notification, stray response, invalid).
//! - [`classify_message`]: pure function that inspects `jsonrpc` / `id` / `method`.
//! - [`Outbound`]: cloneable handle for enqueueing frames.

use crate::mcp::error::Result;
use crate::mcp::protocol::JSONRPC_VERSION;
use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{trace, warn};

/// Classification of an incoming JSON-RPC frame.
#[derive(Debug, PartialEq)]
pub enum MessageKind {
    /// Has `id` + `method`: needs exactly one response.
    Request { id: Value, method: String },
    /// Has `method`, no `id`: never answered.
    Notification { method: String },
    /// Has `id` and `result`/`error`, no `method`. The gateway issues no
    /// requests, so these are dropped.
    Response,
    /// Not a JSON-RPC 2.0 message. `id` is echoed when one could be read.
    Invalid { id: Value, reason: &'static str },
}

/// Classify a parsed frame by inspecting `jsonrpc`, `id` and `method`.
pub fn classify_message(json: &Value) -> MessageKind {
    let Some(obj) = json.as_object() else {
        return MessageKind::Invalid {
            id: Value::Null,
            reason: "Request must be a JSON object",
        };
    };

    let id = obj.get("id").filter(|id| !id.is_null()).cloned();
    if obj.get("jsonrpc").and_then(Value::as_str) != Some(JSONRPC_VERSION) {
        return MessageKind::Invalid {
            id: id.unwrap_or(Value::Null),
            reason: "jsonrpc must be '2.0'",
        };
    }

    match (id, obj.get("method")) {
        (Some(id), Some(Value::String(method))) => MessageKind::Request {
            id,
            method: method.clone(),
        },
        (None, Some(Value::String(method))) => MessageKind::Notification {
            method: method.clone(),
        },
        (Some(_), None) if obj.contains_key("result") || obj.contains_key("error") => {
            MessageKind::Response
        }
        (id, _) => MessageKind::Invalid {
            id: id.unwrap_or(Value::Null),
            reason: "Request must carry a string 'method'",
        },
    }
}

/// An item on the outbound queue
#[derive(Debug)]
pub enum Outgoing {
    Message(Value),
    /// Flush and stop the writer
    Close,
}

/// Cloneable handle to a connection's outbound queue.
#[derive(Debug, Clone)]
pub struct Outbound {
    tx: mpsc::UnboundedSender<Outgoing>,
}

impl Outbound {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Outgoing>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Enqueue one frame. Returns `false` if the writer is gone or the
    /// message cannot be serialized.
    pub fn send(&self, message: &impl Serialize) -> bool {
        match serde_json::to_value(message) {
            Ok(value) => self.send_value(value),
            Err(e) => {
                warn!("Dropping unserializable outbound message: {}", e);
                false
            }
        }
    }

    pub fn send_value(&self, value: Value) -> bool {
        self.tx.send(Outgoing::Message(value)).is_ok()
    }

    /// Ask the writer to flush and stop once everything queued before is written.
    pub fn close(&self) {
        let _ = self.tx.send(Outgoing::Close);
    }
}

/// Drain the outbound queue into `writer`, one line per frame.
///
/// Returns after [`Outgoing::Close`] or once every sender is dropped. The
/// writer is flushed and shut down on the way out.
pub async fn write_loop<W>(mut writer: W, mut rx: mpsc::UnboundedReceiver<Outgoing>) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(outgoing) = rx.recv().await {
        match outgoing {
            Outgoing::Message(value) => {
                let mut line = serde_json::to_vec(&value)?;
                line.push(b'\n');
                writer.write_all(&line).await?;
                writer.flush().await?;
                trace!(bytes = line.len(), "Frame written");
            }
            Outgoing::Close => break,
        }
    }

    writer.flush().await?;
    writer.shutdown().await?;
    Ok(())
}
