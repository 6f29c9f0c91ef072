//! Progress and diagnostic messages emitted by resolution and verification.
//!
//! Messages go to an injected [`MessageSink`]. Delivery is fire-and-forget:
//! no acknowledgment, no backpressure; the only ordering is the order in which
//! the core emits them.

use std::sync::mpsc::Sender;
use std::sync::Mutex;

/// Severity of an [`ActionMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warn,
}

/// One discrete progress/diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionMessage {
    pub level: MessageLevel,
    pub text: String,
}

impl ActionMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            text: text.into(),
        }
    }

    pub fn warn(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warn,
            text: text.into(),
        }
    }
}

/// Output channel for [`ActionMessage`]s.
pub trait MessageSink: Send + Sync {
    fn emit(&self, msg: ActionMessage);
}

/// Drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl MessageSink for NullSink {
    fn emit(&self, _msg: ActionMessage) {}
}

/// Forwards messages into `tracing` (used by the CLI).
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl MessageSink for TracingSink {
    fn emit(&self, msg: ActionMessage) {
        match msg.level {
            MessageLevel::Info => tracing::info!(target: "chanver::messages", "{}", msg.text),
            MessageLevel::Warn => tracing::warn!(target: "chanver::messages", "{}", msg.text),
        }
    }
}

/// Collects messages in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<ActionMessage>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, in emission order.
    pub fn messages(&self) -> Vec<ActionMessage> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl MessageSink for MemorySink {
    fn emit(&self, msg: ActionMessage) {
        if let Ok(mut m) = self.messages.lock() {
            m.push(msg);
        }
    }
}

/// A disconnected receiver is not an error for the sender.
impl MessageSink for Sender<ActionMessage> {
    fn emit(&self, msg: ActionMessage) {
        let _ = self.send(msg);
    }
}
