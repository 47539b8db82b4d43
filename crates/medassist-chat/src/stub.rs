//! Deterministic model for tests and offline runs.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use medassist_core::{Error, Result};
use parking_lot::Mutex;

use crate::types::ChatModel;

/// Replies with a fixed text (or fails) and records every call.
pub struct StubModel {
    reply: Option<String>,
    calls: AtomicUsize,
    last_message: Mutex<Option<(String, String)>>,
}

impl StubModel {
    /// A model that always answers `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            calls: AtomicUsize::new(0),
            last_message: Mutex::new(None),
        }
    }

    /// A model whose every call fails.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
            last_message: Mutex::new(None),
        }
    }

    /// Number of `complete` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// System prompt and message of the most recent call.
    pub fn last_message(&self) -> Option<(String, String)> {
        self.last_message.lock().clone()
    }
}

#[async_trait]
impl ChatModel for StubModel {
    async fn complete(&self, system: &str, message: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_message.lock() = Some((system.to_string(), message.to_string()));
        self.reply
            .clone()
            .ok_or_else(|| Error::Model("stub model configured to fail".into()))
    }

    async fn is_available(&self) -> bool {
        self.reply.is_some()
    }

    fn name(&self) -> &str {
        "stub"
    }
}
