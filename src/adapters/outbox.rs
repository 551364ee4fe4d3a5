//! JSON-lines outbox messenger
//!
//! Messages are appended to a file for a separate transport to pick up.

use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

use crate::core::models::OutboundMessage;
use crate::core::ports::Messenger;

#[derive(Serialize)]
struct OutboxEntry<'a> {
    queued_at: String,
    #[serde(flatten)]
    message: &'a OutboundMessage,
}

/// Appends each message to a JSON-lines file
#[derive(Debug, Clone)]
pub struct OutboxMessenger {
    path: PathBuf,
}

impl OutboxMessenger {
    /// Outbox at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the outbox file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Messenger for OutboxMessenger {
    fn deliver(&self, message: &OutboundMessage) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let entry = OutboxEntry {
            queued_at: chrono::Utc::now().to_rfc3339(),
            message,
        };
        let line = serde_json::to_string(&entry)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open outbox {}", self.path.display()))?;
        writeln!(file, "{line}")?;

        log::info!("Queued {:?} message to {}", message.channel, message.to);
        Ok(())
    }
}
