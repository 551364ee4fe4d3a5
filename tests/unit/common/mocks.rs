//! Mock implementations of port traits for testing
//!
//! These mocks keep their state behind an `Arc` so a test can hand a clone
//! to the coordinator and still inspect what happened.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use lifeflow::core::models::{Collection, OutboundMessage, Snapshot};
use lifeflow::core::ports::{Clock, CompletionError, Messenger, Persistence, TextCompletion};

#[derive(Debug, Default)]
struct StoreState {
    snapshot: Snapshot,
    saves: Vec<Collection>,
    external: Option<Snapshot>,
    fail_saves: bool,
}

/// In-memory persistence
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        let store = Self::new();
        store.state.lock().unwrap().snapshot = snapshot;
        store
    }

    /// Make every subsequent save fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.state.lock().unwrap().fail_saves = failing;
    }

    /// What has been saved so far
    pub fn saved(&self) -> Snapshot {
        self.state.lock().unwrap().snapshot.clone()
    }

    /// Collections saved, in order
    pub fn saves(&self) -> Vec<Collection> {
        self.state.lock().unwrap().saves.clone()
    }

    /// Simulate another client writing `snapshot`
    pub fn write_external(&self, snapshot: Snapshot) {
        let mut state = self.state.lock().unwrap();
        state.snapshot = snapshot.clone();
        state.external = Some(snapshot);
    }
}

impl Persistence for MemoryStore {
    fn load(&self) -> anyhow::Result<Snapshot> {
        Ok(self.state.lock().unwrap().snapshot.clone())
    }

    fn save(&self, collection: Collection, snapshot: &Snapshot) -> anyhow::Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_saves {
            anyhow::bail!("disk full");
        }
        state.snapshot.replace_from(collection, snapshot);
        state.saves.push(collection);
        Ok(())
    }

    fn poll_external(&self) -> anyhow::Result<Option<Snapshot>> {
        Ok(self.state.lock().unwrap().external.take())
    }
}

/// Messenger that records what it was asked to send
#[derive(Debug, Clone, Default)]
pub struct RecordingMessenger {
    sent: Arc<Mutex<Vec<OutboundMessage>>>,
    failing: bool,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl Messenger for RecordingMessenger {
    fn deliver(&self, message: &OutboundMessage) -> anyhow::Result<()> {
        if self.failing {
            anyhow::bail!("gateway unreachable");
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Clock stopped at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Completion backend with a canned answer
#[derive(Debug, Clone)]
pub enum CannedCompletion {
    Answer(String),
    Unconfigured,
    Broken,
}

impl TextCompletion for CannedCompletion {
    fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
        match self {
            Self::Answer(text) => Ok(text.clone()),
            Self::Unconfigured => Err(CompletionError::Unconfigured),
            Self::Broken => Err(CompletionError::Failed("HTTP 503".to_string())),
        }
    }
}
