//! Command implementations

mod bag;
mod chat;
mod donor;
mod init;
mod messaging;
mod notifications;
mod request;
mod resource;
#[cfg(feature = "server")]
mod serve;
mod status;

use std::path::PathBuf;

use lifeflow::adapters::{JsonFileStore, OutboxMessenger};
use lifeflow::config::Config;
use lifeflow::core::models::Actor;
use lifeflow::core::ports::{SystemClock, TextCompletion};
use lifeflow::core::services::Coordinator;
use lifeflow::output::OutputMode;

pub use bag::bag_cmd;
pub use chat::chat;
pub use donor::donor_cmd;
pub use init::init;
pub use messaging::{alert, urgent};
pub use notifications::notifications_cmd;
pub use request::{match_lookup, request_cmd};
pub use resource::resource_cmd;
#[cfg(feature = "server")]
pub use serve::serve;
pub use status::status;

/// Options shared by every command
#[derive(Debug, Clone)]
pub struct Context {
    /// Output mode
    pub mode: OutputMode,
    /// Data file override
    pub data: Option<PathBuf>,
    /// Acting user
    pub actor: Actor,
}

impl Context {
    /// Loaded configuration with the data file override applied
    pub fn config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load()?;
        if let Some(data) = &self.data {
            config.storage.data_file.clone_from(data);
        }
        Ok(config)
    }

    /// Coordinator over the configured data file and outbox
    pub fn open(&self) -> anyhow::Result<(Config, Coordinator)> {
        let config = self.config()?;
        let coordinator = Coordinator::open(
            Box::new(JsonFileStore::new(&config.storage.data_file)),
            Box::new(OutboxMessenger::new(&config.storage.outbox_file)),
            Box::new(SystemClock),
            config.alerts,
        )?;
        Ok((config, coordinator))
    }
}

/// The chat backend for this build
#[cfg(feature = "llm")]
pub fn assistant(config: &Config) -> Box<dyn TextCompletion> {
    use lifeflow::adapters::GeminiCompletion;
    use lifeflow::core::ports::OfflineCompletion;

    let assistant = &config.assistant;
    match GeminiCompletion::new(&assistant.model, assistant.api_key(), assistant.temperature) {
        Ok(backend) => Box::new(backend),
        Err(err) => {
            log::warn!("Hosted assistant unavailable: {err:#}");
            Box::new(OfflineCompletion)
        },
    }
}

/// The chat backend for this build
#[cfg(not(feature = "llm"))]
pub fn assistant(_config: &Config) -> Box<dyn TextCompletion> {
    Box::new(lifeflow::core::ports::OfflineCompletion)
}
