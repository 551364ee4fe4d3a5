//! Data file watcher
//!
//! Wakes the server loop when the data file changes so external writes are
//! picked up before the next poll interval.

use std::path::Path;
use std::sync::mpsc::{self, Receiver};

use anyhow::Context;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

/// Watches one file for modifications
#[derive(Debug)]
pub struct DataFileWatcher {
    _watcher: RecommendedWatcher,
    changes: Receiver<()>,
}

impl DataFileWatcher {
    /// Start watching `path`
    ///
    /// The parent directory is watched, since saves replace the file by rename.
    pub fn watch(path: &Path) -> anyhow::Result<Self> {
        let file_name = path
            .file_name()
            .context("Data file path has no file name")?
            .to_os_string();
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => std::env::current_dir()?,
        };

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if event
                    .paths
                    .iter()
                    .any(|p| p.file_name() == Some(file_name.as_os_str()))
                {
                    let _ = tx.send(());
                }
            },
            Err(err) => log::warn!("Watch error: {err}"),
        })?;
        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {}", dir.display()))?;

        Ok(Self {
            _watcher: watcher,
            changes: rx,
        })
    }

    /// Whether the file changed since the last call
    #[must_use]
    pub fn take_changed(&self) -> bool {
        let mut changed = false;
        while self.changes.try_recv().is_ok() {
            changed = true;
        }
        changed
    }
}
