//! JSON data file persistence
//!
//! One file holds every collection plus a small header:
//!
//! ```json
//! { "meta": { "origin": "4121-1710495000000000000", "revision": 7 },
//!   "donors": [...], "recipients": [...], "bags": [...],
//!   "resources": [...], "notifications": [...] }
//! ```
//!
//! Each save rewrites the file with one collection replaced, bumps the
//! revision and stamps the writer's origin. Writes go to a uniquely named
//! temporary file that is renamed over the original, so readers see either
//! the old or the new file. A reader whose revision is behind, and whose last write was not the
//! newest, has external changes to pick up.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::core::models::{Collection, Snapshot};
use crate::core::ports::Persistence;

/// Header identifying the last writer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    /// Who wrote last
    #[serde(default)]
    pub origin: String,
    /// Bumped on every write
    #[serde(default)]
    pub revision: u64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct DataFile {
    #[serde(default)]
    meta: FileMeta,
    #[serde(flatten)]
    snapshot: Snapshot,
}

/// File-backed [`Persistence`]
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    origin: String,
    last_seen: AtomicU64,
    missed_external: AtomicBool,
}

impl JsonFileStore {
    /// Store backed by `path`; the file is created on first save
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        Self {
            path: path.into(),
            origin: format!("{}-{nanos}", std::process::id()),
            last_seen: AtomicU64::new(0),
            missed_external: AtomicBool::new(false),
        }
    }

    /// Path of the data file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Origin tag stamped on this instance's writes
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Current header of the file, if it exists
    pub fn meta(&self) -> anyhow::Result<Option<FileMeta>> {
        Ok(self.read()?.map(|file| file.meta))
    }

    /// Overwrite every collection at once
    pub fn replace_all(&self, snapshot: &Snapshot) -> anyhow::Result<()> {
        let revision = self.read()?.map_or(0, |f| f.meta.revision) + 1;
        self.write(&DataFile {
            meta: FileMeta {
                origin: self.origin.clone(),
                revision,
            },
            snapshot: snapshot.clone(),
        })?;
        self.last_seen.store(revision, Ordering::SeqCst);
        Ok(())
    }

    fn read(&self) -> anyhow::Result<Option<DataFile>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(Some(DataFile::default()));
        }
        let file = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(Some(file))
    }

    fn write(&self, file: &DataFile) -> anyhow::Result<()> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
                parent
            },
            None => Path::new("."),
        };

        // Each write gets its own temp file, so concurrent writers never
        // rename each other's partial output into place.
        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create a temp file in {}", dir.display()))?;
        serde_json::to_writer_pretty(&mut tmp, file)?;
        tmp.as_file_mut()
            .sync_all()
            .with_context(|| format!("Failed to write {}", tmp.path().display()))?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

impl Persistence for JsonFileStore {
    fn load(&self) -> anyhow::Result<Snapshot> {
        match self.read()? {
            Some(file) => {
                self.last_seen.store(file.meta.revision, Ordering::SeqCst);
                Ok(file.snapshot)
            },
            None => {
                log::debug!("No data file at {}, starting empty", self.path.display());
                Ok(Snapshot::default())
            },
        }
    }

    fn save(&self, collection: Collection, snapshot: &Snapshot) -> anyhow::Result<()> {
        let mut file = self.read()?.unwrap_or_default();

        let seen = self.last_seen.load(Ordering::SeqCst);
        if file.meta.revision > seen && file.meta.origin != self.origin {
            // Another writer got in first; our next poll must still report it.
            self.missed_external.store(true, Ordering::SeqCst);
        }

        file.snapshot.replace_from(collection, snapshot);
        file.meta.revision += 1;
        file.meta.origin.clone_from(&self.origin);
        self.write(&file)?;

        self.last_seen.store(file.meta.revision, Ordering::SeqCst);
        log::debug!("Saved {collection} (revision {})", file.meta.revision);
        Ok(())
    }

    fn poll_external(&self) -> anyhow::Result<Option<Snapshot>> {
        let Some(file) = self.read()? else {
            return Ok(None);
        };

        let seen = self.last_seen.load(Ordering::SeqCst);
        let newer_foreign = file.meta.revision > seen && file.meta.origin != self.origin;
        let missed = self.missed_external.swap(false, Ordering::SeqCst);
        self.last_seen.store(file.meta.revision.max(seen), Ordering::SeqCst);

        if newer_foreign || missed {
            log::debug!(
                "External write detected (revision {}, origin {})",
                file.meta.revision,
                file.meta.origin
            );
            Ok(Some(file.snapshot))
        } else {
            Ok(None)
        }
    }
}
