use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::ports::BlockListRepository;

/// Runtime-editable entry set backed by a [`BlockListRepository`].
///
/// Entries are kept exactly as the user typed them. The in-memory set stays
/// authoritative when the repository cannot be written.
pub struct UserBlockList {
    entries: RwLock<HashSet<String>>,
    repository: Option<Arc<dyn BlockListRepository>>,
}

impl UserBlockList {
    pub fn in_memory<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: RwLock::new(entries.into_iter().map(Into::into).collect()),
            repository: None,
        }
    }

    pub fn load(repository: Arc<dyn BlockListRepository>) -> Self {
        let entries = match repository.load() {
            Ok(entries) => {
                debug!(count = entries.len(), "block list loaded");
                entries
            }
            Err(error) => {
                warn!(%error, "failed to load block list, starting empty");
                HashSet::new()
            }
        };

        Self {
            entries: RwLock::new(entries),
            repository: Some(repository),
        }
    }

    /// Adds `entry` and rewrites the backing store. Blank entries and
    /// entries spanning more than one line are rejected, since the store
    /// keeps one entry per line.
    pub fn block(&self, entry: &str) -> bool {
        if entry.trim().is_empty() || entry.contains(['\n', '\r']) {
            return false;
        }

        let snapshot = {
            let mut entries = self.write();
            entries.insert(entry.to_string());
            entries.clone()
        };

        if let Some(ref repository) = self.repository {
            if let Err(error) = repository.save(&snapshot) {
                warn!(%error, "failed to persist block list, keeping in-memory entry");
            }
        }

        true
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.read().contains(entry)
    }

    /// Case-insensitive substring match of any entry against `probe`.
    pub fn matches(&self, probe: &str) -> bool {
        if probe.is_empty() {
            return false;
        }

        let probe = probe.to_lowercase();
        self.read()
            .iter()
            .filter(|entry| !entry.is_empty())
            .any(|entry| probe.contains(&entry.to_lowercase()))
    }

    pub fn entries(&self) -> Vec<String> {
        let mut entries: Vec<String> = self.read().iter().cloned().collect();
        entries.sort();
        entries
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashSet<String>> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashSet<String>> {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for UserBlockList {
    fn default() -> Self {
        Self::in_memory(Vec::<String>::new())
    }
}
