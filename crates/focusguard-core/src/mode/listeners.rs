use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use crate::domain::ModeState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionReason {
    FocusStarted,
    ManualExit,
    Expired,
    DailyReset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChange {
    pub previous: ModeState,
    pub current: ModeState,
    pub reason: TransitionReason,
}

type Callback = Arc<dyn Fn(&ModeChange) + Send + Sync>;

#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: AtomicU64,
    callbacks: Mutex<Vec<(u64, Callback)>>,
}

impl ListenerRegistry {
    pub(crate) fn register(self: &Arc<Self>, callback: Callback) -> ModeSubscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().push((id, callback));
        ModeSubscription {
            id,
            registry: Arc::downgrade(self),
        }
    }

    /// Runs every callback on the calling thread, outside the registry lock.
    pub(crate) fn notify(&self, change: &ModeChange) {
        let callbacks: Vec<Callback> = self
            .lock()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in callbacks {
            callback(change);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    fn remove(&self, id: u64) {
        self.lock().retain(|(existing, _)| *existing != id);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(u64, Callback)>> {
        self.callbacks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Keeps a mode-change callback registered until dropped.
#[must_use = "dropping the subscription unregisters the listener"]
pub struct ModeSubscription {
    id: u64,
    registry: Weak<ListenerRegistry>,
}

impl Drop for ModeSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.id);
        }
    }
}
