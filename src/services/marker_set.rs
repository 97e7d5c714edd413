//! Time-bounded set of opaque marker keys.
//!
//! Keys added here become invisible after `ttl` even without an explicit
//! remove, which bounds how long a stale "skip the payload fetch" flag can
//! survive a crash mid-write.

use parking_lot::Mutex;
use std::{collections::HashMap, sync::Arc, time::Duration};
use tokio::{task::JoinHandle, time::Instant};

/// Concurrent set whose entries expire `ttl` after insertion.
///
/// `contains` checks deadlines lazily, and a background sweeper drops
/// expired entries so the map does not grow with abandoned keys. Re-adding
/// a key pushes its deadline out (last write wins).
pub struct ExpiringMarkerSet {
    ttl: Duration,
    entries: Arc<Mutex<HashMap<String, Instant>>>,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl ExpiringMarkerSet {
    /// Create the set and spawn its sweeper. Must be called inside a tokio
    /// runtime.
    pub fn new(ttl: Duration) -> Self {
        let entries = Arc::new(Mutex::new(HashMap::new()));
        let weak = Arc::downgrade(&entries);
        let period = ttl.max(Duration::from_millis(50));
        let sweeper = tokio::spawn(async move {
            let mut tick = tokio::time::interval(period);
            loop {
                tick.tick().await;
                // The sweeper holds only a weak handle, so dropping the set
                // ends this task on its next tick.
                let Some(entries) = weak.upgrade() else { break };
                let now = Instant::now();
                entries.lock().retain(|_, deadline| *deadline > now);
            }
        });

        Self {
            ttl,
            entries,
            sweeper: Mutex::new(Some(sweeper)),
        }
    }

    /// Mark `key`, visible to `contains` immediately and for `ttl`.
    pub fn add(&self, key: impl Into<String>) {
        let deadline = Instant::now() + self.ttl;
        self.entries.lock().insert(key.into(), deadline);
    }

    /// Unmark `key` before its deadline.
    pub fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
    }

    /// Whether `key` is marked and not yet expired.
    pub fn contains(&self, key: &str) -> bool {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(deadline) if *deadline > Instant::now() => true,
            Some(_) => {
                entries.remove(key);
                false
            }
            None => false,
        }
    }

    /// Drop every marker.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Stop the background sweeper. The set stays usable with lazy expiry
    /// only.
    pub fn shutdown(&self) {
        if let Some(handle) = self.sweeper.lock().take() {
            handle.abort();
        }
    }
}

impl Drop for ExpiringMarkerSet {
    fn drop(&mut self) {
        self.shutdown();
    }
}
