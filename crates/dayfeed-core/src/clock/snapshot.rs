//! Generation-checked snapshot slot.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

use crate::solar::{DaySolarData, SunEvents};

/// State of one committed search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationSnapshot {
    pub generation: u64,
    pub location_name: String,
    /// Minutes east of UTC, from the sun-event service.
    pub utc_offset_minutes: i32,
    pub today: DaySolarData,
    /// `None` when today's sun events are missing or unreadable.
    pub events: Option<SunEvents>,
}

/// Holds the latest committed snapshot and hands out generation numbers.
///
/// Generations start at 1 and only grow; [`commit`](Self::commit) refuses a
/// snapshot whose generation is not newer than the one already held.
#[derive(Debug)]
pub struct SnapshotSlot {
    tx: watch::Sender<Option<Arc<LocationSnapshot>>>,
    next_generation: AtomicU64,
}

impl Default for SnapshotSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotSlot {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            tx,
            next_generation: AtomicU64::new(1),
        }
    }

    /// Reserve the generation number for a search that is about to start.
    pub fn begin(&self) -> u64 {
        self.next_generation.fetch_add(1, Ordering::SeqCst)
    }

    /// Publish `snapshot` unless a newer one is already committed.
    /// Returns whether it was published.
    pub fn commit(&self, snapshot: LocationSnapshot) -> bool {
        let generation = snapshot.generation;
        let snapshot = Arc::new(snapshot);
        self.tx.send_if_modified(|current| {
            let newer = current
                .as_ref()
                .map_or(true, |held| generation > held.generation);
            if newer {
                *current = Some(Arc::clone(&snapshot));
            }
            newer
        })
    }

    pub fn current(&self) -> Option<Arc<LocationSnapshot>> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<LocationSnapshot>>> {
        self.tx.subscribe()
    }

    /// Generation of the held snapshot, 0 when nothing is committed.
    pub fn committed_generation(&self) -> u64 {
        self.tx.borrow().as_ref().map_or(0, |s| s.generation)
    }
}
