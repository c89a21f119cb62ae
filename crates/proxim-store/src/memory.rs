//! In-memory audibility table

use std::collections::HashMap;

use parking_lot::Mutex;

use proxim_core::{AudibilityState, ParticipantId, ProximityResult};

use crate::OverrideStore;

/// Store traffic counters
#[derive(Debug, Default, Clone, Copy)]
pub struct StoreStats {
    pub gets: u64,
    pub sets: u64,
}

/// In-memory override table keyed by ordered (listener, speaker) pairs
///
/// Only non-Default entries are stored; an absent pair reads as Default.
/// The table sits behind a mutex so the host and the runtime can share it.
#[derive(Default)]
pub struct MemoryOverrideStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    table: HashMap<(ParticipantId, ParticipantId), AudibilityState>,
    stats: StoreStats,
}

impl MemoryOverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pairs currently holding a non-Default override
    pub fn override_count(&self) -> usize {
        self.inner.lock().table.len()
    }

    /// Traffic counters, for verifying write-avoidance
    pub fn stats(&self) -> StoreStats {
        self.inner.lock().stats
    }

    /// Snapshot of every pair currently holding a non-Default override
    pub fn pairs(&self) -> Vec<(ParticipantId, ParticipantId, AudibilityState)> {
        self.inner
            .lock()
            .table
            .iter()
            .map(|(&(listener, speaker), &state)| (listener, speaker, state))
            .collect()
    }

    /// Clear the counters without touching the table
    pub fn reset_stats(&self) {
        self.inner.lock().stats = StoreStats::default();
    }
}

impl OverrideStore for MemoryOverrideStore {
    fn get(
        &self,
        listener: ParticipantId,
        speaker: ParticipantId,
    ) -> ProximityResult<AudibilityState> {
        let mut inner = self.inner.lock();
        inner.stats.gets += 1;
        Ok(inner
            .table
            .get(&(listener, speaker))
            .copied()
            .unwrap_or_default())
    }

    fn set(
        &self,
        listener: ParticipantId,
        speaker: ParticipantId,
        state: AudibilityState,
    ) -> ProximityResult<()> {
        let mut inner = self.inner.lock();
        inner.stats.sets += 1;
        if state.is_default() {
            inner.table.remove(&(listener, speaker));
        } else {
            inner.table.insert((listener, speaker), state);
        }
        Ok(())
    }
}
