//! Two-phase proximity evaluation
//!
//! Phase 1 clears stale overrides involving dead or invalid participants
//! across the full candidate roster, so a mid-session death never leaves a
//! pair stuck as Hear. Phase 2 applies proximity strictly between live
//! participants, with positions snapshotted once per cycle.

use proxim_core::{AudibilityState, Config, Participant, ParticipantId};
use proxim_store::OverrideStore;

use crate::roster::{audible_candidates, live_snapshots, LiveSnapshot};

/// Outcome counters for one evaluate or reset cycle
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// Stale overrides forced back to Default
    pub restored: u32,
    /// Proximity overrides written
    pub writes: u32,
    /// Pairs already holding the target value (write avoided)
    pub unchanged: u32,
    /// Pairs the store refused this cycle
    pub skipped: u32,
}

impl CycleReport {
    /// Total store mutations performed this cycle
    pub fn total_writes(&self) -> u32 {
        self.restored + self.writes
    }
}

/// Proximity matrix engine
///
/// Stateless between cycles: every invocation re-derives the desired
/// audibility matrix from the roster snapshot it is handed.
pub struct ProximityEngine {
    config: Config,
}

impl ProximityEngine {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        ProximityEngine { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one full evaluate-and-reconcile cycle against a roster snapshot
    pub fn evaluate<S: OverrideStore>(&self, roster: &[Participant], store: &S) -> CycleReport {
        let mut report = CycleReport::default();

        let candidates = audible_candidates(roster);
        if candidates.len() < 2 {
            return report;
        }

        self.reconcile_inactive(&candidates, store, &mut report);

        let live = live_snapshots(&candidates);
        self.apply_proximity(&live, store, &mut report);

        report
    }

    /// Force every ordered candidate pair back to Default
    ///
    /// Runs over the full candidate roster, alive or not. Invoked on
    /// disable and on unload; safe with an empty or single-member roster.
    pub fn reset_all<S: OverrideStore>(&self, roster: &[Participant], store: &S) -> CycleReport {
        let mut report = CycleReport::default();
        let candidates = audible_candidates(roster);

        for listener in &candidates {
            for speaker in &candidates {
                if listener.id == speaker.id {
                    continue;
                }
                Self::restore_default(listener.id, speaker.id, store, &mut report);
            }
        }

        report
    }

    /// Phase 1: any pair touching a dead or unembodied participant goes
    /// back to Default.
    fn reconcile_inactive<S: OverrideStore>(
        &self,
        candidates: &[Participant],
        store: &S,
        report: &mut CycleReport,
    ) {
        for listener in candidates {
            for speaker in candidates {
                if listener.id == speaker.id {
                    continue;
                }
                if listener.is_live() && speaker.is_live() {
                    continue;
                }
                Self::restore_default(listener.id, speaker.id, store, report);
            }
        }
    }

    /// Phase 2: proximity strictly between live participants.
    fn apply_proximity<S: OverrideStore>(
        &self,
        live: &[LiveSnapshot],
        store: &S,
        report: &mut CycleReport,
    ) {
        let range_sq = self.config.range_squared();

        for listener in live {
            // A muted listener's incoming overrides belong to whatever
            // system muted them.
            if listener.is_muted {
                continue;
            }

            for speaker in live {
                if listener.id == speaker.id {
                    continue;
                }
                // Muted speakers are never granted Hear.
                if speaker.is_muted {
                    continue;
                }

                let dist_sq = listener.position.distance_squared(&speaker.position);
                let desired = if dist_sq <= range_sq {
                    AudibilityState::Hear
                } else {
                    AudibilityState::Mute
                };

                let current = match store.get(listener.id, speaker.id) {
                    Ok(state) => state,
                    Err(err) => {
                        tracing::debug!(
                            "override pair ({}, {}) skipped: {}",
                            listener.id,
                            speaker.id,
                            err
                        );
                        report.skipped += 1;
                        continue;
                    }
                };

                if current == desired {
                    report.unchanged += 1;
                    continue;
                }

                match store.set(listener.id, speaker.id, desired) {
                    Ok(()) => report.writes += 1,
                    Err(err) => {
                        tracing::debug!(
                            "override pair ({}, {}) skipped: {}",
                            listener.id,
                            speaker.id,
                            err
                        );
                        report.skipped += 1;
                    }
                }
            }
        }
    }

    fn restore_default<S: OverrideStore>(
        listener: ParticipantId,
        speaker: ParticipantId,
        store: &S,
        report: &mut CycleReport,
    ) {
        let current = match store.get(listener, speaker) {
            Ok(state) => state,
            Err(err) => {
                tracing::debug!("override pair ({}, {}) skipped: {}", listener, speaker, err);
                report.skipped += 1;
                return;
            }
        };

        if current.is_default() {
            report.unchanged += 1;
            return;
        }

        match store.set(listener, speaker, AudibilityState::Default) {
            Ok(()) => report.restored += 1,
            Err(err) => {
                tracing::debug!("override pair ({}, {}) skipped: {}", listener, speaker, err);
                report.skipped += 1;
            }
        }
    }
}

impl Default for ProximityEngine {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;
    use proxim_core::Position3D;
    use proxim_store::MemoryOverrideStore;

    fn arb_roster() -> impl Strategy<Value = Vec<Participant>> {
        prop::collection::vec(
            (
                any::<bool>(),
                any::<bool>(),
                any::<bool>(),
                -2000.0f32..2000.0,
                -2000.0f32..2000.0,
                -2000.0f32..2000.0,
            ),
            2..10,
        )
        .prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (alive, embodied, muted, x, y, z))| Participant {
                    id: ParticipantId::new(i as u64 + 1),
                    is_valid: true,
                    is_bot: false,
                    is_observer: false,
                    has_embodiment: embodied,
                    is_alive: alive,
                    is_muted: muted,
                    position: Position3D::new(x, y, z),
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_overrides_only_between_live_unmuted_pairs(roster in arb_roster()) {
            let engine = ProximityEngine::new();
            let store = MemoryOverrideStore::new();
            let range_sq = engine.config().range_squared();

            engine.evaluate(&roster, &store);

            for (listener_id, speaker_id, state) in store.pairs() {
                prop_assert_ne!(listener_id, speaker_id);

                let listener = roster.iter().find(|p| p.id == listener_id).unwrap();
                let speaker = roster.iter().find(|p| p.id == speaker_id).unwrap();

                // Starting from an empty table, only live unmuted pairs
                // can have been written
                prop_assert!(listener.is_live() && speaker.is_live());
                prop_assert!(!listener.is_muted && !speaker.is_muted);

                let expected =
                    if listener.position.distance_squared(&speaker.position) <= range_sq {
                        AudibilityState::Hear
                    } else {
                        AudibilityState::Mute
                    };
                prop_assert_eq!(state, expected);
            }
        }

        #[test]
        fn prop_second_evaluate_writes_nothing(roster in arb_roster()) {
            let engine = ProximityEngine::new();
            let store = MemoryOverrideStore::new();

            engine.evaluate(&roster, &store);
            let report = engine.evaluate(&roster, &store);

            prop_assert_eq!(report.total_writes(), 0);
        }

        #[test]
        fn prop_reset_all_leaves_no_overrides(roster in arb_roster()) {
            let engine = ProximityEngine::new();
            let store = MemoryOverrideStore::new();

            engine.evaluate(&roster, &store);
            engine.reset_all(&roster, &store);

            prop_assert_eq!(store.override_count(), 0);
        }
    }
}
