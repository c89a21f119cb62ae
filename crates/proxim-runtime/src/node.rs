//! Proximity node - runtime wiring
//!
//! One node owns the tick gate, the enabled flag, and cumulative stats.
//! The roster and the audibility table stay with the host; the node only
//! borrows them through their capabilities for the duration of a cycle.

use proxim_core::Config;
use proxim_engine::{CycleReport, ProximityEngine};
use proxim_store::OverrideStore;

use crate::{RosterProvider, TickGate};

/// Cumulative runtime counters
#[derive(Clone, Copy, Debug, Default)]
pub struct RuntimeStats {
    /// Host ticks observed
    pub ticks: u64,
    /// Evaluation cycles run
    pub cycles: u64,
    /// Proximity overrides written
    pub writes: u64,
    /// Stale overrides restored to Default
    pub restored: u64,
    /// Pairs the store refused
    pub skipped: u64,
    /// Full resets performed
    pub resets: u64,
}

/// The runtime entity driving proximity evaluation
///
/// Single-threaded by construction: every cycle runs to completion inside
/// the host's tick callback before the next tick is processed.
pub struct ProximityNode<R: RosterProvider, S: OverrideStore> {
    roster: R,
    store: S,
    engine: ProximityEngine,
    gate: TickGate,
    enabled: bool,
    stats: RuntimeStats,
}

impl<R: RosterProvider, S: OverrideStore> ProximityNode<R, S> {
    pub fn new(roster: R, store: S) -> Self {
        Self::with_config(roster, store, Config::default())
    }

    pub fn with_config(roster: R, store: S, config: Config) -> Self {
        let gate = TickGate::new(config.ticks_per_update);
        let enabled = config.enabled;
        tracing::info!("proximity voice loaded, enabled = {}", enabled);

        ProximityNode {
            roster,
            store,
            engine: ProximityEngine::with_config(config),
            gate,
            enabled,
            stats: RuntimeStats::default(),
        }
    }

    /// Host tick callback
    ///
    /// Cheap unless an evaluation window opens; a disabled node pays only
    /// the counter increment. Store-level failures never propagate out of
    /// here, so it is always safe to call again next tick.
    pub fn on_tick(&mut self) {
        self.stats.ticks += 1;

        if !self.gate.fire() {
            return;
        }
        if !self.enabled {
            return;
        }

        let roster = self.roster.snapshot();
        let report = self.engine.evaluate(&roster, &self.store);
        self.record(report);
        self.stats.cycles += 1;
    }

    /// Edge-triggered enable handling
    ///
    /// Disabling runs an immediate full reset as its own complete cycle
    /// rather than waiting for the next tick window. Re-enabling resumes
    /// evaluation at the next window.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        tracing::info!("proximity voice enabled = {}", enabled);

        if !enabled {
            self.reset_all();
        }
    }

    /// Teardown hook; no override outlives the node's activation
    pub fn on_unload(&mut self) {
        self.reset_all();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn stats(&self) -> &RuntimeStats {
        &self.stats
    }

    pub fn engine(&self) -> &ProximityEngine {
        &self.engine
    }

    fn reset_all(&mut self) {
        let roster = self.roster.snapshot();
        let report = self.engine.reset_all(&roster, &self.store);
        self.record(report);
        self.stats.resets += 1;
        self.gate.reset();
        tracing::info!("all audibility overrides reset");
    }

    fn record(&mut self, report: CycleReport) {
        self.stats.writes += report.writes as u64;
        self.stats.restored += report.restored as u64;
        self.stats.skipped += report.skipped as u64;
    }
}
