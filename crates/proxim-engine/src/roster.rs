//! Roster filtering
//!
//! The dead/invalid reconciliation phase runs over every audible candidate
//! (valid, non-bot, non-observer, alive or not). The proximity phase runs
//! over the live subset only, with positions snapshotted once per cycle.

use proxim_core::{Participant, ParticipantId, Position3D};

/// Position snapshot for one live participant
#[derive(Debug, Clone, Copy)]
pub struct LiveSnapshot {
    pub id: ParticipantId,
    pub is_muted: bool,
    pub position: Position3D,
}

/// Valid human participants that can hold overrides at all
pub fn audible_candidates(roster: &[Participant]) -> Vec<Participant> {
    roster
        .iter()
        .filter(|p| p.is_audible_candidate())
        .copied()
        .collect()
}

/// Candidates that are alive with a valid embodiment, positions captured
pub fn live_snapshots(candidates: &[Participant]) -> Vec<LiveSnapshot> {
    candidates
        .iter()
        .filter(|p| p.is_live())
        .map(|p| LiveSnapshot {
            id: p.id,
            is_muted: p.is_muted,
            position: p.position,
        })
        .collect()
}
