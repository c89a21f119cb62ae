//! Roster snapshot capability

use std::sync::Arc;

use parking_lot::Mutex;

use proxim_core::{Participant, ParticipantId};

/// Supplies the current set of active participants on demand
///
/// Owned by the host. The runtime queries it once per evaluation cycle and
/// never caches the result; the returned snapshot is read-only for the
/// duration of that cycle.
pub trait RosterProvider {
    /// Full roster at this instant
    fn snapshot(&self) -> Vec<Participant>;
}

impl RosterProvider for Vec<Participant> {
    fn snapshot(&self) -> Vec<Participant> {
        self.clone()
    }
}

impl<R: RosterProvider + ?Sized> RosterProvider for Arc<R> {
    fn snapshot(&self) -> Vec<Participant> {
        (**self).snapshot()
    }
}

/// Mutex-guarded roster the host can update from its own callbacks
#[derive(Default)]
pub struct SharedRoster {
    participants: Mutex<Vec<Participant>>,
}

impl SharedRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole roster
    pub fn replace(&self, participants: Vec<Participant>) {
        *self.participants.lock() = participants;
    }

    /// Add or update one entry, keyed by id
    pub fn upsert(&self, participant: Participant) {
        let mut participants = self.participants.lock();
        match participants.iter_mut().find(|p| p.id == participant.id) {
            Some(existing) => *existing = participant,
            None => participants.push(participant),
        }
    }

    /// Remove one entry by id
    pub fn remove(&self, id: ParticipantId) {
        self.participants.lock().retain(|p| p.id != id);
    }
}

impl RosterProvider for SharedRoster {
    fn snapshot(&self) -> Vec<Participant> {
        self.participants.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proxim_core::{ParticipantId, Position3D};

    #[test]
    fn test_shared_roster_upsert_and_remove() {
        let roster = SharedRoster::new();
        let id = ParticipantId::new(1);

        roster.upsert(Participant::live(id, Position3D::zero()));
        assert_eq!(roster.snapshot().len(), 1);

        roster.upsert(Participant::dead(id));
        let snapshot = roster.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert!(!snapshot[0].is_live());

        roster.remove(id);
        assert!(roster.snapshot().is_empty());
    }
}
