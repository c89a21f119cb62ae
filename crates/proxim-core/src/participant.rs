//! Participant snapshot values
//!
//! A participant is owned by the external roster provider. The engine
//! consumes it as a read-only value for the duration of one evaluation
//! cycle; positions are never cached across cycles.

use crate::{ParticipantId, Position3D};

/// Per-cycle snapshot of one roster entry
#[derive(Debug, Clone, Copy)]
pub struct Participant {
    /// Stable identifier
    pub id: ParticipantId,
    /// Entity is still valid on the host side
    pub is_valid: bool,
    /// Bots never hold proximity overrides
    pub is_bot: bool,
    /// Spectator/broadcast observers never hold proximity overrides
    pub is_observer: bool,
    /// Has an in-world body; position is meaningless without one
    pub has_embodiment: bool,
    /// Alive per the host's game state
    pub is_alive: bool,
    /// Globally muted by some other system
    pub is_muted: bool,
    /// World position, only meaningful when live
    pub position: Position3D,
}

impl Participant {
    /// Alive, embodied, unmuted participant at a position
    pub fn live(id: ParticipantId, position: Position3D) -> Self {
        Participant {
            id,
            is_valid: true,
            is_bot: false,
            is_observer: false,
            has_embodiment: true,
            is_alive: true,
            is_muted: false,
            position,
        }
    }

    /// Valid participant with no usable body
    pub fn dead(id: ParticipantId) -> Self {
        Participant {
            id,
            is_valid: true,
            is_bot: false,
            is_observer: false,
            has_embodiment: false,
            is_alive: false,
            is_muted: false,
            position: Position3D::zero(),
        }
    }

    /// Mark as globally muted
    pub fn muted(mut self) -> Self {
        self.is_muted = true;
        self
    }

    /// Mark as a bot
    pub fn bot(mut self) -> Self {
        self.is_bot = true;
        self
    }

    /// Mark as a spectator/broadcast observer
    pub fn observer(mut self) -> Self {
        self.is_observer = true;
        self
    }

    /// Mark as no longer valid on the host side
    pub fn invalid(mut self) -> Self {
        self.is_valid = false;
        self
    }

    /// Drop the embodiment while keeping whatever the alive flag says
    pub fn without_embodiment(mut self) -> Self {
        self.has_embodiment = false;
        self
    }

    /// Valid human participant that can hold overrides at all
    #[inline]
    pub fn is_audible_candidate(&self) -> bool {
        self.is_valid && !self.is_bot && !self.is_observer
    }

    /// Alive with a valid embodiment - eligible for proximity geometry.
    /// A stale alive flag without an embodiment counts as not live.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.is_alive && self.has_embodiment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_participant_predicates() {
        let p = Participant::live(ParticipantId::new(1), Position3D::zero());

        assert!(p.is_audible_candidate());
        assert!(p.is_live());
        assert!(!p.is_muted);
    }

    #[test]
    fn test_dead_participant_is_candidate_but_not_live() {
        let p = Participant::dead(ParticipantId::new(2));

        assert!(p.is_audible_candidate());
        assert!(!p.is_live());
    }

    #[test]
    fn test_stale_alive_flag_without_embodiment() {
        let p = Participant::live(ParticipantId::new(3), Position3D::zero()).without_embodiment();

        assert!(p.is_alive);
        assert!(!p.is_live());
    }

    #[test]
    fn test_exclusion_flags() {
        let bot = Participant::live(ParticipantId::new(4), Position3D::zero()).bot();
        let observer = Participant::live(ParticipantId::new(5), Position3D::zero()).observer();
        let invalid = Participant::live(ParticipantId::new(6), Position3D::zero()).invalid();

        assert!(!bot.is_audible_candidate());
        assert!(!observer.is_audible_candidate());
        assert!(!invalid.is_audible_candidate());
    }
}
