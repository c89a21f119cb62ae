//! Override store capability
//!
//! Every call is a direct pass-through to host state - no caching, no
//! batching. Calling `set` with the value already in force is a legal
//! no-op; callers avoid redundant writes as a performance heuristic, not
//! for correctness.

use std::sync::Arc;

use proxim_core::{AudibilityState, ParticipantId, ProximityResult};

/// Read/write access to directional audibility overrides
///
/// An error means the pair cannot be addressed right now (for example a
/// stale participant id on the host side). Callers must skip the pair and
/// continue; the next cycle re-derives it from scratch.
pub trait OverrideStore {
    /// Current override for the ordered (listener, speaker) pair
    fn get(
        &self,
        listener: ParticipantId,
        speaker: ParticipantId,
    ) -> ProximityResult<AudibilityState>;

    /// Replace the override for the ordered (listener, speaker) pair
    fn set(
        &self,
        listener: ParticipantId,
        speaker: ParticipantId,
        state: AudibilityState,
    ) -> ProximityResult<()>;
}

impl<S: OverrideStore + ?Sized> OverrideStore for &S {
    fn get(
        &self,
        listener: ParticipantId,
        speaker: ParticipantId,
    ) -> ProximityResult<AudibilityState> {
        (**self).get(listener, speaker)
    }

    fn set(
        &self,
        listener: ParticipantId,
        speaker: ParticipantId,
        state: AudibilityState,
    ) -> ProximityResult<()> {
        (**self).set(listener, speaker, state)
    }
}

impl<S: OverrideStore + ?Sized> OverrideStore for Arc<S> {
    fn get(
        &self,
        listener: ParticipantId,
        speaker: ParticipantId,
    ) -> ProximityResult<AudibilityState> {
        (**self).get(listener, speaker)
    }

    fn set(
        &self,
        listener: ParticipantId,
        speaker: ParticipantId,
        state: AudibilityState,
    ) -> ProximityResult<()> {
        (**self).set(listener, speaker, state)
    }
}
