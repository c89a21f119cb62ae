//! Audibility override state
//!
//! An override is directional: (listener, speaker) and (speaker, listener)
//! are independent pairs. Self-pairs are never evaluated or written.

/// Audibility override for an ordered (listener, speaker) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudibilityState {
    /// No explicit override in force - host-native behavior applies
    Default,
    /// Listener hears speaker regardless of host defaults
    Hear,
    /// Listener does not hear speaker
    Mute,
}

impl Default for AudibilityState {
    fn default() -> Self {
        Self::Default
    }
}

impl AudibilityState {
    /// True when no explicit override is in force
    #[inline]
    pub fn is_default(self) -> bool {
        matches!(self, AudibilityState::Default)
    }
}
