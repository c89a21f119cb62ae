//! Error types for the proximity voice system

use thiserror::Error;

use crate::ParticipantId;

/// Errors surfaced by the override store adapter
///
/// None of these are fatal: a refused pair is skipped and re-derived on
/// the next evaluation cycle.
#[derive(Error, Debug)]
pub enum ProximityError {
    #[error("unknown participant: {0}")]
    UnknownParticipant(ParticipantId),

    #[error("override store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Result type for proximity operations
pub type ProximityResult<T> = Result<T, ProximityError>;
