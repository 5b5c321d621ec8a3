use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::ParticipantId;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("Participant {0} has no weight")]
    MissingWeight(ParticipantId),

    #[error("Participant {participant_id} has invalid weight {weight}")]
    InvalidWeight {
        participant_id: ParticipantId,
        weight: Decimal,
    },

    #[error("Pool numbers start at 1, got {0}")]
    InvalidPoolNumber(i32),

    #[error("Pool numbers past {0} do not fit")]
    PoolNumberOverflow(i32),

    #[error("Participant {0} appears more than once")]
    DuplicateParticipant(ParticipantId),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

pub type Result<T> = std::result::Result<T, TournamentError>;

impl TournamentError {
    /// True for errors caused by a participant's weight, which the caller can
    /// fix by re-weighing the athlete before regenerating pools.
    pub fn is_weight_error(&self) -> bool {
        matches!(
            self,
            TournamentError::MissingWeight(_) | TournamentError::InvalidWeight { .. }
        )
    }
}
