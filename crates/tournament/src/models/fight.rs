use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{CategoryId, ParticipantId};

pub type FightId = i32;

/// One recorded bout between two pool members.
///
/// The winner is declared by the table referee and is not derived from the
/// scores. A fight without a winner counts as unplayed for aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_fight_sides"))]
pub struct Fight {
    pub fight_id: FightId,
    pub category_id: CategoryId,
    pub fighter1_id: ParticipantId,
    pub fighter2_id: ParticipantId,

    #[validate(range(min = 0, message = "Scores cannot be negative"))]
    #[serde(default)]
    pub score1: i32,

    #[validate(range(min = 0, message = "Scores cannot be negative"))]
    #[serde(default)]
    pub score2: i32,

    pub winner_id: Option<ParticipantId>,
}

impl Fight {
    pub fn is_played(&self) -> bool {
        self.winner_id.is_some()
    }

    pub fn involves(&self, participant_id: ParticipantId) -> bool {
        self.fighter1_id == participant_id || self.fighter2_id == participant_id
    }

    /// The pair of fighters with the lower id first, so that (a, b) and (b, a)
    /// compare equal.
    pub fn pairing_key(&self) -> (ParticipantId, ParticipantId) {
        if self.fighter1_id <= self.fighter2_id {
            (self.fighter1_id, self.fighter2_id)
        } else {
            (self.fighter2_id, self.fighter1_id)
        }
    }
}

fn validate_fight_sides(fight: &Fight) -> Result<(), ValidationError> {
    if fight.fighter1_id == fight.fighter2_id {
        return Err(side_error(
            "same_fighter",
            "A participant cannot fight themselves",
        ));
    }

    if let Some(winner) = fight.winner_id
        && !fight.involves(winner)
    {
        return Err(side_error(
            "winner_not_a_fighter",
            "Winner must be one of the two fighters",
        ));
    }

    Ok(())
}

fn side_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fight(fighter1_id: i32, fighter2_id: i32, winner_id: Option<i32>) -> Fight {
        Fight {
            fight_id: 1,
            category_id: 1,
            fighter1_id,
            fighter2_id,
            score1: 10,
            score2: 0,
            winner_id,
        }
    }

    #[test]
    fn test_valid_fight() {
        assert!(fight(1, 2, Some(1)).validate().is_ok());
        assert!(fight(1, 2, None).validate().is_ok());
    }

    #[test]
    fn test_same_fighter_rejected() {
        assert!(fight(3, 3, None).validate().is_err());
    }

    #[test]
    fn test_foreign_winner_rejected() {
        assert!(fight(1, 2, Some(7)).validate().is_err());
    }

    #[test]
    fn test_negative_score_rejected() {
        let mut f = fight(1, 2, Some(2));
        f.score2 = -1;
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_pairing_key_is_symmetric() {
        assert_eq!(fight(4, 2, None).pairing_key(), fight(2, 4, None).pairing_key());
    }
}
