use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{CategoryId, ClubId};

pub type ParticipantId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    M,
    F,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M => "M",
            Self::F => "F",
        }
    }
}

/// A registered judoka.
///
/// `pool_number` is owned by the partitioner: it is overwritten every time the
/// pools of the participant's category are regenerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Participant {
    pub participant_id: ParticipantId,
    pub category_id: CategoryId,

    #[validate(length(
        min = 1,
        max = 255,
        message = "First name must be between 1 and 255 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Last name must be between 1 and 255 characters"
    ))]
    pub last_name: String,

    pub sex: Sex,

    #[validate(range(min = 1900, max = 2100))]
    pub birth_year: Option<i32>,

    /// Weigh-in result in kilograms.
    pub weight: Option<Decimal>,

    pub club_id: Option<ClubId>,

    pub pool_number: Option<i32>,

    /// Registered outside the category their age would normally place them in.
    #[serde(default)]
    pub hors_categorie: bool,
}

impl Participant {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
