use serde::{Deserialize, Serialize};

pub type ClubId = i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub club_id: ClubId,
    pub name: String,
}
