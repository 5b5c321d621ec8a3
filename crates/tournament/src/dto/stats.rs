use serde::{Deserialize, Serialize};

use crate::models::Participant;

/// Club line of the standings table, after merging clubs whose names only
/// differ in spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubStanding {
    pub club: String,
    pub total_score: i64,
    pub total_victories: u32,
    pub count: usize,
}

/// Club standings plus the participants still waiting for a scored fight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    pub by_club: Vec<ClubStanding>,
    pub warnings: Vec<Participant>,
}
