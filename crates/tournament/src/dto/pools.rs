use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ClubId, ParticipantId};
use crate::services::progress::PoolProgress;
use crate::services::stats::ParticipantStats;

/// One line of a pool's ranking table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub rank: usize,
    pub participant_id: ParticipantId,
    pub name: String,
    pub club_id: Option<ClubId>,
    pub weight: Option<Decimal>,
    #[serde(flatten)]
    pub stats: ParticipantStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolStandings {
    pub pool_number: i32,
    /// Mat table running the pool, once assigned.
    pub table_number: Option<i32>,
    #[serde(flatten)]
    pub progress: PoolProgress,
    pub standings: Vec<Standing>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStandings {
    pub category: String,
    pub pools: Vec<PoolStandings>,
}
