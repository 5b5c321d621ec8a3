use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{Fight, Participant};
use crate::services::pairings::round_robin_pairings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolStatus {
    NotStarted,
    InProgress,
    Finished,
    /// Results signed off at the table; no longer editable.
    Validated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolProgress {
    pub status: PoolStatus,
    pub played_count: usize,
    pub total_fights: usize,
}

/// How far a pool is through its round robin.
///
/// `members` must be the weight-ordered pool. A pairing counts as played as
/// soon as any fight record exists between the two members, in either order;
/// tables delete 0-0 records instead of keeping them.
pub fn pool_progress(members: &[&Participant], fights: &[Fight], validated: bool) -> PoolProgress {
    if validated {
        return PoolProgress {
            status: PoolStatus::Validated,
            played_count: 0,
            total_fights: 0,
        };
    }

    let pairings = round_robin_pairings(members.len());
    let recorded: HashSet<_> = fights.iter().map(Fight::pairing_key).collect();

    let played_count = pairings
        .iter()
        .filter(|(a, b)| {
            let (id_a, id_b) = (members[a - 1].participant_id, members[b - 1].participant_id);
            recorded.contains(&(id_a.min(id_b), id_a.max(id_b)))
        })
        .count();

    let status = if pairings.is_empty() || played_count == 0 {
        PoolStatus::NotStarted
    } else if played_count == pairings.len() {
        PoolStatus::Finished
    } else {
        PoolStatus::InProgress
    };

    PoolProgress {
        status,
        played_count,
        total_fights: pairings.len(),
    }
}
