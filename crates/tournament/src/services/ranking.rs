use std::cmp::Reverse;
use std::collections::HashMap;

use crate::dto::pools::Standing;
use crate::models::{Participant, ParticipantId};
use crate::services::stats::ParticipantStats;

/// Orders participants by victories, then score, highest first. Ties keep the
/// input order.
pub fn rank_participants(
    participants: &[&Participant],
    stats: &HashMap<ParticipantId, ParticipantStats>,
) -> Vec<Standing> {
    let mut entries: Vec<(&Participant, ParticipantStats)> = participants
        .iter()
        .map(|p| (*p, stats.get(&p.participant_id).copied().unwrap_or_default()))
        .collect();

    entries.sort_by_key(|(_, s)| (Reverse(s.victories), Reverse(s.score)));

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (participant, stats))| Standing {
            rank: i + 1,
            participant_id: participant.participant_id,
            name: participant.full_name(),
            club_id: participant.club_id,
            weight: participant.weight,
            stats,
        })
        .collect()
}
