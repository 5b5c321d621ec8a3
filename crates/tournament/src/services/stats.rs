use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::dto::stats::{ClubStanding, StatsReport};
use crate::models::{Club, ClubId, Fight, Participant, ParticipantId};
use crate::services::normalization::NameNormalizer;

/// Label of the bucket for participants without a resolvable club.
pub const UNKNOWN_CLUB: &str = "Unknown";

/// Derived per-participant totals. Never stored; always recomputed from the
/// current fights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantStats {
    pub score: i64,
    pub victories: u32,
    /// At least one fight involving the participant has a declared winner.
    pub has_fights: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubStats {
    /// `None` is the bucket of participants without a club.
    pub club_id: Option<ClubId>,
    pub total_score: i64,
    pub total_victories: u32,
    pub count: usize,
}

/// Sums scores and victories per participant.
///
/// A fight side whose fighter is not among `participants` is skipped; stale or
/// partial fight lists are expected and are not an error.
pub fn aggregate(participants: &[Participant], fights: &[Fight]) -> HashMap<ParticipantId, ParticipantStats> {
    let mut stats: HashMap<ParticipantId, ParticipantStats> = participants
        .iter()
        .map(|p| (p.participant_id, ParticipantStats::default()))
        .collect();

    for fight in fights {
        for (fighter_id, score) in [(fight.fighter1_id, fight.score1), (fight.fighter2_id, fight.score2)] {
            let Some(entry) = stats.get_mut(&fighter_id) else {
                trace!("Fight {} references unknown fighter {}", fight.fight_id, fighter_id);
                continue;
            };

            entry.score += i64::from(score);
            if fight.winner_id == Some(fighter_id) {
                entry.victories += 1;
            }
            if fight.is_played() {
                entry.has_fights = true;
            }
        }
    }

    stats
}

/// Rolls participant stats up per club, ordered by club id with the
/// club-less bucket first.
pub fn club_stats(participants: &[Participant], stats: &HashMap<ParticipantId, ParticipantStats>) -> Vec<ClubStats> {
    let mut by_club: HashMap<Option<ClubId>, ClubStats> = HashMap::new();

    for participant in participants {
        let participant_stats = stats.get(&participant.participant_id).copied().unwrap_or_default();
        let club = by_club.entry(participant.club_id).or_insert_with(|| ClubStats {
            club_id: participant.club_id,
            total_score: 0,
            total_victories: 0,
            count: 0,
        });

        club.total_score += participant_stats.score;
        club.total_victories += participant_stats.victories;
        club.count += 1;
    }

    let mut clubs: Vec<ClubStats> = by_club.into_values().collect();
    clubs.sort_by_key(|c| c.club_id);
    clubs
}

/// Participants with a zero score and no played fight.
///
/// Someone who lost every fight without scoring shows up here too; the
/// standings screen relies on exactly this rule.
pub fn warnings(participants: &[Participant], stats: &HashMap<ParticipantId, ParticipantStats>) -> Vec<Participant> {
    participants
        .iter()
        .filter(|p| {
            let s = stats.get(&p.participant_id).copied().unwrap_or_default();
            s.score == 0 && !s.has_fights
        })
        .cloned()
        .collect()
}

/// Club totals keyed by display name. Clubs whose names normalize to the same
/// key are merged; the first club (lowest id) names the merged line.
/// Participants without a resolvable club form their own line, labelled
/// [`UNKNOWN_CLUB`] and listed last, even if a real club carries that name.
pub fn club_standings(
    participants: &[Participant],
    stats: &HashMap<ParticipantId, ParticipantStats>,
    clubs: &[Club],
    normalizer: &dyn NameNormalizer,
) -> Vec<ClubStanding> {
    let names: HashMap<ClubId, &str> = clubs.iter().map(|c| (c.club_id, c.name.as_str())).collect();
    // `None` is the club-less line
    let mut merged: HashMap<Option<String>, ClubStanding> = HashMap::new();

    for club in club_stats(participants, stats) {
        let name = club.club_id.and_then(|id| names.get(&id).copied());
        let key = name.map(|n| normalizer.normalize(n));

        let standing = merged.entry(key).or_insert_with(|| ClubStanding {
            club: name.unwrap_or(UNKNOWN_CLUB).to_string(),
            total_score: 0,
            total_victories: 0,
            count: 0,
        });
        standing.total_score += club.total_score;
        standing.total_victories += club.total_victories;
        standing.count += club.count;
    }

    let mut standings: Vec<(Option<String>, ClubStanding)> = merged.into_iter().collect();
    standings.sort_by(|(a_key, a), (b_key, b)| {
        (a_key.is_none(), &a.club).cmp(&(b_key.is_none(), &b.club))
    });
    standings.into_iter().map(|(_, standing)| standing).collect()
}

pub fn stats_report(
    participants: &[Participant],
    fights: &[Fight],
    clubs: &[Club],
    normalizer: &dyn NameNormalizer,
) -> StatsReport {
    let stats = aggregate(participants, fights);

    StatsReport {
        by_club: club_standings(participants, &stats, clubs, normalizer),
        warnings: warnings(participants, &stats),
    }
}
