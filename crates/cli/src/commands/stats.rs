use std::path::Path;

use tournament::dto::stats::StatsReport;
use tournament::services::stats::stats_report;
use tournament::{FoldingNormalizer, NameNormalizer, Snapshot, StatsScope};

use super::{Output, emit};
use crate::error::Result;
use crate::snapshot;

pub async fn handle_stats(snapshot_path: &Path, output: Option<&Path>) -> Result<()> {
    let snapshot = snapshot::load_validated(snapshot_path).await?;

    let report = build_report(&snapshot, &FoldingNormalizer);

    if !report.warnings.is_empty() {
        tracing::warn!("{} participant(s) have no scored fight yet", report.warnings.len());
    }
    tracing::info!("Standings computed for {} club(s)", report.by_club.len());

    emit(&Output::new(report), output).await
}

/// Club standings over the categories that count for stats.
pub fn build_report(snapshot: &Snapshot, normalizer: &dyn NameNormalizer) -> StatsReport {
    let scope = StatsScope::from_categories(&snapshot.categories);
    let participants = scope.filter(&snapshot.participants);

    tracing::debug!(
        "{} of {} participants in stats scope",
        participants.len(),
        snapshot.participants.len()
    );

    stats_report(&participants, &snapshot.fights, &snapshot.clubs, normalizer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tournament::{Category, Club, Fight, Participant, Sex};

    #[test]
    fn test_exhibition_category_left_out() {
        let participant = |participant_id: i32, category_id: i32| Participant {
            participant_id,
            category_id,
            first_name: "Nina".to_string(),
            last_name: format!("Girard{}", participant_id),
            sex: Sex::F,
            birth_year: Some(2012),
            weight: Some(Decimal::from(38)),
            club_id: Some(1),
            pool_number: Some(1),
            hors_categorie: false,
        };
        let fight = |fight_id: i32, category_id: i32, a: i32, b: i32| Fight {
            fight_id,
            category_id,
            fighter1_id: a,
            fighter2_id: b,
            score1: 10,
            score2: 1,
            winner_id: Some(a),
        };

        let snapshot = Snapshot {
            categories: vec![
                Category {
                    category_id: 1,
                    name: "Minimes".to_string(),
                    include_in_stats: true,
                },
                Category {
                    category_id: 2,
                    name: "Démonstration".to_string(),
                    include_in_stats: false,
                },
            ],
            clubs: vec![Club {
                club_id: 1,
                name: "Judo Club Massy".to_string(),
            }],
            participants: vec![participant(1, 1), participant(2, 1), participant(3, 2), participant(4, 2)],
            fights: vec![fight(1, 1, 1, 2), fight(2, 2, 3, 4)],
            table_assignments: Vec::new(),
        };

        let report = build_report(&snapshot, &FoldingNormalizer);

        assert_eq!(report.by_club.len(), 1);
        assert_eq!(report.by_club[0].club, "Judo Club Massy");
        assert_eq!(report.by_club[0].total_score, 11);
        assert_eq!(report.by_club[0].total_victories, 1);
        assert_eq!(report.by_club[0].count, 2);
        assert!(report.warnings.is_empty());
    }
}
