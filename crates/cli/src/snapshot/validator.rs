use std::collections::HashSet;

use ::validator::Validate;
use rust_decimal::Decimal;
use tournament::Snapshot;
use tracing::warn;

use crate::error::{CliError, Result};

/// Heaviest weigh-in we accept without flagging it as a probable typo.
const MAX_PLAUSIBLE_WEIGHT_KG: i64 = 150;

pub struct SnapshotValidator;

impl SnapshotValidator {
    pub fn validate(snapshot: &Snapshot) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        let mut category_ids = HashSet::new();
        for category in &snapshot.categories {
            if category.name.trim().is_empty() {
                report
                    .errors
                    .push(format!("Category {} has an empty name", category.category_id));
            }
            if !category_ids.insert(category.category_id) {
                report
                    .errors
                    .push(format!("Duplicate category id: {}", category.category_id));
            }
        }

        let mut club_ids = HashSet::new();
        for club in &snapshot.clubs {
            if !club_ids.insert(club.club_id) {
                report.errors.push(format!("Duplicate club id: {}", club.club_id));
            }
        }

        let mut participant_ids = HashSet::new();
        for participant in &snapshot.participants {
            let label = format!("{}. {}", participant.participant_id, participant.full_name());

            if !participant_ids.insert(participant.participant_id) {
                report
                    .errors
                    .push(format!("Duplicate participant id: {}", participant.participant_id));
            }
            if let Err(e) = participant.validate() {
                report.errors.push(format!("Participant '{}': {}", label, e));
            }
            if !category_ids.contains(&participant.category_id) {
                report.errors.push(format!(
                    "Participant '{}' references unknown category {}",
                    label, participant.category_id
                ));
            }

            match participant.weight {
                None => report
                    .warnings
                    .push(format!("Participant '{}' is missing weight", label)),
                Some(weight) if weight <= Decimal::ZERO => report
                    .errors
                    .push(format!("Participant '{}' has non-positive weight {}", label, weight)),
                Some(weight) if weight > Decimal::from(MAX_PLAUSIBLE_WEIGHT_KG) => report
                    .warnings
                    .push(format!("Participant '{}' weighs {} kg, check the weigh-in", label, weight)),
                Some(_) => {}
            }

            match participant.club_id {
                None => report
                    .warnings
                    .push(format!("Participant '{}' has no club", label)),
                Some(club_id) if !club_ids.contains(&club_id) => report.warnings.push(format!(
                    "Participant '{}' references unknown club {}",
                    label, club_id
                )),
                Some(_) => {}
            }
        }

        let mut fight_ids = HashSet::new();
        for fight in &snapshot.fights {
            if !fight_ids.insert(fight.fight_id) {
                report.errors.push(format!("Duplicate fight id: {}", fight.fight_id));
            }
            if let Err(e) = fight.validate() {
                report
                    .errors
                    .push(format!("Fight {}: {}", fight.fight_id, e));
            }
            for fighter_id in [fight.fighter1_id, fight.fighter2_id] {
                if !participant_ids.contains(&fighter_id) {
                    report.warnings.push(format!(
                        "Fight {} references unknown participant {}",
                        fight.fight_id, fighter_id
                    ));
                }
            }
        }

        let mut assigned_pools = HashSet::new();
        for assignment in &snapshot.table_assignments {
            let label = format!(
                "Pool {} of category {}",
                assignment.pool_number, assignment.category_id
            );

            if !assigned_pools.insert((assignment.category_id, assignment.pool_number)) {
                report.errors.push(format!("{} is assigned to several tables", label));
            }
            if let Err(e) = assignment.validate() {
                report.errors.push(format!("{}: {}", label, e));
            }
            if !category_ids.contains(&assignment.category_id) {
                report.errors.push(format!("{} references an unknown category", label));
            } else if !snapshot.participants.iter().any(|p| {
                p.category_id == assignment.category_id && p.pool_number == Some(assignment.pool_number)
            }) {
                report.warnings.push(format!(
                    "{} is on table {} but has no participant",
                    label, assignment.table_number
                ));
            }
        }

        for category in &snapshot.categories {
            if !snapshot
                .participants
                .iter()
                .any(|p| p.category_id == category.category_id)
            {
                report
                    .warnings
                    .push(format!("Category '{}' has no participants", category.name));
            }
        }

        if !report.errors.is_empty() {
            Err(CliError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tournament::{Category, Club, Fight, Participant, Sex, TableAssignment};

    fn snapshot() -> Snapshot {
        Snapshot {
            categories: vec![
                Category {
                    category_id: 1,
                    name: "Mini-poussins".to_string(),
                    include_in_stats: true,
                },
                Category {
                    category_id: 2,
                    name: "Poussins".to_string(),
                    include_in_stats: true,
                },
            ],
            clubs: vec![Club {
                club_id: 1,
                name: "Judo Club Massy".to_string(),
            }],
            participants: vec![
                Participant {
                    participant_id: 1,
                    category_id: 1,
                    first_name: "Jules".to_string(),
                    last_name: "Moreau".to_string(),
                    sex: Sex::M,
                    birth_year: Some(2018),
                    weight: Some(Decimal::new(225, 1)),
                    club_id: Some(1),
                    pool_number: Some(1),
                    hors_categorie: false,
                },
                Participant {
                    participant_id: 2,
                    category_id: 1,
                    first_name: "Adam".to_string(),
                    last_name: "Roux".to_string(),
                    sex: Sex::M,
                    birth_year: Some(2018),
                    weight: None,
                    club_id: None,
                    pool_number: None,
                    hors_categorie: false,
                },
            ],
            fights: vec![Fight {
                fight_id: 1,
                category_id: 1,
                fighter1_id: 1,
                fighter2_id: 3,
                score1: 0,
                score2: 0,
                winner_id: None,
            }],
            table_assignments: vec![TableAssignment {
                category_id: 1,
                pool_number: 1,
                table_number: 1,
                order: 1,
                validated: false,
            }],
        }
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let report = SnapshotValidator::validate(&snapshot()).unwrap();

        assert!(report.errors.is_empty());
        assert!(report.warnings.contains(&"Participant '2. Adam Roux' is missing weight".to_string()));
        assert!(report.warnings.contains(&"Participant '2. Adam Roux' has no club".to_string()));
        assert!(report.warnings.contains(&"Fight 1 references unknown participant 3".to_string()));
        assert!(report.warnings.contains(&"Category 'Poussins' has no participants".to_string()));
    }

    #[test]
    fn test_duplicate_participant_is_error() {
        let mut snapshot = snapshot();
        snapshot.participants[1].participant_id = 1;

        let err = SnapshotValidator::validate(&snapshot).unwrap_err();
        assert!(err.to_string().contains("Duplicate participant id: 1"));
    }

    #[test]
    fn test_invalid_fight_is_error() {
        let mut snapshot = snapshot();
        snapshot.fights[0].fighter2_id = 1;

        assert!(matches!(
            SnapshotValidator::validate(&snapshot),
            Err(CliError::ValidationError(_))
        ));
    }

    #[test]
    fn test_empty_first_name_is_error() {
        let mut snapshot = snapshot();
        snapshot.participants[0].first_name.clear();

        assert!(SnapshotValidator::validate(&snapshot).is_err());
    }

    #[test]
    fn test_table_assignment_checks() {
        let mut snapshot = snapshot();
        snapshot.table_assignments.push(TableAssignment {
            category_id: 1,
            pool_number: 4,
            table_number: 2,
            order: 1,
            validated: false,
        });
        let report = SnapshotValidator::validate(&snapshot).unwrap();
        assert!(report
            .warnings
            .contains(&"Pool 4 of category 1 is on table 2 but has no participant".to_string()));

        snapshot.table_assignments[1].pool_number = 1;
        let err = SnapshotValidator::validate(&snapshot).unwrap_err();
        assert!(err.to_string().contains("Pool 1 of category 1 is assigned to several tables"));

        snapshot.table_assignments.truncate(1);
        snapshot.table_assignments[0].category_id = 9;
        let err = SnapshotValidator::validate(&snapshot).unwrap_err();
        assert!(err.to_string().contains("references an unknown category"));
    }
}
