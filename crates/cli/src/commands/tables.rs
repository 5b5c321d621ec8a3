use std::path::Path;

use serde::Serialize;
use tournament::{CategoryId, Snapshot, TableAssignment};

use super::{Output, emit};
use crate::error::{CliError, Result};
use crate::snapshot;

/// One pool waiting at a table.
#[derive(Debug, Serialize, PartialEq)]
pub struct QueuedPool {
    pub order: i32,
    pub category: String,
    pub pool_number: i32,
    pub validated: bool,
}

#[derive(Debug, Serialize)]
pub struct TableSchedule {
    pub table_number: i32,
    pub pools: Vec<QueuedPool>,
}

pub async fn handle_assign(
    snapshot_path: &Path,
    category: &str,
    pool_number: i32,
    table_number: i32,
    order: i32,
    output: Option<&Path>,
) -> Result<()> {
    let snapshot = snapshot::load_validated(snapshot_path).await?;

    let updated = assign_table(&snapshot, category, pool_number, table_number, order)?;
    tracing::info!(
        "✓ Pool {} of '{}' runs at table {} (order {})",
        pool_number,
        category,
        table_number,
        order
    );

    snapshot::save(output.unwrap_or(snapshot_path), &updated).await
}

pub async fn handle_validate_pool(
    snapshot_path: &Path,
    category: &str,
    pool_number: i32,
    reopen: bool,
    output: Option<&Path>,
) -> Result<()> {
    let snapshot = snapshot::load_validated(snapshot_path).await?;

    let updated = set_validation(&snapshot, category, pool_number, !reopen)?;
    if reopen {
        tracing::info!("Pool {} of '{}' reopened", pool_number, category);
    } else {
        tracing::info!("✓ Pool {} of '{}' validated", pool_number, category);
    }

    snapshot::save(output.unwrap_or(snapshot_path), &updated).await
}

pub async fn handle_show(snapshot_path: &Path, table_number: i32, output: Option<&Path>) -> Result<()> {
    let snapshot = snapshot::load_validated(snapshot_path).await?;

    let schedule = table_schedule(&snapshot, table_number);
    if schedule.pools.is_empty() {
        tracing::warn!("No pool assigned to table {}", table_number);
    }

    emit(&Output::new(schedule), output).await
}

/// Puts a pool of the named category on a table, or moves it there.
pub fn assign_table(
    snapshot: &Snapshot,
    category: &str,
    pool_number: i32,
    table_number: i32,
    order: i32,
) -> Result<Snapshot> {
    let category_id = category_id(snapshot, category)?;

    if !snapshot
        .participants_in(category_id)
        .iter()
        .any(|p| p.pool_number == Some(pool_number))
    {
        tracing::warn!("Pool {} of '{}' has no participant yet", pool_number, category);
    }

    Ok(snapshot.with_table_assignment(TableAssignment {
        category_id,
        pool_number,
        table_number,
        order,
        validated: false,
    })?)
}

pub fn set_validation(snapshot: &Snapshot, category: &str, pool_number: i32, validated: bool) -> Result<Snapshot> {
    let category_id = category_id(snapshot, category)?;
    Ok(snapshot.with_pool_validation(category_id, pool_number, validated)?)
}

/// Pools of a table in the order they are called.
pub fn table_schedule(snapshot: &Snapshot, table_number: i32) -> TableSchedule {
    let pools = snapshot
        .table_queue(table_number)
        .into_iter()
        .map(|a| QueuedPool {
            order: a.order,
            category: snapshot
                .categories
                .iter()
                .find(|c| c.category_id == a.category_id)
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            pool_number: a.pool_number,
            validated: a.validated,
        })
        .collect();

    TableSchedule { table_number, pools }
}

fn category_id(snapshot: &Snapshot, name: &str) -> Result<CategoryId> {
    snapshot
        .category_by_name(name)
        .map(|c| c.category_id)
        .ok_or_else(|| CliError::UnknownCategory(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tournament::{Category, Participant, Sex, TournamentError};

    fn snapshot() -> Snapshot {
        let participant = |participant_id: i32, category_id: i32, pool_number: i32| Participant {
            participant_id,
            category_id,
            first_name: "Lina".to_string(),
            last_name: format!("Moreau{}", participant_id),
            sex: Sex::F,
            birth_year: Some(2014),
            weight: None,
            club_id: None,
            pool_number: Some(pool_number),
            hors_categorie: false,
        };

        Snapshot {
            categories: vec![
                Category {
                    category_id: 1,
                    name: "Benjamins".to_string(),
                    include_in_stats: true,
                },
                Category {
                    category_id: 2,
                    name: "Minimes".to_string(),
                    include_in_stats: true,
                },
            ],
            clubs: Vec::new(),
            participants: vec![participant(1, 1, 1), participant(2, 1, 2), participant(3, 2, 1)],
            fights: Vec::new(),
            table_assignments: vec![TableAssignment {
                category_id: 2,
                pool_number: 1,
                table_number: 1,
                order: 2,
                validated: true,
            }],
        }
    }

    #[test]
    fn test_assign_then_schedule() {
        let updated = assign_table(&snapshot(), "benjamins", 2, 1, 1).unwrap();
        let updated = assign_table(&updated, "Benjamins", 1, 2, 1).unwrap();

        let schedule = table_schedule(&updated, 1);
        assert_eq!(
            schedule.pools,
            vec![
                QueuedPool {
                    order: 1,
                    category: "Benjamins".to_string(),
                    pool_number: 2,
                    validated: false,
                },
                QueuedPool {
                    order: 2,
                    category: "Minimes".to_string(),
                    pool_number: 1,
                    validated: true,
                },
            ]
        );
        assert_eq!(table_schedule(&updated, 2).pools.len(), 1);
        assert!(table_schedule(&updated, 3).pools.is_empty());
    }

    #[test]
    fn test_validate_and_reopen() {
        let assigned = assign_table(&snapshot(), "Benjamins", 1, 2, 1).unwrap();

        let validated = set_validation(&assigned, "Benjamins", 1, true).unwrap();
        assert!(validated.is_pool_validated(1, 1));

        let reopened = set_validation(&validated, "Benjamins", 1, false).unwrap();
        assert!(!reopened.is_pool_validated(1, 1));
    }

    #[test]
    fn test_validation_needs_a_table() {
        assert!(matches!(
            set_validation(&snapshot(), "Benjamins", 1, true),
            Err(CliError::TournamentError(TournamentError::InvalidRecord(_)))
        ));
        assert!(matches!(
            set_validation(&snapshot(), "Cadets", 1, true),
            Err(CliError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_assign_rejects_table_zero() {
        assert!(matches!(
            assign_table(&snapshot(), "Benjamins", 1, 0, 1),
            Err(CliError::TournamentError(TournamentError::Validation(_)))
        ));
    }
}
