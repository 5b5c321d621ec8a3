use std::path::Path;

use tournament::dto::pools::{CategoryStandings, PoolStandings};
use tournament::services::partition::group_by_pool;
use tournament::services::progress::pool_progress;
use tournament::services::ranking::rank_participants;
use tournament::{Snapshot, aggregate};

use super::{Output, emit};
use crate::error::{CliError, Result};
use crate::snapshot;

pub async fn handle_standings(snapshot_path: &Path, category: &str, output: Option<&Path>) -> Result<()> {
    let snapshot = snapshot::load_validated(snapshot_path).await?;

    let standings = build_standings(&snapshot, category)?;

    for pool in &standings.pools {
        tracing::info!(
            "Pool {}: {:?} ({}/{} fights)",
            pool.pool_number,
            pool.progress.status,
            pool.progress.played_count,
            pool.progress.total_fights
        );
    }

    emit(&Output::new(standings), output).await
}

/// Progress and ranking of every pool in a category. Pools signed off at their
/// table report as validated.
pub fn build_standings(snapshot: &Snapshot, category: &str) -> Result<CategoryStandings> {
    let category = snapshot
        .category_by_name(category)
        .ok_or_else(|| CliError::UnknownCategory(category.to_string()))?;

    let participants = snapshot.participants_in(category.category_id);
    let fights = snapshot.fights_in(category.category_id);
    let stats = aggregate(&participants, &fights);

    let pools = group_by_pool(&participants)
        .into_iter()
        .map(|(pool_number, members)| {
            let table = snapshot.table_assignment(category.category_id, pool_number);
            PoolStandings {
                pool_number,
                table_number: table.map(|t| t.table_number),
                progress: pool_progress(&members, &fights, table.is_some_and(|t| t.validated)),
                standings: rank_participants(&members, &stats),
            }
        })
        .collect();

    Ok(CategoryStandings {
        category: category.name.clone(),
        pools,
    })
}
