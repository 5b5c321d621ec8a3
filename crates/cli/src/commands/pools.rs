use std::path::Path;

use tournament::{PoolAssignment, Snapshot};

use crate::error::{CliError, Result};
use crate::snapshot;

pub async fn handle_pools(
    snapshot_path: &Path,
    category: Option<&str>,
    first_pool: i32,
    output: Option<&Path>,
) -> Result<()> {
    let snapshot = snapshot::load_validated(snapshot_path).await?;

    let (updated, generated) = regenerate(&snapshot, category, first_pool).inspect_err(|e| {
        if let Some(hint) = failure_hint(e) {
            tracing::error!("{}", hint);
        }
    })?;

    for (name, assignment) in &generated {
        tracing::info!(
            "Category '{}': {} pool(s) {:?}, next pool number {}",
            name,
            assignment.pool_count(),
            assignment.pool_sizes,
            assignment.next_pool_number
        );
    }

    let discarded = snapshot.fights.len() - updated.fights.len();
    if discarded > 0 {
        tracing::warn!("Discarded {} fight(s) recorded against the old pools", discarded);
    }
    let unassigned = snapshot.table_assignments.len() - updated.table_assignments.len();
    if unassigned > 0 {
        tracing::warn!("Removed {} table assignment(s) of the old pools", unassigned);
    }

    snapshot::save(output.unwrap_or(snapshot_path), &updated).await?;
    tracing::info!("✓ Pools generated");

    Ok(())
}

/// What the organiser can do about a failed regeneration, if anything.
pub fn failure_hint(error: &CliError) -> Option<&'static str> {
    match error {
        CliError::TournamentError(e) if e.is_weight_error() => {
            Some("Re-weigh the participant, update the snapshot and run `judo pools` again")
        }
        _ => None,
    }
}

/// Regenerates one named category, or every category when `category` is
/// `None`. Each category numbers its pools from `first_pool`.
pub fn regenerate(
    snapshot: &Snapshot,
    category: Option<&str>,
    first_pool: i32,
) -> Result<(Snapshot, Vec<(String, PoolAssignment)>)> {
    let targets: Vec<_> = match category {
        Some(name) => {
            let found = snapshot
                .category_by_name(name)
                .ok_or_else(|| CliError::UnknownCategory(name.to_string()))?;
            vec![found.clone()]
        }
        None => snapshot.categories.clone(),
    };

    let mut current = snapshot.clone();
    let mut generated = Vec::with_capacity(targets.len());

    for target in targets {
        let (next, assignment) = current.with_regenerated_pools(target.category_id, first_pool)?;
        current = next;
        generated.push((target.name, assignment));
    }

    Ok((current, generated))
}
