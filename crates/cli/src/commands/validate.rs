use std::path::Path;

use crate::error::Result;
use crate::snapshot::{self, validator::SnapshotValidator};

pub async fn handle_validate(snapshot_path: &Path) -> Result<()> {
    let snapshot = snapshot::load(snapshot_path).await?;

    tracing::info!("Validating snapshot...");
    let report = SnapshotValidator::validate(&snapshot)?;
    report.log_warnings();
    tracing::info!("✓ Validation successful ({} warning(s))", report.warnings.len());

    Ok(())
}
