pub mod validator;

use std::path::Path;

use tournament::Snapshot;

use crate::error::Result;
use self::validator::SnapshotValidator;

pub async fn load(path: &Path) -> Result<Snapshot> {
    tracing::info!("Loading snapshot from: {}", path.display());

    let json_content = tokio::fs::read_to_string(path).await?;
    let snapshot: Snapshot = serde_json::from_str(&json_content)?;

    tracing::info!(
        "Loaded {} categories, {} participants, {} fights",
        snapshot.categories.len(),
        snapshot.participants.len(),
        snapshot.fights.len()
    );

    Ok(snapshot)
}

/// Loads the snapshot and runs the full validation, logging its warnings.
pub async fn load_validated(path: &Path) -> Result<Snapshot> {
    let snapshot = load(path).await?;
    SnapshotValidator::validate(&snapshot)?.log_warnings();
    Ok(snapshot)
}

pub async fn save(path: &Path, snapshot: &Snapshot) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_string_pretty(snapshot)?;
    tokio::fs::write(path, json).await?;

    tracing::info!("Snapshot written to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    const PARTICIPANT: &str = r#"{"participant_id": 1, "category_id": 1, "first_name": "Lina", "last_name": "Roche", "sex": "F", "weight": 28, "club_id": 1}"#;

    async fn write_snapshot(name: &str, participants: &[&str]) -> std::path::PathBuf {
        let json = format!(
            r#"{{"categories": [{{"category_id": 1, "name": "Poussins"}}], "clubs": [{{"club_id": 1, "name": "JC Massy"}}], "participants": [{}]}}"#,
            participants.join(",")
        );
        let path = std::env::temp_dir().join(format!("judo-{}-{}.json", name, std::process::id()));
        tokio::fs::write(&path, json).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_validated_accepts_clean_snapshot() {
        let path = write_snapshot("clean", &[PARTICIPANT]).await;

        let snapshot = load_validated(&path).await.unwrap();
        assert_eq!(snapshot.participants.len(), 1);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_validated_rejects_duplicate_ids() {
        let path = write_snapshot("duplicate", &[PARTICIPANT, PARTICIPANT]).await;

        // Plain loading succeeds; only validation catches the repeated id.
        assert!(load(&path).await.is_ok());
        assert!(matches!(load_validated(&path).await, Err(CliError::ValidationError(_))));

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let path = write_snapshot("roundtrip", &[PARTICIPANT]).await;
        let snapshot = load(&path).await.unwrap();

        save(&path, &snapshot).await.unwrap();
        let reloaded = load(&path).await.unwrap();
        assert_eq!(reloaded.participants, snapshot.participants);

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
