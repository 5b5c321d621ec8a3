pub mod pools;
pub mod standings;
pub mod stats;
pub mod tables;
pub mod validate;

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;

/// Envelope for every JSON document the CLI emits.
#[derive(Debug, Serialize)]
pub struct Output<T> {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self {
            generated_at: Utc::now(),
            data,
        }
    }
}

/// Writes `value` as pretty JSON to `output`, or to stdout when no file is given.
pub async fn emit<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;

    match output {
        Some(path) => {
            tokio::fs::write(path, json).await?;
            tracing::info!("Written to: {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
