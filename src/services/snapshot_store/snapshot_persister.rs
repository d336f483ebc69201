use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{error, info};

use super::types::{
    persist_error::PersistError,
    persisted_snapshot::{PersistedSnapshot, SnapshotMetadata},
};
use crate::services::transit_service::{
    query::{SOURCE_DESCRIPTION, SOURCE_LABEL},
    types::vehicle_positions_document::{vehicle_positions_of, VehiclePositionsDocument},
};

pub const SNAPSHOT_FILE_NAME: &str = "train.json5";

#[derive(Clone)]
pub struct SnapshotPersisterConfig {
    pub output_dir: PathBuf,
    pub api_endpoint: String,
}

#[derive(Clone)]
pub struct SnapshotPersister {
    config: SnapshotPersisterConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersistOutcome {
    pub path: PathBuf,
    pub vehicle_count: usize,
    pub bytes: u64,
}

impl SnapshotPersister {
    pub fn new(config: SnapshotPersisterConfig) -> Self {
        Self { config }
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.config.output_dir.join(SNAPSHOT_FILE_NAME)
    }

    /// Returns true only when the snapshot file is on disk after writing.
    pub async fn persist(&self, document: Option<&VehiclePositionsDocument>) -> bool {
        match self.try_persist(document).await {
            Ok(_) => true,
            Err(e) => {
                error!("Failed to save snapshot: {}", e);
                false
            }
        }
    }

    pub async fn try_persist(
        &self,
        document: Option<&VehiclePositionsDocument>,
    ) -> Result<PersistOutcome, PersistError> {
        let document = document.ok_or(PersistError::NothingToPersist)?;

        let snapshot = self.build_snapshot(document, Utc::now());
        let contents = serde_json::to_string_pretty(&snapshot)?;

        let path = self.snapshot_path();
        tokio::fs::create_dir_all(&self.config.output_dir)
            .await
            .map_err(|source| PersistError::Write {
                path: self.config.output_dir.clone(),
                source,
            })?;

        let existed = tokio::fs::try_exists(&path).await.unwrap_or(false);
        info!(
            "File {} {} before writing",
            path.display(),
            if existed { "exists" } else { "does not exist" }
        );

        write_replacing(&path, contents.as_bytes()).await?;

        let bytes = match tokio::fs::metadata(&path).await {
            Ok(meta) => meta.len(),
            Err(_) => return Err(PersistError::Verification(path)),
        };

        info!(
            "Successfully saved {} vehicles to {} ({} bytes)",
            snapshot.metadata.vehicle_count,
            path.display(),
            bytes
        );

        Ok(PersistOutcome {
            path,
            vehicle_count: snapshot.metadata.vehicle_count,
            bytes,
        })
    }

    pub fn build_snapshot(
        &self,
        document: &VehiclePositionsDocument,
        fetch_time: DateTime<Utc>,
    ) -> PersistedSnapshot {
        let raw = document.raw();

        PersistedSnapshot {
            metadata: SnapshotMetadata {
                fetch_time: fetch_time.to_rfc3339_opts(SecondsFormat::Millis, true),
                source: SOURCE_LABEL.to_string(),
                api_endpoint: self.config.api_endpoint.clone(),
                description: SOURCE_DESCRIPTION.to_string(),
                vehicle_count: vehicle_positions_of(raw).map(Vec::len).unwrap_or(0),
            },
            data: raw.clone(),
        }
    }
}

// Readers of the path see either the old file or the new one, never a partial write.
async fn write_replacing(path: &Path, contents: &[u8]) -> Result<(), PersistError> {
    let tmp_path = path.with_extension("json5.tmp");

    let to_write_error = |source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    };

    tokio::fs::write(&tmp_path, contents)
        .await
        .map_err(to_write_error)?;

    if let Err(e) = tokio::fs::rename(&tmp_path, path).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(to_write_error(e));
    }

    Ok(())
}
