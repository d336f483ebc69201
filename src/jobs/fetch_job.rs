use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::services::{
    snapshot_store::snapshot_persister::SnapshotPersister,
    transit_service::vehicle_positions_fetcher::VehiclePositionsFetcher,
};

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Persisted { vehicle_count: usize, bytes: u64 },
    FetchFailed,
    PersistFailed,
    /// Another run held the lock.
    Skipped,
}

/// One fetch-then-persist cycle.
pub struct FetchJob {
    fetcher: VehiclePositionsFetcher,
    persister: SnapshotPersister,
    running: Mutex<()>,
}

impl FetchJob {
    pub fn new(fetcher: VehiclePositionsFetcher, persister: SnapshotPersister) -> Self {
        Self {
            fetcher,
            persister,
            running: Mutex::new(()),
        }
    }

    pub async fn run(&self) -> RunOutcome {
        let Ok(_guard) = self.running.try_lock() else {
            warn!("Previous run still in progress, skipping this trigger");
            return RunOutcome::Skipped;
        };

        info!(
            "Fetching vehicle positions at {}",
            chrono::Utc::now().to_rfc3339()
        );

        let document = match self.fetcher.fetch().await {
            Ok(document) => document,
            Err(e) => {
                if e.is_upstream_rejection() {
                    warn!("Failed to fetch data: upstream rejected the request ({})", e);
                } else {
                    error!("Failed to fetch data: {}", e);
                }
                return RunOutcome::FetchFailed;
            }
        };

        let vehicle_count = document.vehicle_count();
        info!("Successfully fetched data for {} vehicles", vehicle_count);
        if vehicle_count > 0 {
            info!(
                "Sample vehicle: {}",
                document.first_vehicle_label().unwrap_or("Unknown")
            );
        }

        let path = self.persister.snapshot_path();
        info!("Saving data to {}", path.display());

        let saved = match self.persister.try_persist(Some(&document)).await {
            Ok(saved) => saved,
            Err(e) => {
                error!("Failed to save data: {}", e);
                return RunOutcome::PersistFailed;
            }
        };
        info!("Data fetch and save completed successfully");

        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            warn!("{} does not exist after completion", path.display());
        }

        RunOutcome::Persisted {
            vehicle_count: saved.vehicle_count,
            bytes: saved.bytes,
        }
    }
}
