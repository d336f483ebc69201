mod app;
mod jobs;
mod routes;
mod services;
mod types;
mod utils;

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::{
    jobs::{
        fetch_job::FetchJob,
        scheduler::{install_panic_hook, spawn_scheduler, SchedulerConfig},
    },
    services::{
        snapshot_store::snapshot_persister::{SnapshotPersister, SnapshotPersisterConfig},
        transit_service::{
            transport::ReqwestTransport,
            vehicle_positions_fetcher::{VehiclePositionsFetcher, VehiclePositionsFetcherConfig},
        },
    },
    types::app_state::AppState,
    utils::config::Config,
};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    install_panic_hook();
    info!("Starting app...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let transport = ReqwestTransport::new(config.request_timeout)
        .expect("Failed to build HTTP client");
    let fetcher = VehiclePositionsFetcher::new(
        VehiclePositionsFetcherConfig {
            endpoint: config.api_endpoint.clone(),
        },
        Arc::new(transport),
    );
    let persister = SnapshotPersister::new(SnapshotPersisterConfig {
        output_dir: config.output_dir.clone(),
        api_endpoint: config.api_endpoint.clone(),
    });
    let state = AppState {
        snapshot_path: persister.snapshot_path(),
    };

    let job = Arc::new(FetchJob::new(fetcher, persister));
    spawn_scheduler(
        job,
        SchedulerConfig {
            interval: config.fetch_interval,
            run_on_start: config.fetch_on_start,
        },
    );

    let app = app::gen_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .unwrap();
    info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await.unwrap();
}
