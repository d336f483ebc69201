use std::{backtrace::Backtrace, sync::Arc, time::Duration};

use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tracing::{error, info};

use super::fetch_job::{FetchJob, RunOutcome};

#[derive(Clone, Copy, Debug)]
pub struct SchedulerConfig {
    pub interval: Duration,
    pub run_on_start: bool,
}

/// Triggers `job` every `interval`. Each run finishes before the next tick is taken.
pub fn spawn_scheduler(job: Arc<FetchJob>, cfg: SchedulerConfig) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(cfg.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        if !cfg.run_on_start {
            // interval fires immediately on the first tick
            ticker.tick().await;
        }

        loop {
            ticker.tick().await;
            run_guarded(job.clone()).await;
        }
    })
}

/// Routes panics through tracing with the panic location and a captured
/// stack, so `run_guarded` only has to report the payload.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        log_panic(&info.to_string(), &Backtrace::force_capture());
    }));
}

fn log_panic(report: &str, backtrace: &Backtrace) {
    error!(backtrace = %backtrace, "Unhandled panic: {}", report);
}

/// Runs one cycle on its own task so a panic is logged instead of taking the
/// scheduler down.
pub async fn run_guarded(job: Arc<FetchJob>) -> Option<RunOutcome> {
    match tokio::spawn(async move { job.run().await }).await {
        Ok(outcome) => {
            info!(outcome = ?outcome, "scheduled run finished");
            Some(outcome)
        }
        Err(e) if e.is_panic() => {
            let e_id = e.id();
            let panic = e.into_panic();
            let message = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            error!(task = %e_id, "Scheduled function error: {}", message);
            None
        }
        Err(e) => {
            error!("Scheduled function error: {}", e);
            None
        }
    }
}
