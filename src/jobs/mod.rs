pub mod fetch_job;
pub mod scheduler;
