pub mod snapshot_persister;
pub mod types;
