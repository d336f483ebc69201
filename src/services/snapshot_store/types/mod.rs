pub mod persist_error;
pub mod persisted_snapshot;
