pub mod snapshot_store;
pub mod transit_service;
