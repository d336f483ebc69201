pub mod query;
pub mod transport;
pub mod types;
pub mod vehicle_positions_fetcher;
