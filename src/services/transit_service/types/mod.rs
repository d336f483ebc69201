pub mod fetch_error;
pub mod vehicle_positions_document;
