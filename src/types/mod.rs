pub mod app_state;
pub mod vehicle_position;
