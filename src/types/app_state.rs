use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    pub snapshot_path: PathBuf,
}
