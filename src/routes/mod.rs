use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_health;
mod get_latest;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/latest", get(get_latest::get_latest))
        .route("/health", get(get_health::get_health))
}
