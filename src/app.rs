use crate::{routes::apply_routes, types::app_state::AppState};
use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;

pub fn gen_app(state: AppState) -> Router {
    let cors_middleware = CorsLayer::new();

    apply_routes(Router::new())
        .route("/", get(root))
        .fallback(not_found)
        .layer(cors_middleware)
        .with_state(state)
}

async fn root() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain")],
        "Hello from the EMMA vehicle positions service!",
    )
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain")],
        "Not Found",
    )
}
