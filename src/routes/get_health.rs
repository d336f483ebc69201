use axum::{http::header, response::IntoResponse};

pub async fn get_health() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], "OK")
}
