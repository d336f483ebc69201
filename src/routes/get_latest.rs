use std::io::ErrorKind;

use axum::{
    body::Body,
    extract::State,
    http::header,
    response::{AppendHeaders, IntoResponse, Response},
};
#[cfg(test)]
use axum_macros::debug_handler;
use tokio::fs::File;
use tracing::error;

use crate::{types::app_state::AppState, utils::app_error::AppError};

#[cfg_attr(test, debug_handler)]
pub async fn get_latest(State(state): State<AppState>) -> Result<Response, AppError> {
    let snapshot = File::open(&state.snapshot_path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            AppError::snapshot_missing()
        } else {
            error!(
                "Failed to open snapshot {}: {}",
                state.snapshot_path.display(),
                e
            );
            AppError::internal()
        }
    })?;

    let stream = tokio_util::io::ReaderStream::new(snapshot);
    let headers = AppendHeaders([(header::CONTENT_TYPE, "application/json")]);

    Ok((headers, Body::from_stream(stream)).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::app::gen_app;

    use super::*;

    #[tokio::test]
    async fn serves_persisted_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train.json5");
        let snapshot = "{\n  \"metadata\": {\n    \"vehicle_count\": 1\n  },\n  \"data\": {}\n}";
        tokio::fs::write(&path, snapshot).await.unwrap();

        let app = gen_app(AppState {
            snapshot_path: path,
        });

        let response = app
            .oneshot(Request::builder().uri("/latest").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], snapshot.as_bytes());
    }

    #[tokio::test]
    async fn missing_snapshot_is_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let app = gen_app(AppState {
            snapshot_path: dir.path().join("train.json5"),
        });

        let response = app
            .oneshot(Request::builder().uri("/latest").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], "No snapshot has been saved yet");
    }
}
