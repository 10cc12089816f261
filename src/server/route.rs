use crate::model::ResultModel;
use crate::service::UserActivities;
use crate::tracer::TracingRecorder;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use serde_json::json;
use tracing::{debug, instrument, warn};

pub fn create_router() -> Router {
    debug!("Creating activity routes");
    Router::new()
        .route("/api/activities/:handle", get(user_activities))
        .route("/health", get(health))
}

/// `GET /api/activities/@handle`
///
/// Answers with the activity list, or with the error codes and status 422 when
/// the handle is blank.
#[instrument]
pub async fn user_activities(Path(handle): Path<String>) -> Response {
    let handle = handle.strip_prefix('@').unwrap_or(&handle);

    match lookup(handle).into_result() {
        Ok(data) => {
            debug!(count = data.len(), "Activities found");
            (StatusCode::OK, Json(data)).into_response()
        }
        Err(errors) => {
            warn!(?errors, "Activity lookup rejected");
            (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
        }
    }
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

fn lookup(handle: &str) -> ResultModel {
    let recorder = TracingRecorder::new();
    UserActivities::new().with_tracer(&recorder).lookup(Some(handle))
}
