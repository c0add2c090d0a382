//! Contact form route — the one public write endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::json;

use crate::services::contact::{self, ContactError, ContactSubmission};
use crate::state::AppState;

/// `POST /api/contact` — append one submission.
pub async fn submit(
    State(state): State<AppState>,
    Json(body): Json<ContactSubmission>,
) -> Result<(StatusCode, Json<serde_json::Value>), (StatusCode, Json<serde_json::Value>)> {
    match contact::submit(&state.pool, &body).await {
        Ok(()) => Ok((StatusCode::CREATED, Json(json!({ "ok": true })))),
        Err(e @ ContactError::MissingField(_)) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "message": e.to_string() })),
        )),
        Err(e) => {
            tracing::error!(error = %e, "contact submit failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Failed to submit message." })),
            ))
        }
    }
}
