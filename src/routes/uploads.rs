//! Asset upload route — profile image and resume files.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::json;

use crate::routes::auth::AdminSession;
use crate::services::uploads::UploadError;
use crate::state::AppState;

/// Upload kinds and the subdirectory each lands in.
const UPLOAD_KINDS: [&str; 2] = ["profile", "resume"];

/// `POST /api/uploads/:kind` — multipart upload, overwrite allowed.
///
/// Expects one `file` part with a file name; responds with the stable
/// public URL of the stored asset.
pub async fn upload_asset(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(kind): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    if !UPLOAD_KINDS.contains(&kind.as_str()) {
        return Err((StatusCode::NOT_FOUND, Json(json!({ "message": "unknown upload kind" }))));
    }

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(json!({ "message": e.to_string() }))))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let Some(name) = field.file_name().map(ToOwned::to_owned) else {
            return Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "message": "file name is required" })),
            ));
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| (StatusCode::BAD_REQUEST, Json(json!({ "message": e.to_string() }))))?;

        let url = state.assets.save(&kind, &name, &bytes).await.map_err(|e| match e {
            UploadError::InvalidName(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "message": e.to_string() })))
            }
            UploadError::Io(_) => {
                tracing::error!(kind, error = %e, "asset write failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Upload failed." })),
                )
            }
        })?;
        return Ok(Json(json!({ "url": url })));
    }

    Err((
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "message": "missing file field" })),
    ))
}
