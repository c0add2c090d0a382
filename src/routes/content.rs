//! Content collection routes, generic over the entity schemas.
//!
//! One set of handlers serves all six collections; the `{table}` path
//! segment selects the schema and an unknown segment is a 404 before any
//! query runs.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::json;

use crate::routes::auth::AdminSession;
use crate::schema::{self, CreatePosition, EntitySchema, Record};
use crate::state::AppState;
use crate::store::{CollectionStore, StoreError};

fn schema_for(table: &str) -> Result<&'static EntitySchema, StatusCode> {
    schema::by_table(table).ok_or(StatusCode::NOT_FOUND)
}

pub(crate) fn store_error_to_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::Database(_) | StoreError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/content/:table` — all rows, ascending by position.
pub async fn list_rows(
    State(state): State<AppState>,
    Path(table): Path<String>,
) -> Result<Json<Vec<Record>>, StatusCode> {
    let schema = schema_for(&table)?;
    let rows = state.content().list(schema).await.map_err(|e| {
        tracing::error!(table = schema.table, error = %e, "list failed");
        store_error_to_status(&e)
    })?;
    Ok(Json(rows))
}

/// `POST /api/content/:table` — create one row from raw draft fields.
///
/// Required-field validation runs before any database call; a failure
/// returns 422 with the message the admin form shows as a toast.
pub async fn create_row(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(table): Path<String>,
    Json(draft): Json<HashMap<String, String>>,
) -> Result<(StatusCode, Json<Vec<Record>>), (StatusCode, Json<serde_json::Value>)> {
    let schema = schema_for(&table).map_err(|status| (status, Json(json!({ "message": "unknown collection" }))))?;

    let fields = schema
        .parse_draft(&draft)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "message": e.to_string() }))))?;

    let store = state.content();
    let position = match schema.create_position {
        CreatePosition::Appended => {
            let count = store
                .list(schema)
                .await
                .map_err(|e| write_error(schema, "count", &e))?
                .len();
            Some(i32::try_from(count + 1).unwrap_or(i32::MAX))
        }
        CreatePosition::ServerDefault => None,
    };

    let rows = store
        .insert(schema, fields, position)
        .await
        .map_err(|e| write_error(schema, "insert", &e))?;
    Ok((StatusCode::CREATED, Json(rows)))
}

/// `PATCH /api/content/:table/:id` — full-record save keyed by id.
pub async fn update_row(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path((table, id)): Path<(String, i64)>,
    Json(mut record): Json<Record>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let schema = schema_for(&table)?;
    // The path id wins over whatever the body carries.
    record.id = id;
    state.content().update(schema, &record).await.map_err(|e| {
        tracing::error!(table = schema.table, id, error = %e, "update failed");
        store_error_to_status(&e)
    })?;
    Ok(Json(json!({ "ok": true })))
}

/// `DELETE /api/content/:table/:id` — delete one row.
pub async fn delete_row(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path((table, id)): Path<(String, i64)>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let schema = schema_for(&table)?;
    state.content().delete(schema, id).await.map_err(|e| {
        tracing::error!(table = schema.table, id, error = %e, "delete failed");
        store_error_to_status(&e)
    })?;
    Ok(Json(json!({ "ok": true })))
}

#[derive(Debug, Deserialize)]
pub struct PositionAssignment {
    pub id: i64,
    pub position: i32,
}

/// `PUT /api/content/:table/positions` — batch position upsert after a
/// drag-reorder. The client sends the full renumbered sequence.
pub async fn reorder_rows(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(table): Path<String>,
    Json(body): Json<Vec<PositionAssignment>>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let schema = schema_for(&table)?;
    let assignments: Vec<(i64, i32)> = body.iter().map(|a| (a.id, a.position)).collect();
    state
        .content()
        .upsert_positions(schema, &assignments)
        .await
        .map_err(|e| {
            tracing::error!(table = schema.table, error = %e, "position upsert failed");
            store_error_to_status(&e)
        })?;
    Ok(Json(json!({ "ok": true })))
}

fn write_error(schema: &EntitySchema, op: &str, err: &StoreError) -> (StatusCode, Json<serde_json::Value>) {
    tracing::error!(table = schema.table, op, error = %err, "content write failed");
    (
        store_error_to_status(err),
        Json(json!({ "message": format!("Failed to add {}.", schema.table) })),
    )
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
