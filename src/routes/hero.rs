//! Hero profile routes — public fetch and admin upsert of the singleton.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::json;

use crate::routes::auth::AdminSession;
use crate::services::hero::{self, HeroError, HeroProfile};
use crate::state::AppState;

fn hero_error_to_status(err: &HeroError) -> StatusCode {
    match err {
        HeroError::Missing => StatusCode::NOT_FOUND,
        HeroError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/hero` — the singleton hero row.
pub async fn get_hero(State(state): State<AppState>) -> Result<Json<HeroProfile>, StatusCode> {
    let profile = hero::fetch_hero(&state.pool).await.map_err(|e| {
        if !matches!(e, HeroError::Missing) {
            tracing::error!(error = %e, "hero fetch failed");
        }
        hero_error_to_status(&e)
    })?;
    Ok(Json(profile))
}

/// Roles arrive either as a ready list or as the admin textarea's raw
/// one-per-line text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RolesField {
    List(Vec<String>),
    Text(String),
}

impl RolesField {
    fn into_roles(self) -> Vec<String> {
        match self {
            RolesField::List(roles) => roles,
            RolesField::Text(raw) => hero::split_roles(&raw),
        }
    }
}

#[derive(Deserialize)]
pub struct HeroBody {
    pub name: String,
    pub roles: RolesField,
    pub description: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub resume_url: String,
    #[serde(default)]
    pub profile_image_url: String,
}

/// `PUT /api/hero` — upsert the singleton hero row.
pub async fn put_hero(
    State(state): State<AppState>,
    _admin: AdminSession,
    Json(body): Json<HeroBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let profile = HeroProfile {
        name: body.name,
        roles: body.roles.into_roles(),
        description: body.description,
        linkedin_url: body.linkedin_url,
        email: body.email,
        resume_url: body.resume_url,
        profile_image_url: body.profile_image_url,
    };

    hero::upsert_hero(&state.pool, &profile).await.map_err(|e| {
        tracing::error!(error = %e, "hero upsert failed");
        hero_error_to_status(&e)
    })?;
    Ok(Json(json!({ "ok": true })))
}

#[cfg(test)]
#[path = "hero_test.rs"]
mod tests;
