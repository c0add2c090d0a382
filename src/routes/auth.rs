//! Admin auth routes — login, logout, session check.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::json;
use time::Duration;

use crate::services::session;
use crate::state::AppState;

const COOKIE_NAME: &str = "folio_session";
const SESSION_TTL_DAYS: i64 = 7;

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_BASE_URL")
        .map(|uri| uri.starts_with("https://"))
        .unwrap_or(false)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Validated admin session extracted from the session cookie.
/// Use as a handler parameter to gate the admin surface.
pub struct AdminSession {
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AdminSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let valid = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
        if !valid {
            return Err(StatusCode::UNAUTHORIZED);
        }

        Ok(Self { token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

/// `POST /api/auth/login` — check credentials, create a session, set cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(body): Json<LoginBody>) -> Response {
    if !state.admin.matches(&body.username, &body.password) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid login. Please try again." })),
        )
            .into_response();
    }

    match session::create_session(&state.pool).await {
        Ok(token) => {
            let cookie = Cookie::build((COOKIE_NAME, token))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .secure(cookie_secure())
                .max_age(Duration::days(SESSION_TTL_DAYS));
            (jar.add(cookie), Json(json!({ "ok": true }))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create session").into_response()
        }
    }
}

/// `POST /api/auth/logout` — delete the session row and clear the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(COOKIE_NAME) {
        if let Err(e) = session::delete_session(&state.pool, cookie.value()).await {
            tracing::warn!(error = %e, "session delete failed");
        }
    }

    let jar = jar.remove(Cookie::build((COOKIE_NAME, "")).path("/"));
    (jar, Json(json!({ "ok": true }))).into_response()
}

/// `GET /api/auth/me` — 200 when the session cookie is valid.
pub async fn me(_session: AdminSession) -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
