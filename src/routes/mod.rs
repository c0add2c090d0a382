//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public content reads, the contact drop box, the admin CRUD surface, and
//! uploaded assets all hang off a single Axum router. Uploaded files are
//! served statically at `/assets` from the uploads root.

pub mod auth;
pub mod contact;
pub mod content;
pub mod hero;
pub mod uploads;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let assets_dir = state.assets.root().to_path_buf();

    Router::new()
        .route(
            "/api/content/{table}",
            get(content::list_rows).post(content::create_row),
        )
        .route("/api/content/{table}/positions", put(content::reorder_rows))
        .route(
            "/api/content/{table}/{id}",
            axum::routing::patch(content::update_row).delete(content::delete_row),
        )
        .route("/api/hero", get(hero::get_hero).put(hero::put_hero))
        .route("/api/uploads/{kind}", post(uploads::upload_asset))
        .route("/api/contact", post(contact::submit))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/healthz", get(healthz))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
