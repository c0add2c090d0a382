//! Portfolio content backend and admin editing core.
//!
//! SYSTEM CONTEXT
//! ==============
//! Six ordered content collections (experience, projects, certifications,
//! awards, volunteering, blogs) plus a singleton hero profile and an
//! append-only contact drop box, served over HTTP and persisted in
//! Postgres. The admin-side editing behavior — drafts, validation,
//! drag-reorder with batch position writes — lives in [`editor`] as a
//! store-agnostic component; [`services::content`] supplies the Postgres
//! store behind it.

pub mod db;
pub mod editor;
pub mod routes;
pub mod schema;
pub mod services;
pub mod state;
pub mod store;
