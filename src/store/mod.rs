//! Abstract row storage for content collections.
//!
//! ARCHITECTURE
//! ============
//! The editor talks to a `CollectionStore` trait object, never to SQL
//! directly. `services::content::PgStore` is the Postgres implementation;
//! `memory::MemStore` backs tests and offline use. The contract is the
//! hosted-table surface the admin panel consumes: ordered list, insert
//! returning rows, update/delete keyed by id, and a batch position upsert
//! used only after reorders.

pub mod memory;

use async_trait::async_trait;

use crate::schema::{EntitySchema, FieldMap, Record};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("row not found: {0}")]
    NotFound(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// All rows of the entity's table, ascending by position.
    async fn list(&self, schema: &EntitySchema) -> Result<Vec<Record>, StoreError>;

    /// Insert one row and return the inserted row(s) with store-assigned id.
    /// `position` is `None` for entities that leave it to the server.
    async fn insert(
        &self,
        schema: &EntitySchema,
        fields: FieldMap,
        position: Option<i32>,
    ) -> Result<Vec<Record>, StoreError>;

    /// Full-record update keyed by `record.id`.
    async fn update(&self, schema: &EntitySchema, record: &Record) -> Result<(), StoreError>;

    /// Delete the row with the given id.
    async fn delete(&self, schema: &EntitySchema, id: i64) -> Result<(), StoreError>;

    /// Batch position reassignment keyed by id. Used only after reorders.
    async fn upsert_positions(
        &self,
        schema: &EntitySchema,
        assignments: &[(i64, i32)],
    ) -> Result<(), StoreError>;
}
