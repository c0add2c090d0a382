//! In-memory `CollectionStore` — one `Vec<Record>` per table.
//!
//! Rows without a position sort after positioned rows, matching the
//! Postgres `ORDER BY position ASC NULLS LAST, id ASC` ordering.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::schema::{EntitySchema, FieldMap, Record};

use super::{CollectionStore, StoreError};

pub struct MemStore {
    tables: Mutex<HashMap<&'static str, Vec<Record>>>,
    next_id: AtomicI64,
}

impl MemStore {
    #[must_use]
    pub fn new() -> Self {
        Self { tables: Mutex::new(HashMap::new()), next_id: AtomicI64::new(1) }
    }

    fn sort(records: &mut [Record]) {
        records.sort_by_key(|record| (record.position.is_none(), record.position, record.id));
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CollectionStore for MemStore {
    async fn list(&self, schema: &EntitySchema) -> Result<Vec<Record>, StoreError> {
        let tables = self.tables.lock().await;
        let mut records = tables.get(schema.table).cloned().unwrap_or_default();
        Self::sort(&mut records);
        Ok(records)
    }

    async fn insert(
        &self,
        schema: &EntitySchema,
        fields: FieldMap,
        position: Option<i32>,
    ) -> Result<Vec<Record>, StoreError> {
        let record = Record { id: self.next_id.fetch_add(1, Ordering::Relaxed), position, fields };
        let mut tables = self.tables.lock().await;
        tables.entry(schema.table).or_default().push(record.clone());
        Ok(vec![record])
    }

    async fn update(&self, schema: &EntitySchema, record: &Record) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        let rows = tables.entry(schema.table).or_default();
        let Some(existing) = rows.iter_mut().find(|row| row.id == record.id) else {
            return Err(StoreError::NotFound(record.id));
        };
        *existing = record.clone();
        Ok(())
    }

    async fn delete(&self, schema: &EntitySchema, id: i64) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        let rows = tables.entry(schema.table).or_default();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn upsert_positions(
        &self,
        schema: &EntitySchema,
        assignments: &[(i64, i32)],
    ) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        let rows = tables.entry(schema.table).or_default();
        for (id, position) in assignments {
            if let Some(row) = rows.iter_mut().find(|row| row.id == *id) {
                row.position = Some(*position);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
