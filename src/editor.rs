//! Generic ordered-collection editor.
//!
//! DESIGN
//! ======
//! One `CollectionEditor` instance owns the admin-panel state for a single
//! content section: the ordered record list, a creation draft, and a queue
//! of notices for the front end's toast layer. The same component serves
//! all six sections; the differences live entirely in the `EntitySchema`.
//!
//! Writes are fire-and-forget against already-loaded state: create and
//! delete touch local state only after the store confirms, while reorder
//! updates local order optimistically and does NOT revert on a failed
//! position write — the visible and persisted order may diverge until the
//! next successful reorder or reload. That asymmetry is deliberate and
//! matches the behavior this editor replaces.

use std::collections::HashMap;
use std::sync::Arc;

use crate::schema::{CreatePosition, EntitySchema, Record};
use crate::store::CollectionStore;

/// One toast-worthy operation outcome. Every store-touching operation
/// pushes exactly one notice; local-only mutations push none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

pub struct CollectionEditor {
    schema: &'static EntitySchema,
    store: Arc<dyn CollectionStore>,
    records: Vec<Record>,
    loading: bool,
    draft: HashMap<String, String>,
    notices: Vec<Notice>,
}

impl CollectionEditor {
    #[must_use]
    pub fn new(schema: &'static EntitySchema, store: Arc<dyn CollectionStore>) -> Self {
        Self {
            schema,
            store,
            records: Vec::new(),
            loading: true,
            draft: empty_draft(schema),
            notices: Vec::new(),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// True until the initial load settles. One-way: later operations never
    /// flip this back.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn draft(&self) -> &HashMap<String, String> {
        &self.draft
    }

    pub fn set_draft_field(&mut self, name: &str, value: &str) {
        if self.schema.field(name).is_some() {
            self.draft.insert(name.to_owned(), value.to_owned());
        }
    }

    /// Drain the accumulated notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Initial fetch: one ordered read of the whole table. On failure the
    /// collection stays empty and no retry is attempted.
    pub async fn load(&mut self) {
        match self.store.list(self.schema).await {
            Ok(records) => self.records = records,
            Err(error) => {
                tracing::warn!(table = self.schema.table, error = %error, "collection load failed");
                self.notices
                    .push(Notice::Error(format!("Failed to load {}.", self.schema.table)));
            }
        }
        self.loading = false;
    }

    /// Pure local mutation of one record's field. No store call, no notice.
    /// List-kind fields are re-split from the raw text.
    pub fn edit_field(&mut self, index: usize, name: &str, raw: &str) {
        let Some(spec) = self.schema.field(name) else {
            return;
        };
        let Some(record) = self.records.get_mut(index) else {
            return;
        };
        record.fields.insert(spec.name.to_owned(), spec.kind.parse(raw));
    }

    /// Persist the record at `index` as it currently stands locally.
    /// Local edits are NOT rolled back on failure; they stay visible and
    /// unpersisted until the next successful save.
    pub async fn save(&mut self, index: usize) {
        let Some(record) = self.records.get(index) else {
            return;
        };
        match self.store.update(self.schema, record).await {
            Ok(()) => self.notices.push(Notice::Success("Updated!".to_owned())),
            Err(error) => {
                tracing::warn!(table = self.schema.table, id = record.id, error = %error, "save failed");
                self.notices.push(Notice::Error("Update failed!".to_owned()));
            }
        }
    }

    /// Delete the record at `index`. Local removal happens only after the
    /// store confirms, and matches by id rather than index so a concurrent
    /// local change cannot remove the wrong row.
    pub async fn delete(&mut self, index: usize) {
        let Some(id) = self.records.get(index).map(|record| record.id) else {
            return;
        };
        match self.store.delete(self.schema, id).await {
            Ok(()) => {
                self.records.retain(|record| record.id != id);
                self.notices
                    .push(Notice::Success(format!("{} deleted.", self.schema.title)));
            }
            Err(error) => {
                tracing::warn!(table = self.schema.table, id, error = %error, "delete failed");
                self.notices
                    .push(Notice::Error(format!("Failed to delete {}.", self.schema.table)));
            }
        }
    }

    /// Create a row from the draft. Validation failures abort before any
    /// store call and leave the draft intact for correction; store failures
    /// leave it intact for retry. Success appends the returned row(s) and
    /// resets the draft.
    pub async fn create(&mut self) {
        let fields = match self.schema.parse_draft(&self.draft) {
            Ok(fields) => fields,
            Err(error) => {
                self.notices.push(Notice::Error(error.to_string()));
                return;
            }
        };

        let position = match self.schema.create_position {
            CreatePosition::Appended => Some(next_position(self.records.len())),
            CreatePosition::ServerDefault => None,
        };

        match self.store.insert(self.schema, fields, position).await {
            Ok(rows) => {
                self.records.extend(rows);
                self.draft = empty_draft(self.schema);
                self.notices
                    .push(Notice::Success(format!("{} added!", self.schema.title)));
            }
            Err(error) => {
                tracing::warn!(table = self.schema.table, error = %error, "insert failed");
                self.notices
                    .push(Notice::Error(format!("Failed to add {}.", self.schema.table)));
            }
        }
    }

    /// Relocate the record at `from` to `to`, renumber every position as
    /// its 1-based index, and persist the whole sequence in one batch.
    ///
    /// Dropping a record onto itself is a no-op: no local change, no write,
    /// no notice. On a failed batch write the optimistic local order is
    /// kept (accepted divergence, reported via notice only).
    pub async fn reorder(&mut self, from: usize, to: usize) {
        if from == to || from >= self.records.len() || to >= self.records.len() {
            return;
        }

        let record = self.records.remove(from);
        self.records.insert(to, record);

        let mut assignments = Vec::with_capacity(self.records.len());
        for (index, record) in self.records.iter_mut().enumerate() {
            let position = next_position(index);
            record.position = Some(position);
            assignments.push((record.id, position));
        }

        match self.store.upsert_positions(self.schema, &assignments).await {
            Ok(()) => self.notices.push(Notice::Success("Order saved.".to_owned())),
            Err(error) => {
                tracing::warn!(table = self.schema.table, error = %error, "reorder persist failed");
                self.notices
                    .push(Notice::Error("Failed to update order.".to_owned()));
            }
        }
    }
}

fn empty_draft(schema: &EntitySchema) -> HashMap<String, String> {
    schema
        .fields
        .iter()
        .map(|spec| (spec.name.to_owned(), String::new()))
        .collect()
}

/// 1-based position for a 0-based index.
fn next_position(index: usize) -> i32 {
    i32::try_from(index + 1).unwrap_or(i32::MAX)
}

#[cfg(test)]
#[path = "editor_test.rs"]
mod tests;
