//! Postgres-backed `CollectionStore`.
//!
//! DESIGN
//! ======
//! All SQL is generated from the `EntitySchema` constants, so the six
//! content tables share one implementation. Table and column identifiers
//! come exclusively from those `&'static` declarations, never from request
//! input; only values are bound. Position reassignment after a reorder is
//! one transaction so a partial renumbering never lands.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, QueryBuilder, Row};

use crate::schema::{EntitySchema, FieldKind, FieldMap, FieldValue, Record};
use crate::store::{CollectionStore, StoreError};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `id, position, <field columns...>` for SELECT / RETURNING clauses.
fn column_list(schema: &EntitySchema) -> String {
    let mut columns = String::from("id, position");
    for spec in schema.fields {
        columns.push_str(", ");
        columns.push_str(spec.name);
    }
    columns
}

fn record_from_row(schema: &EntitySchema, row: &PgRow) -> Result<Record, sqlx::Error> {
    let id: i64 = row.try_get("id")?;
    let position: Option<i32> = row.try_get("position")?;
    let mut fields = FieldMap::new();
    for spec in schema.fields {
        let value = match spec.kind {
            FieldKind::List { .. } => {
                let list: Option<Vec<String>> = row.try_get(spec.name)?;
                FieldValue::List(list.unwrap_or_default())
            }
            FieldKind::Text | FieldKind::TextArea | FieldKind::Url => {
                let text: Option<String> = row.try_get(spec.name)?;
                FieldValue::Text(text.unwrap_or_default())
            }
        };
        fields.insert(spec.name.to_owned(), value);
    }
    Ok(Record { id, position, fields })
}

fn push_field_value(builder: &mut QueryBuilder<'_, sqlx::Postgres>, value: Option<&FieldValue>) {
    match value {
        Some(FieldValue::Text(text)) => {
            builder.push_bind(text.clone());
        }
        Some(FieldValue::List(list)) => {
            builder.push_bind(list.clone());
        }
        None => {
            builder.push("NULL");
        }
    }
}

#[async_trait]
impl CollectionStore for PgStore {
    async fn list(&self, schema: &EntitySchema) -> Result<Vec<Record>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY position ASC NULLS LAST, id ASC",
            column_list(schema),
            schema.table,
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            records.push(record_from_row(schema, row)?);
        }
        Ok(records)
    }

    async fn insert(
        &self,
        schema: &EntitySchema,
        fields: FieldMap,
        position: Option<i32>,
    ) -> Result<Vec<Record>, StoreError> {
        let mut builder = QueryBuilder::new(format!("INSERT INTO {} (", schema.table));
        {
            let mut separated = builder.separated(", ");
            for spec in schema.fields {
                separated.push(spec.name);
            }
            if position.is_some() {
                separated.push("position");
            }
        }
        builder.push(") VALUES (");
        let mut first = true;
        for spec in schema.fields {
            if !first {
                builder.push(", ");
            }
            first = false;
            push_field_value(&mut builder, fields.get(spec.name));
        }
        if let Some(position) = position {
            builder.push(", ");
            builder.push_bind(position);
        }
        builder.push(format!(") RETURNING {}", column_list(schema)));

        let rows = builder.build().fetch_all(&self.pool).await?;
        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            records.push(record_from_row(schema, row)?);
        }
        Ok(records)
    }

    async fn update(&self, schema: &EntitySchema, record: &Record) -> Result<(), StoreError> {
        let mut builder = QueryBuilder::new(format!("UPDATE {} SET position = ", schema.table));
        builder.push_bind(record.position);
        for spec in schema.fields {
            builder.push(format!(", {} = ", spec.name));
            push_field_value(&mut builder, record.fields.get(spec.name));
        }
        builder.push(" WHERE id = ");
        builder.push_bind(record.id);

        let result = builder.build().execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(record.id));
        }
        Ok(())
    }

    async fn delete(&self, schema: &EntitySchema, id: i64) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", schema.table);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn upsert_positions(
        &self,
        schema: &EntitySchema,
        assignments: &[(i64, i32)],
    ) -> Result<(), StoreError> {
        let sql = format!(
            "INSERT INTO {} (id, position) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET position = EXCLUDED.position",
            schema.table,
        );
        let mut tx = self.pool.begin().await?;
        for (id, position) in assignments {
            sqlx::query(&sql)
                .bind(id)
                .bind(position)
                .execute(tx.as_mut())
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
