// src/infrastructure/repositories/sqlite_record.rs
use super::error::{map_json, map_key_insert, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::{CollectionName, FieldName, NewRecord, Record, RecordId, RecordStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::collections::BTreeMap;

#[derive(Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RecordRow {
    id: i64,
    collection: String,
    fields: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RecordRow> for Record {
    type Error = DomainError;

    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        let fields: BTreeMap<String, String> =
            serde_json::from_str(&row.fields).map_err(map_json)?;
        Ok(Record {
            id: RecordId::new(row.id)?,
            collection: CollectionName::new(row.collection)?,
            fields,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn json_path(field: &FieldName) -> String {
    format!("$.{}", field.as_str())
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn exists_by_field(
        &self,
        collection: &CollectionName,
        field: &FieldName,
        value: &str,
    ) -> DomainResult<bool> {
        let found: i64 = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM records WHERE collection = ? AND json_extract(fields, ?) = ?)",
        )
        .bind(collection.as_str())
        .bind(json_path(field))
        .bind(value)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(found != 0)
    }

    async fn exists_by_unique_field(
        &self,
        collection: &CollectionName,
        field: &FieldName,
        value: &str,
    ) -> DomainResult<bool> {
        let found: i64 = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM record_keys WHERE collection = ? AND field = ? AND value = ?)",
        )
        .bind(collection.as_str())
        .bind(field.as_str())
        .bind(value)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(found != 0)
    }

    async fn find_one_by_field(
        &self,
        collection: &CollectionName,
        field: &FieldName,
        value: &str,
    ) -> DomainResult<Option<Record>> {
        let row = sqlx::query_as::<_, RecordRow>(
            "SELECT id, collection, fields, created_at, updated_at FROM records
             WHERE collection = ? AND json_extract(fields, ?) = ?
             ORDER BY id LIMIT 1",
        )
        .bind(collection.as_str())
        .bind(json_path(field))
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Record::try_from).transpose()
    }

    async fn insert(&self, record: NewRecord) -> DomainResult<Record> {
        let fields = serde_json::to_string(&record.fields).map_err(map_json)?;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, RecordRow>(
            "INSERT INTO records (collection, fields, created_at, updated_at)
             VALUES (?, ?, ?, ?)
             RETURNING id, collection, fields, created_at, updated_at",
        )
        .bind(record.collection.as_str())
        .bind(fields.as_str())
        .bind(record.created_at)
        .bind(record.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        for (field, value) in record.unique_values() {
            sqlx::query(
                "INSERT INTO record_keys (record_id, collection, field, value) VALUES (?, ?, ?, ?)",
            )
            .bind(row.id)
            .bind(record.collection.as_str())
            .bind(field)
            .bind(value)
            .execute(&mut *tx)
            .await
            .map_err(|err| map_key_insert(err, field, value))?;
        }

        tx.commit().await.map_err(map_sqlx)?;

        let created = Record::try_from(row)?;
        tracing::debug!(collection = %created.collection, id = %created.id, "record inserted");
        Ok(created)
    }
}
