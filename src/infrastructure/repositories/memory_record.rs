// src/infrastructure/repositories/memory_record.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::{CollectionName, FieldName, NewRecord, Record, RecordId, RecordStore};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct State {
    last_id: i64,
    records: Vec<Record>,
    keys: HashSet<(String, String, String)>,
}

/// Process-local store. Unique keys are checked and claimed under the same
/// lock as the insert, so concurrent creators cannot both win.
#[derive(Default)]
pub struct InMemoryRecordStore {
    state: Mutex<State>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| DomainError::Persistence("in-memory store lock poisoned".into()))
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.lock()?.records.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }
}

fn matches(record: &Record, collection: &CollectionName, field: &FieldName, value: &str) -> bool {
    &record.collection == collection && record.field(field) == Some(value)
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn exists_by_field(
        &self,
        collection: &CollectionName,
        field: &FieldName,
        value: &str,
    ) -> DomainResult<bool> {
        let state = self.lock()?;
        Ok(state
            .records
            .iter()
            .any(|r| matches(r, collection, field, value)))
    }

    async fn exists_by_unique_field(
        &self,
        collection: &CollectionName,
        field: &FieldName,
        value: &str,
    ) -> DomainResult<bool> {
        let key = (
            collection.as_str().to_string(),
            field.as_str().to_string(),
            value.to_string(),
        );
        Ok(self.lock()?.keys.contains(&key))
    }

    async fn find_one_by_field(
        &self,
        collection: &CollectionName,
        field: &FieldName,
        value: &str,
    ) -> DomainResult<Option<Record>> {
        let state = self.lock()?;
        Ok(state
            .records
            .iter()
            .find(|r| matches(r, collection, field, value))
            .cloned())
    }

    async fn insert(&self, record: NewRecord) -> DomainResult<Record> {
        let mut state = self.lock()?;

        let keys: Vec<(String, String, String)> = record
            .unique_values()
            .map(|(field, value)| {
                (
                    record.collection.as_str().to_string(),
                    field.to_string(),
                    value.to_string(),
                )
            })
            .collect();

        if let Some((_, field, value)) = keys.iter().find(|key| state.keys.contains(*key)) {
            return Err(DomainError::unique_violation(field.as_str(), value.as_str()));
        }

        state.last_id += 1;
        let created = Record {
            id: RecordId::new(state.last_id)?,
            collection: record.collection,
            fields: record.fields,
            created_at: record.created_at,
            updated_at: record.updated_at,
        };

        state.keys.extend(keys);
        state.records.push(created.clone());
        Ok(created)
    }
}
