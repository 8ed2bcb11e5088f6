// src/application/dto/records.rs
use crate::domain::record::Record;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordDto {
    pub id: i64,
    pub collection: String,
    pub fields: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecordDto {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

impl From<Record> for RecordDto {
    fn from(record: Record) -> Self {
        Self {
            id: i64::from(record.id),
            collection: record.collection.into(),
            fields: record.fields,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
