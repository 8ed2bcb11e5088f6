// src/domain/record/entity.rs
use crate::domain::record::value_objects::{CollectionName, FieldName, RecordId};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone)]
pub struct Record {
    pub id: RecordId,
    pub collection: CollectionName,
    pub fields: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub fn field(&self, name: &FieldName) -> Option<&str> {
        self.fields.get(name.as_str()).map(String::as_str)
    }
}

/// A record on its way into the store. Pre-persist hooks mutate it in place.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub collection: CollectionName,
    pub fields: BTreeMap<String, String>,
    /// Fields the store must keep unique within `collection`.
    pub unique_fields: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewRecord {
    pub fn new(collection: CollectionName, now: DateTime<Utc>) -> Self {
        Self {
            collection,
            fields: BTreeMap::new(),
            unique_fields: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_field(mut self, name: &FieldName, value: impl Into<String>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn field(&self, name: &FieldName) -> Option<&str> {
        self.fields.get(name.as_str()).map(String::as_str)
    }

    /// Returns the field value when it is present and non-empty.
    ///
    /// Whitespace counts as a value.
    pub fn filled_field(&self, name: &FieldName) -> Option<&str> {
        self.field(name).filter(|v| !v.is_empty())
    }

    pub fn set_field(&mut self, name: &FieldName, value: impl Into<String>) {
        self.fields.insert(name.as_str().to_string(), value.into());
    }

    pub fn clear_field(&mut self, name: &FieldName) -> Option<String> {
        self.fields.remove(name.as_str())
    }

    pub fn mark_unique(&mut self, name: &FieldName) {
        self.unique_fields.insert(name.as_str().to_string());
    }

    /// Unique fields that actually carry a value, paired with that value.
    pub fn unique_values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.unique_fields.iter().filter_map(|name| {
            self.fields
                .get(name)
                .map(|value| (name.as_str(), value.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn field(name: &str) -> FieldName {
        FieldName::new(name).unwrap()
    }

    fn sample() -> NewRecord {
        NewRecord::new(CollectionName::new("organizations").unwrap(), Utc::now())
    }

    #[test]
    fn filled_field_ignores_empty_values_only() {
        let record = sample()
            .with_field(&field("name"), "")
            .with_field(&field("slug"), "   ");
        assert_eq!(record.filled_field(&field("name")), None);
        assert_eq!(record.field(&field("name")), Some(""));
        assert_eq!(record.filled_field(&field("slug")), Some("   "));
    }

    #[test]
    fn unique_values_skip_missing_fields() {
        let mut record = sample().with_field(&field("slug"), "acme");
        record.mark_unique(&field("slug"));
        record.mark_unique(&field("code"));

        let values: Vec<_> = record.unique_values().collect();
        assert_eq!(values, vec![("slug", "acme")]);
    }

    #[test]
    fn clear_field_returns_previous_value() {
        let mut record = sample().with_field(&field("slug"), "acme");
        assert_eq!(record.clear_field(&field("slug")).as_deref(), Some("acme"));
        assert!(record.field(&field("slug")).is_none());
    }
}
