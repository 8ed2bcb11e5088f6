use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::entity::{NewRecord, Record};
use crate::domain::record::value_objects::{CollectionName, FieldName};
use async_trait::async_trait;

/// Persistence capability consumed by the slug behaviour.
///
/// Every lookup is scoped to one collection. `insert` must reject a record
/// whose `unique_fields` collide with an existing record of the same
/// collection, reporting [`DomainError::UniqueViolation`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn exists_by_field(
        &self,
        collection: &CollectionName,
        field: &FieldName,
        value: &str,
    ) -> DomainResult<bool>;

    async fn find_one_by_field(
        &self,
        collection: &CollectionName,
        field: &FieldName,
        value: &str,
    ) -> DomainResult<Option<Record>>;

    async fn insert(&self, record: NewRecord) -> DomainResult<Record>;

    /// Existence check for a field that inserts mark unique.
    ///
    /// Stores that index their unique keys answer this from the index.
    async fn exists_by_unique_field(
        &self,
        collection: &CollectionName,
        field: &FieldName,
        value: &str,
    ) -> DomainResult<bool> {
        self.exists_by_field(collection, field, value).await
    }

    async fn find_one_by_field_or_fail(
        &self,
        collection: &CollectionName,
        field: &FieldName,
        value: &str,
    ) -> DomainResult<Record> {
        self.find_one_by_field(collection, field, value)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!("{collection} with {field} = {value:?}"))
            })
    }
}
