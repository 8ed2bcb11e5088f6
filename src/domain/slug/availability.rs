use crate::domain::errors::DomainResult;
use crate::domain::record::{CollectionName, FieldName, RecordStore};
use async_trait::async_trait;

/// Answers whether a slug candidate is already taken in the caller's scope.
#[async_trait]
pub trait SlugAvailability: Send + Sync {
    async fn exists(&self, candidate: &str) -> DomainResult<bool>;
}

#[async_trait]
impl<F> SlugAvailability for F
where
    F: Fn(&str) -> DomainResult<bool> + Send + Sync,
{
    async fn exists(&self, candidate: &str) -> DomainResult<bool> {
        self(candidate)
    }
}

/// Existence check backed by a [`RecordStore`], scoped to one collection and field.
pub struct StoreSlugScope<'a> {
    store: &'a dyn RecordStore,
    collection: &'a CollectionName,
    field: &'a FieldName,
}

impl<'a> StoreSlugScope<'a> {
    pub fn new(
        store: &'a dyn RecordStore,
        collection: &'a CollectionName,
        field: &'a FieldName,
    ) -> Self {
        Self {
            store,
            collection,
            field,
        }
    }
}

#[async_trait]
impl SlugAvailability for StoreSlugScope<'_> {
    async fn exists(&self, candidate: &str) -> DomainResult<bool> {
        self.store
            .exists_by_unique_field(self.collection, self.field, candidate)
            .await
    }
}
