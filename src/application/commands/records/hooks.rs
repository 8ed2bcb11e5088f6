// src/application/commands/records/hooks.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    errors::DomainResult,
    record::{CollectionName, FieldName, NewRecord, RecordStore},
    slug::{SlugAssignment, SlugService, StoreSlugScope},
};

/// Result of running one pre-persist hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    Unchanged,
    /// The hook derived a value for this field. A unique violation on it may
    /// be resolved by running the hooks again.
    Generated(FieldName),
}

/// Callback run on a record after it is assembled and before it is written.
#[async_trait]
pub trait CreatingHook: Send + Sync {
    fn applies_to(&self, collection: &CollectionName) -> bool;

    async fn creating(
        &self,
        record: &mut NewRecord,
        store: &dyn RecordStore,
    ) -> DomainResult<HookOutcome>;
}

/// Fills a record's slug field on creation.
pub struct SlugCreatingHook {
    slugs: Arc<SlugService>,
}

impl SlugCreatingHook {
    pub fn new(slugs: Arc<SlugService>) -> Self {
        Self { slugs }
    }
}

#[async_trait]
impl CreatingHook for SlugCreatingHook {
    fn applies_to(&self, collection: &CollectionName) -> bool {
        self.slugs.config().collection() == collection
    }

    async fn creating(
        &self,
        record: &mut NewRecord,
        store: &dyn RecordStore,
    ) -> DomainResult<HookOutcome> {
        let config = self.slugs.config();
        let scope = StoreSlugScope::new(store, config.collection(), config.slug_field());

        match self.slugs.apply_on_create(record, &scope).await? {
            SlugAssignment::Generated(slug) => {
                tracing::debug!(collection = %config.collection(), slug = %slug, "slug generated");
                Ok(HookOutcome::Generated(config.slug_field().clone()))
            }
            SlugAssignment::Preset | SlugAssignment::Skipped => Ok(HookOutcome::Unchanged),
        }
    }
}
