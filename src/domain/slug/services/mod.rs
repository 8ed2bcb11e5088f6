// src/domain/slug/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::{NewRecord, Record, RecordStore};
use crate::domain::slug::availability::{SlugAvailability, StoreSlugScope};
use crate::domain::slug::config::SlugConfig;
use crate::domain::slug::value_objects::Slug;

/// What the creation hook did to a record's slug field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugAssignment {
    /// A slug was derived from the source field.
    Generated(Slug),
    /// The caller supplied a slug; it was left untouched.
    Preset,
    /// No source value, so no slug.
    Skipped,
}

impl SlugAssignment {
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }
}

/// Domain service responsible for producing unique slugs for one record type
/// and looking records up by them.
pub struct SlugService {
    store: Arc<dyn RecordStore>,
    generator: Arc<dyn SlugGenerator>,
    config: SlugConfig,
}

impl SlugService {
    pub fn new(
        store: Arc<dyn RecordStore>,
        generator: Arc<dyn SlugGenerator>,
        config: SlugConfig,
    ) -> Self {
        Self {
            store,
            generator,
            config,
        }
    }

    pub fn config(&self) -> &SlugConfig {
        &self.config
    }

    pub fn normalize(&self, input: &str) -> String {
        self.generator.slugify(input)
    }

    /// Existence check against this record type's collection and slug field.
    pub fn store_scope(&self) -> StoreSlugScope<'_> {
        StoreSlugScope::new(
            self.store.as_ref(),
            self.config.collection(),
            self.config.slug_field(),
        )
    }

    /// Derives a slug from `source` and appends `-1`, `-2`, ... until
    /// `exists` reports the candidate as free.
    ///
    /// Returns `None` for a missing or empty source. Errors from `exists`
    /// are returned as-is.
    pub async fn generate_unique_slug(
        &self,
        source: Option<&str>,
        exists: &dyn SlugAvailability,
    ) -> DomainResult<Option<Slug>> {
        let Some(source) = source.filter(|s| !s.is_empty()) else {
            return Ok(None);
        };

        let normalized = self.normalize(source);
        let base = if normalized.is_empty() {
            self.config.fallback().to_string()
        } else {
            normalized
        };

        let mut candidate = base.clone();
        let mut counter = 1u64;

        while exists.exists(&candidate).await? {
            tracing::debug!(
                collection = %self.config.collection(),
                candidate = %candidate,
                "slug candidate taken"
            );
            candidate = format!("{base}-{counter}");
            counter += 1;
        }

        Slug::new(candidate).map(Some)
    }

    /// Pre-persist step: fills the slug field unless the caller already set it.
    ///
    /// The slug field is always marked unique on the record so the store
    /// enforces it on insert.
    pub async fn apply_on_create(
        &self,
        record: &mut NewRecord,
        exists: &dyn SlugAvailability,
    ) -> DomainResult<SlugAssignment> {
        if &record.collection != self.config.collection() {
            return Err(DomainError::Validation(format!(
                "slug config for {} applied to {}",
                self.config.collection(),
                record.collection
            )));
        }

        let slug_field = self.config.slug_field();
        record.mark_unique(slug_field);

        if record.filled_field(slug_field).is_some() {
            return Ok(SlugAssignment::Preset);
        }
        record.clear_field(slug_field);

        let source = record.field(self.config.source_field()).map(str::to_owned);
        match self.generate_unique_slug(source.as_deref(), exists).await? {
            Some(slug) => {
                record.set_field(slug_field, slug.as_str());
                Ok(SlugAssignment::Generated(slug))
            }
            None => Ok(SlugAssignment::Skipped),
        }
    }

    pub async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Record>> {
        self.store
            .find_one_by_field(self.config.collection(), self.config.slug_field(), slug)
            .await
    }

    pub async fn find_by_slug_or_fail(&self, slug: &str) -> DomainResult<Record> {
        self.store
            .find_one_by_field_or_fail(self.config.collection(), self.config.slug_field(), slug)
            .await
    }
}
