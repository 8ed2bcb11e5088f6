// src/domain/slug/config.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::{CollectionName, FieldName};
use crate::domain::slug::value_objects::is_slug_form;

pub const DEFAULT_SLUG_FIELD: &str = "slug";
pub const DEFAULT_FALLBACK: &str = "item";

/// Declares how one record type carries its slug.
#[derive(Debug, Clone)]
pub struct SlugConfig {
    collection: CollectionName,
    source_field: FieldName,
    slug_field: FieldName,
    fallback: String,
}

impl SlugConfig {
    pub fn builder() -> SlugConfigBuilder {
        SlugConfigBuilder::default()
    }

    pub fn collection(&self) -> &CollectionName {
        &self.collection
    }

    pub fn source_field(&self) -> &FieldName {
        &self.source_field
    }

    pub fn slug_field(&self) -> &FieldName {
        &self.slug_field
    }

    /// Base used when the source value normalizes to nothing.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

#[derive(Default)]
pub struct SlugConfigBuilder {
    collection: Option<String>,
    source_field: Option<String>,
    slug_field: Option<String>,
    fallback: Option<String>,
}

impl SlugConfigBuilder {
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    pub fn source_field(mut self, field: impl Into<String>) -> Self {
        self.source_field = Some(field.into());
        self
    }

    pub fn slug_field(mut self, field: impl Into<String>) -> Self {
        self.slug_field = Some(field.into());
        self
    }

    pub fn fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    pub fn build(self) -> DomainResult<SlugConfig> {
        let collection = self
            .collection
            .ok_or_else(|| DomainError::Validation("collection is required".into()))?;
        let source_field = self
            .source_field
            .ok_or_else(|| DomainError::Validation("source field is required".into()))?;

        let collection = CollectionName::new(collection)?;
        let source_field = FieldName::new(source_field)?;
        let slug_field =
            FieldName::new(self.slug_field.unwrap_or_else(|| DEFAULT_SLUG_FIELD.into()))?;

        if slug_field == source_field {
            return Err(DomainError::Validation(
                "slug field must differ from source field".into(),
            ));
        }

        let fallback = self.fallback.unwrap_or_else(|| DEFAULT_FALLBACK.into());
        if !is_slug_form(&fallback) {
            return Err(DomainError::Validation(format!(
                "fallback {fallback:?} is not a normalized slug"
            )));
        }

        Ok(SlugConfig {
            collection,
            source_field,
            slug_field,
            fallback,
        })
    }
}
