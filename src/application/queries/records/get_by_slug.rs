use std::sync::Arc;

use super::RecordQueryService;
use crate::{
    application::{
        dto::RecordDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{errors::DomainError, record::CollectionName, slug::SlugService},
};

pub struct GetRecordBySlugQuery {
    pub collection: String,
    pub slug: String,
}

impl RecordQueryService {
    fn slug_service(&self, collection: &str) -> ApplicationResult<&Arc<SlugService>> {
        let collection = CollectionName::new(collection)?;
        self.slugs.get(&collection).ok_or_else(|| {
            ApplicationError::validation(format!("collection {collection} has no slug"))
        })
    }

    pub async fn find_by_slug(
        &self,
        query: GetRecordBySlugQuery,
    ) -> ApplicationResult<Option<RecordDto>> {
        let record = self
            .slug_service(&query.collection)?
            .find_by_slug(&query.slug)
            .await?;
        Ok(record.map(RecordDto::from))
    }

    pub async fn get_by_slug(&self, query: GetRecordBySlugQuery) -> ApplicationResult<RecordDto> {
        match self
            .slug_service(&query.collection)?
            .find_by_slug_or_fail(&query.slug)
            .await
        {
            Ok(record) => Ok(record.into()),
            Err(DomainError::NotFound(_)) => Err(ApplicationError::not_found(format!(
                "{} {:?} not found",
                query.collection, query.slug
            ))),
            Err(err) => Err(err.into()),
        }
    }
}
