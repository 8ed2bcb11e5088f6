use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{record::CollectionName, slug::SlugService};

pub struct RecordQueryService {
    pub(super) slugs: HashMap<CollectionName, Arc<SlugService>>,
}

impl RecordQueryService {
    pub fn new(slug_services: impl IntoIterator<Item = Arc<SlugService>>) -> Self {
        let slugs = slug_services
            .into_iter()
            .map(|svc| (svc.config().collection().clone(), svc))
            .collect();
        Self { slugs }
    }
}
