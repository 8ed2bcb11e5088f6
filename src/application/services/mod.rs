// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::records::{RecordCommandService, SlugCreatingHook},
        error::{ApplicationError, ApplicationResult},
        ports::{time::Clock, util::SlugGenerator},
        queries::records::RecordQueryService,
    },
    domain::{
        record::RecordStore,
        slug::{SlugConfig, SlugService},
    },
};

pub struct ApplicationServices {
    pub record_commands: Arc<RecordCommandService>,
    pub record_queries: Arc<RecordQueryService>,
}

impl ApplicationServices {
    /// Wires one slug service and creating hook per config onto a shared store.
    pub fn new(
        store: Arc<dyn RecordStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        slug_configs: Vec<SlugConfig>,
        max_attempts: u32,
    ) -> ApplicationResult<Self> {
        let slug_services: Vec<Arc<SlugService>> = slug_configs
            .into_iter()
            .map(|config| {
                Arc::new(SlugService::new(
                    Arc::clone(&store),
                    Arc::clone(&slugger),
                    config,
                ))
            })
            .collect();

        let mut builder = RecordCommandService::builder()
            .store(Arc::clone(&store))
            .clock(Arc::clone(&clock))
            .max_attempts(max_attempts);
        for svc in &slug_services {
            builder = builder.hook(Arc::new(SlugCreatingHook::new(Arc::clone(svc))));
        }
        let record_commands = Arc::new(builder.build().map_err(ApplicationError::validation)?);

        let record_queries = Arc::new(RecordQueryService::new(slug_services));

        Ok(Self {
            record_commands,
            record_queries,
        })
    }
}
