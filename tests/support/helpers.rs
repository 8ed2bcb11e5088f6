// tests/support/helpers.rs
use std::sync::Arc;

use sluggable_core::application::commands::records::CreateRecordCommand;
use sluggable_core::application::services::ApplicationServices;
use sluggable_core::domain::record::RecordStore;
use sluggable_core::domain::slug::SlugConfig;
use sluggable_core::infrastructure::util::DefaultSlugGenerator;

use crate::support::mocks::DummyClock;

pub const COLLECTION: &str = "organizations";

pub fn organization_config() -> SlugConfig {
    SlugConfig::builder()
        .collection(COLLECTION)
        .source_field("name")
        .build()
        .expect("valid slug config")
}

pub fn services_for(store: Arc<dyn RecordStore>, max_attempts: u32) -> ApplicationServices {
    ApplicationServices::new(
        store,
        Arc::new(DummyClock),
        Arc::new(DefaultSlugGenerator),
        vec![organization_config()],
        max_attempts,
    )
    .expect("services wire up")
}

pub fn create_named(name: &str) -> CreateRecordCommand {
    CreateRecordCommand::builder()
        .collection(COLLECTION)
        .field("name", name)
        .build()
        .expect("valid command")
}

pub fn create_with_slug(name: &str, slug: &str) -> CreateRecordCommand {
    CreateRecordCommand::builder()
        .collection(COLLECTION)
        .field("name", name)
        .field("slug", slug)
        .build()
        .expect("valid command")
}
