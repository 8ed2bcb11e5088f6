mod get_by_slug;
mod service;

pub use get_by_slug::GetRecordBySlugQuery;
pub use service::RecordQueryService;
