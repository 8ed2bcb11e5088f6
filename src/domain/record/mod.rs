pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewRecord, Record};
pub use repository::RecordStore;
pub use value_objects::{CollectionName, FieldName, RecordId};
