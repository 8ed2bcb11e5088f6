// src/infrastructure/repositories/mod.rs
mod error;
mod memory_record;
mod sqlite_record;

pub use error::map_sqlx;
pub use memory_record::InMemoryRecordStore;
pub use sqlite_record::SqliteRecordStore;
