// tests/support/mocks/stores.rs
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sluggable_core::domain::errors::{DomainError, DomainResult};
use sluggable_core::domain::record::{CollectionName, FieldName, NewRecord, Record, RecordStore};

/* -------------------------------- StaleStore -------------------------------- */

/// Reports every value as free for the first `stale_reads` existence checks,
/// as if a concurrent creator had not committed yet. Everything else goes to
/// the wrapped store.
pub struct StaleStore {
    inner: Arc<dyn RecordStore>,
    stale_reads: AtomicUsize,
    inserts: AtomicUsize,
}

impl StaleStore {
    pub fn new(inner: Arc<dyn RecordStore>, stale_reads: usize) -> Self {
        Self {
            inner,
            stale_reads: AtomicUsize::new(stale_reads),
            inserts: AtomicUsize::new(0),
        }
    }

    pub fn insert_attempts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    fn take_stale_read(&self) -> bool {
        self.stale_reads
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl RecordStore for StaleStore {
    async fn exists_by_field(
        &self,
        collection: &CollectionName,
        field: &FieldName,
        value: &str,
    ) -> DomainResult<bool> {
        if self.take_stale_read() {
            return Ok(false);
        }
        self.inner.exists_by_field(collection, field, value).await
    }

    async fn exists_by_unique_field(
        &self,
        collection: &CollectionName,
        field: &FieldName,
        value: &str,
    ) -> DomainResult<bool> {
        if self.take_stale_read() {
            return Ok(false);
        }
        self.inner
            .exists_by_unique_field(collection, field, value)
            .await
    }

    async fn find_one_by_field(
        &self,
        collection: &CollectionName,
        field: &FieldName,
        value: &str,
    ) -> DomainResult<Option<Record>> {
        self.inner.find_one_by_field(collection, field, value).await
    }

    async fn insert(&self, record: NewRecord) -> DomainResult<Record> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(record).await
    }
}

/* -------------------------------- FailingStore -------------------------------- */

/// Every operation fails as if the backing database were unreachable.
pub struct FailingStore;

fn unavailable() -> DomainError {
    DomainError::Persistence("store unavailable".into())
}

#[async_trait]
impl RecordStore for FailingStore {
    async fn exists_by_field(
        &self,
        _collection: &CollectionName,
        _field: &FieldName,
        _value: &str,
    ) -> DomainResult<bool> {
        Err(unavailable())
    }

    async fn find_one_by_field(
        &self,
        _collection: &CollectionName,
        _field: &FieldName,
        _value: &str,
    ) -> DomainResult<Option<Record>> {
        Err(unavailable())
    }

    async fn insert(&self, _record: NewRecord) -> DomainResult<Record> {
        Err(unavailable())
    }
}
