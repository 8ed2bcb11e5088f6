// src/application/commands/records/service.rs
use std::sync::Arc;

use super::CreatingHook;
use crate::{application::ports::time::Clock, domain::record::RecordStore};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

pub struct RecordCommandService {
    pub(super) store: Arc<dyn RecordStore>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) hooks: Vec<Arc<dyn CreatingHook>>,
    pub(super) max_attempts: u32,
}

impl RecordCommandService {
    pub fn builder() -> RecordCommandServiceBuilder {
        RecordCommandServiceBuilder::default()
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

#[derive(Default)]
pub struct RecordCommandServiceBuilder {
    store: Option<Arc<dyn RecordStore>>,
    clock: Option<Arc<dyn Clock>>,
    hooks: Vec<Arc<dyn CreatingHook>>,
    max_attempts: Option<u32>,
}

impl RecordCommandServiceBuilder {
    pub fn store(mut self, store: Arc<dyn RecordStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Registers a pre-persist hook. Hooks run in registration order.
    pub fn hook(mut self, hook: Arc<dyn CreatingHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    pub fn build(self) -> Result<RecordCommandService, &'static str> {
        let max_attempts = self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS);
        if max_attempts == 0 {
            return Err("max_attempts must be at least 1");
        }

        Ok(RecordCommandService {
            store: self.store.ok_or("store is required")?,
            clock: self.clock.ok_or("clock is required")?,
            hooks: self.hooks,
            max_attempts,
        })
    }
}
