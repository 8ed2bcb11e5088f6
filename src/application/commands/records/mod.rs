mod create;
mod hooks;
mod service;

pub use create::{CreateRecordCommand, CreateRecordCommandBuilder};
pub use hooks::{CreatingHook, HookOutcome, SlugCreatingHook};
pub use service::{DEFAULT_MAX_ATTEMPTS, RecordCommandService, RecordCommandServiceBuilder};
