pub mod errors;
pub mod record;
pub mod slug;
