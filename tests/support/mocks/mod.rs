// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod stores;
pub mod time;

pub use stores::{FailingStore, StaleStore};
pub use time::{DummyClock, fixed_now};
