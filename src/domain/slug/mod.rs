pub mod availability;
pub mod config;
pub mod services;
pub mod value_objects;

pub use availability::{SlugAvailability, StoreSlugScope};
pub use config::{SlugConfig, SlugConfigBuilder};
pub use services::{SlugAssignment, SlugService};
pub use value_objects::{Slug, is_slug_form};
