// src/application/ports/util.rs

/// Turns arbitrary text into a slug token. Must be pure and return an empty
/// string for input without any alphanumeric content.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
