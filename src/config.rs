// src/config.rs
use std::env;
use thiserror::Error;

use crate::domain::slug::SlugConfig;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    slug: SlugConfig,
    max_attempts: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://sluggable.db?mode=rwc".into()
}

fn default_collection() -> String {
    "records".into()
}

fn default_max_attempts() -> u32 {
    3
}

impl AppConfig {
    /// Build configuration from environment variables. `SLUG_SOURCE_FIELD`
    /// is required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let collection = lookup("SLUG_COLLECTION").unwrap_or_else(default_collection);
        let source_field =
            lookup("SLUG_SOURCE_FIELD").ok_or(ConfigError::Missing("SLUG_SOURCE_FIELD"))?;

        let mut slug = SlugConfig::builder()
            .collection(collection)
            .source_field(source_field);
        if let Some(field) = lookup("SLUG_FIELD") {
            slug = slug.slug_field(field);
        }
        if let Some(fallback) = lookup("SLUG_FALLBACK") {
            slug = slug.fallback(fallback);
        }
        let slug = slug
            .build()
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;

        let max_attempts = match lookup("SLUG_MAX_ATTEMPTS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n >= 1)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "SLUG_MAX_ATTEMPTS must be a positive integer, got {raw:?}"
                    ))
                })?,
            None => default_max_attempts(),
        };

        Ok(Self {
            database_url,
            slug,
            max_attempts,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn slug(&self) -> &SlugConfig {
        &self.slug
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}
