// src/config.rs
use crate::domain::team::services::DEFAULT_SUFFIX_ATTEMPTS;
use crate::infrastructure::util::DEFAULT_SUFFIX_LENGTH;
use std::env;
use thiserror::Error;

const SUFFIX_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 4..=32;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    slug_suffix_length: usize,
    slug_suffix_attempts: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://team_core.db?mode=rwc".into()
}

fn parse_usize(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: usize,
) -> Result<usize, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a positive integer, got {raw:?}"))),
        None => Ok(default),
    }
}

impl AppConfig {
    /// Build configuration from environment variables. Every key is optional;
    /// values that are present must parse and fall within range.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading keys through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let slug_suffix_length = parse_usize(&lookup, "SLUG_SUFFIX_LENGTH", DEFAULT_SUFFIX_LENGTH)?;
        if !SUFFIX_LENGTH_RANGE.contains(&slug_suffix_length) {
            return Err(ConfigError::Invalid(format!(
                "SLUG_SUFFIX_LENGTH must be between {} and {}",
                SUFFIX_LENGTH_RANGE.start(),
                SUFFIX_LENGTH_RANGE.end()
            )));
        }

        let slug_suffix_attempts = parse_usize(&lookup, "SLUG_SUFFIX_ATTEMPTS", DEFAULT_SUFFIX_ATTEMPTS)?;
        if slug_suffix_attempts == 0 {
            return Err(ConfigError::Invalid(
                "SLUG_SUFFIX_ATTEMPTS must be at least 1".into(),
            ));
        }

        Ok(Self {
            database_url,
            slug_suffix_length,
            slug_suffix_attempts,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Length of the random tail appended to colliding slugs.
    pub fn slug_suffix_length(&self) -> usize {
        self.slug_suffix_length
    }

    pub fn slug_suffix_attempts(&self) -> usize {
        self.slug_suffix_attempts
    }
}
