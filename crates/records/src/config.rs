use records_core::query::RecordsQuery;
use reqwest::Url;

use crate::error::Error;

/// Records endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordsConfig {
    pub base_url: String,
}

impl RecordsConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3000/records";
    pub const BASE_URL_ENV: &'static str = "RECORDS_API_URL";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Load configuration from environment variables
    /// Uses RECORDS_API_URL with default fallback
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(Self::BASE_URL_ENV).unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string()),
        )
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }

    /// Full URI for one page query
    pub fn endpoint_uri(&self, query: &RecordsQuery) -> Result<Url, Error> {
        Url::parse_with_params(&self.base_url, query.to_pairs())
            .map_err(|e| Error::Config(format!("Invalid base URL {}: {}", self.base_url, e)))
    }
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}
