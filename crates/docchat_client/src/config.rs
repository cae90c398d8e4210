//! API endpoint configuration

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where the backend lives. All endpoint URLs derive from `base_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    /// Primary override
    pub const BASE_ENV: &'static str = "DOCCHAT_API_BASE";
    /// Honoured for deployments that already export the web client's variable
    pub const LEGACY_BASE_ENV: &'static str = "VITE_API_BASE_URL";

    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        [Self::BASE_ENV, Self::LEGACY_BASE_ENV]
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Self::new(base_url).base_url;
        self
    }

    /// Checks that the base is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| Error::InvalidBaseUrl(format!("{}: {}", self.base_url, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(Error::InvalidBaseUrl(format!(
                "{}: unsupported scheme {}",
                self.base_url, other
            ))),
        }
    }

    pub fn ask_url(&self) -> String {
        format!("{}/ask", self.base_url)
    }

    pub fn journals_url(&self) -> String {
        format!("{}/journals", self.base_url)
    }

    pub fn pdf_url(&self, document_id: &str) -> String {
        format!("{}/pdf/{}", self.base_url, document_id)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }
}
