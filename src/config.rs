use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration shared by every entry point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Scheme and host the URL templates are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Run the page inspector without a window; search is always headless
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Maximum number of records printed by the interactive search
    #[serde(default = "default_listing_limit")]
    pub listing_limit: usize,

    /// Number of matched fields echoed by the page inspector
    #[serde(default = "default_sample_limit")]
    pub sample_limit: usize,

    /// User-Agent sent by the plain HTTP fetcher
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP request timeout; the client default applies when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_timeout_secs: Option<u64>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            webdriver_url: default_webdriver_url(),
            headless: default_headless(),
            listing_limit: default_listing_limit(),
            sample_limit: default_sample_limit(),
            user_agent: default_user_agent(),
            http_timeout_secs: None,
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Override the WebDriver URL with the value of `WEBDRIVER_URL`
    ///
    /// Unset and empty values leave the configured URL in place.
    pub fn with_webdriver_env(mut self, value: Option<String>) -> Self {
        if let Some(webdriver_url) = value {
            if !webdriver_url.is_empty() {
                ::log::debug!("Using WEBDRIVER_URL from environment: {}", webdriver_url);
                self.webdriver_url = webdriver_url;
            }
        }
        self
    }
}

fn default_base_url() -> String {
    "https://www.whosampled.com".to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_headless() -> bool {
    false
}

fn default_listing_limit() -> usize {
    10
}

fn default_sample_limit() -> usize {
    5
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = ScraperConfig::from_json("{}").unwrap();
        assert_eq!(config, ScraperConfig::default());
        assert_eq!(config.base_url, "https://www.whosampled.com");
        assert_eq!(config.listing_limit, 10);
        assert_eq!(config.sample_limit, 5);
        assert_eq!(config.user_agent, "Mozilla/5.0");
        assert!(!config.headless);
        assert!(config.http_timeout_secs.is_none());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = ScraperConfig::from_json(
            r#"{
                "webdriver_url": "http://localhost:9515",
                "headless": true,
                "http_timeout_secs": 20
            }"#,
        )
        .unwrap();
        assert_eq!(config.webdriver_url, "http://localhost:9515");
        assert!(config.headless);
        assert_eq!(config.http_timeout_secs, Some(20));
        assert_eq!(config.listing_limit, 10);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = ScraperConfig::from_json("{ headless: ").unwrap_err();
        assert!(matches!(err, crate::ScrapeError::Json(_)));
    }

    #[test]
    fn test_env_overrides_configured_webdriver_url() {
        let config = ScraperConfig::from_json(r#"{"webdriver_url": "http://from-file:4444"}"#)
            .unwrap()
            .with_webdriver_env(Some("http://from-env:9515".to_string()));
        assert_eq!(config.webdriver_url, "http://from-env:9515");
    }

    #[test]
    fn test_unset_or_empty_env_keeps_configured_webdriver_url() {
        let config = ScraperConfig::from_json(r#"{"webdriver_url": "http://from-file:4444"}"#)
            .unwrap();
        let unset = config.clone().with_webdriver_env(None);
        let empty = config.with_webdriver_env(Some(String::new()));
        assert_eq!(unset.webdriver_url, "http://from-file:4444");
        assert_eq!(empty.webdriver_url, "http://from-file:4444");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ScraperConfig::from_file("/nonexistent/samplefindr.json").unwrap_err();
        assert!(matches!(err, crate::ScrapeError::Io(_)));
    }
}
