// Re-export modules
pub mod commands;
pub mod config;
pub mod error;
pub mod fetchers;
pub mod parsers;
pub mod prompt;
pub mod query;
pub mod results;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use error::{Result, ScrapeError};
pub use query::{Query, SearchMode, slugify};
pub use results::{OutputFormat, SampleRecord};

use fetchers::BrowserOptions;
use url::Url;

/// Values given on the command line, applied over the config file and environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub webdriver_url: Option<String>,
    pub base_url: Option<String>,
    pub json: bool,
}

/// Everything a run needs, built once at startup and passed down explicitly
#[derive(Debug, Clone)]
pub struct RunContext {
    config: ScraperConfig,
    base_url: Url,
    output: OutputFormat,
}

impl RunContext {
    /// Create a context from configuration, validating the base URL
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        Ok(Self {
            config,
            base_url,
            output: OutputFormat::default(),
        })
    }

    /// Layer configuration: `config`, then `WEBDRIVER_URL` (`env_webdriver_url`), then flags
    pub fn layered(
        config: ScraperConfig,
        env_webdriver_url: Option<String>,
        overrides: &Overrides,
    ) -> Result<Self> {
        let mut ctx = Self::new(config.with_webdriver_env(env_webdriver_url))?;

        if let Some(url) = &overrides.webdriver_url {
            ctx = ctx.with_webdriver_url(url.as_str());
        }
        if let Some(base_url) = &overrides.base_url {
            ctx = ctx.with_base_url(base_url)?;
        }
        if overrides.json {
            ctx = ctx.with_output(OutputFormat::Json);
        }

        Ok(ctx)
    }

    /// Set how records are printed
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Set the WebDriver server URL
    pub fn with_webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.config.webdriver_url = url.into();
        self
    }

    /// Run the page inspector with or without a window
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    /// Point URL templates at another host
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = Url::parse(base_url)?;
        self.config.base_url = base_url.to_string();
        Ok(self)
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    pub fn output(&self) -> OutputFormat {
        self.output
    }

    /// Browser for the rendered search, which never opens a window
    pub fn search_browser(&self) -> BrowserOptions {
        BrowserOptions {
            webdriver_url: self.config.webdriver_url.clone(),
            headless: true,
        }
    }

    /// Browser for the page inspector: visible unless the flag or config asks otherwise
    pub fn inspect_browser(&self, headless_flag: bool) -> BrowserOptions {
        BrowserOptions {
            webdriver_url: self.config.webdriver_url.clone(),
            headless: headless_flag || self.config.headless,
        }
    }

    /// Listing URL for `query`
    pub fn target_url(&self, query: &Query) -> Result<Url> {
        query.target_url(&self.base_url)
    }
}
