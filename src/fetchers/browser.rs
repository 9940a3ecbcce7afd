use crate::error::{Result, ScrapeError};
use crate::fetchers::PageFetcher;
use fantoccini::wd::Capabilities;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use tokio::runtime::{Handle, RuntimeFlavor};
use url::Url;

/// WebDriver servers tried when the configured one refuses a session
const FALLBACK_WEBDRIVER_URLS: [&str; 3] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4444", // Selenium / geckodriver default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// How to start the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserOptions {
    pub webdriver_url: String,
    pub headless: bool,
}

impl BrowserOptions {
    /// Chrome flags for this configuration
    pub fn chrome_args(&self) -> Vec<&'static str> {
        if self.headless {
            vec!["--headless", "--disable-gpu", "--no-sandbox"]
        } else {
            Vec::new()
        }
    }

    /// WebDriver capabilities requesting Chrome with [`Self::chrome_args`]
    pub fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::new();
        caps.insert("browserName".to_string(), json!("chrome"));
        caps.insert(
            "goog:chromeOptions".to_string(),
            json!({ "args": self.chrome_args() }),
        );
        caps
    }

    /// The configured WebDriver URL followed by the fallbacks, without duplicates
    pub fn candidate_urls(&self) -> Vec<&str> {
        let mut urls = vec![self.webdriver_url.as_str()];
        for url in FALLBACK_WEBDRIVER_URLS {
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
        urls
    }
}

/// A live WebDriver session
///
/// Release it with [`BrowserSession::close`] or [`BrowserSession::release_after`].
/// A session dropped without being released on a multi-threaded runtime is
/// closed before the drop returns; elsewhere it is logged and left open.
pub struct BrowserSession {
    client: Option<Client>,
}

impl BrowserSession {
    /// Opens a session on the first WebDriver server that accepts one
    pub async fn connect(options: &BrowserOptions) -> Result<Self> {
        let candidates = options.candidate_urls();

        for (attempt, url) in candidates.iter().enumerate() {
            if attempt > 0 {
                ::log::info!("Trying fallback WebDriver URL: {}", url);
            }

            let mut builder = ClientBuilder::native();
            builder.capabilities(options.capabilities());

            match builder.connect(url).await {
                Ok(client) => {
                    ::log::debug!(
                        "Connected to WebDriver at {} (headless: {})",
                        url,
                        options.headless
                    );
                    return Ok(Self {
                        client: Some(client),
                    });
                }
                Err(e) if attempt == 0 => {
                    ::log::error!("Failed to connect to WebDriver at {}: {}", url, e);
                }
                Err(_) => {
                    // Don't log error for fallbacks to avoid log spam
                }
            }
        }

        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err(ScrapeError::WebDriverUnavailable {
            tried: candidates.join(", "),
        })
    }

    /// Navigates to `url` and returns the document after scripts have run
    pub async fn render(&self, url: &Url) -> Result<String> {
        let client = self.client()?;

        ::log::info!("Navigating to {}", url);
        client.goto(url.as_str()).await?;

        let html = client.source().await?;
        ::log::debug!("Rendered {} ({} bytes)", url, html.len());
        Ok(html)
    }

    /// Ends the WebDriver session
    pub async fn close(mut self) -> Result<()> {
        match self.client.take() {
            Some(client) => {
                client.close().await?;
                ::log::debug!("Browser session closed");
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Closes the session and then hands back `outcome`
    ///
    /// The outcome's error wins over a failure to close.
    pub async fn release_after<T>(self, outcome: Result<T>) -> Result<T> {
        let closed = self.close().await;
        match (outcome, closed) {
            (Err(e), Err(close_err)) => {
                ::log::warn!("Failed to close browser session: {}", close_err);
                Err(e)
            }
            (outcome, closed) => {
                closed?;
                outcome
            }
        }
    }

    fn client(&self) -> Result<&Client> {
        // `client` is only taken by `close`, which consumes the session
        self.client
            .as_ref()
            .ok_or_else(|| ScrapeError::WebDriverUnavailable {
                tried: String::from("closed session"),
            })
    }
}

impl PageFetcher for BrowserSession {
    async fn fetch(&self, url: &Url) -> Result<String> {
        self.render(url).await
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        let Some(client) = self.client.take() else {
            return;
        };

        ::log::warn!("Browser session dropped without being closed; closing it now");
        match Handle::try_current() {
            // block_in_place panics on a current-thread runtime
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                let closed = tokio::task::block_in_place(|| handle.block_on(client.close()));
                if let Err(e) = closed {
                    ::log::warn!("Failed to close browser session: {}", e);
                }
            }
            _ => {
                ::log::error!("No multi-threaded runtime to close the browser session on");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(headless: bool) -> BrowserOptions {
        BrowserOptions {
            webdriver_url: "http://localhost:4444".to_string(),
            headless,
        }
    }

    #[test]
    fn test_headless_flags() {
        assert_eq!(
            options(true).chrome_args(),
            vec!["--headless", "--disable-gpu", "--no-sandbox"]
        );
        assert!(options(false).chrome_args().is_empty());
    }

    #[test]
    fn test_capabilities_carry_chrome_args() {
        let caps = options(true).capabilities();
        assert_eq!(caps["browserName"], "chrome");
        assert_eq!(
            caps["goog:chromeOptions"]["args"],
            json!(["--headless", "--disable-gpu", "--no-sandbox"])
        );
    }

    #[test]
    fn test_candidate_urls_skip_duplicates() {
        assert_eq!(
            options(true).candidate_urls(),
            vec![
                "http://localhost:4444",
                "http://localhost:9515",
                "http://127.0.0.1:4444"
            ]
        );

        let custom = BrowserOptions {
            webdriver_url: "http://grid:4444/wd/hub".to_string(),
            headless: true,
        };
        let urls = custom.candidate_urls();
        assert_eq!(urls.len(), 4);
        assert_eq!(urls[0], "http://grid:4444/wd/hub");
    }

    #[tokio::test]
    async fn test_render_without_client_is_an_error() {
        let session = BrowserSession { client: None };
        let url = Url::parse("https://www.whosampled.com/").unwrap();
        let err = session.render(&url).await.unwrap_err();
        assert!(matches!(err, ScrapeError::WebDriverUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_closing_unconnected_session_is_noop() {
        let session = BrowserSession { client: None };
        let outcome = session.release_after(Ok::<_, ScrapeError>(3)).await;
        assert_eq!(outcome.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_release_after_keeps_outcome_error() {
        let session = BrowserSession { client: None };
        let outcome = session
            .release_after::<()>(Err(ScrapeError::InvalidMode("x".into())))
            .await;
        assert!(matches!(outcome, Err(ScrapeError::InvalidMode(_))));
    }
}
