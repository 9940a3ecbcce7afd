pub mod browser;
pub mod http;

pub use browser::{BrowserOptions, BrowserSession};
pub use http::HttpFetcher;

use crate::error::Result;
use url::Url;

/// Something that turns a URL into an HTML document
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// Fetch the document at `url`
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// Serves a fixed document and records the URLs it was asked for
#[cfg(test)]
pub(crate) struct StaticPage {
    html: String,
    pub requested: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl StaticPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            requested: std::cell::RefCell::new(Vec::new()),
        }
    }
}

#[cfg(test)]
impl PageFetcher for StaticPage {
    async fn fetch(&self, url: &Url) -> Result<String> {
        self.requested.borrow_mut().push(url.to_string());
        Ok(self.html.clone())
    }
}
