use crate::config::ScraperConfig;
use crate::error::Result;
use crate::fetchers::PageFetcher;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Plain HTTP GET without script execution
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client that sends the configured User-Agent and nothing else
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());

        if let Some(secs) = config.http_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        ::log::info!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        ::log::debug!("{} responded with {}", url, response.status());

        let body = response.error_for_status()?.text().await?;
        ::log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
