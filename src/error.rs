use thiserror::Error;

/// Errors that can end a scraping run.
///
/// An empty result is not an error: a page with no sample listing yields
/// `Ok` with zero records. `StructureChanged` is reserved for pages whose
/// listing exists but no longer has the shape the selectors expect.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The search type was neither `artist` nor `song`.
    #[error("Please enter a valid search type: 'artist' or 'song' (got '{0}')")]
    InvalidMode(String),

    /// A base URL or target URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A CSS selector failed to compile.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// None of the candidate WebDriver servers accepted a session.
    #[error("could not connect to a WebDriver server (tried {tried})")]
    WebDriverUnavailable { tried: String },

    /// A WebDriver command failed after the session was established.
    #[error("browser command failed: {0}")]
    Browser(#[from] fantoccini::error::CmdError),

    /// Transport failure or non-2xx response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A listing container was found but a required field inside it was not.
    #[error("page structure changed: '{container}' has no '{selector}'")]
    StructureChanged {
        container: &'static str,
        selector: &'static str,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
