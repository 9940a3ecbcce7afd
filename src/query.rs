use crate::error::{Result, ScrapeError};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// What a search name refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Artist,
    Song,
}

impl SearchMode {
    /// Every mode, in prompt order
    pub const ALL: [SearchMode; 2] = [SearchMode::Artist, SearchMode::Song];

    /// Path template for the samples listing; `{slug}` is replaced by the slugified name
    pub fn path_template(self) -> &'static str {
        match self {
            SearchMode::Artist => "{slug}/samples/?ob=0",
            SearchMode::Song => "songs/{slug}/samples/?ob=0",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Artist => "artist",
            SearchMode::Song => "song",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = ScrapeError;

    /// Accepts `artist` or `song`, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        SearchMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| ScrapeError::InvalidMode(s.trim().to_string()))
    }
}

/// Replaces every space with a hyphen and changes nothing else
pub fn slugify(name: &str) -> String {
    name.replace(' ', "-")
}

/// Inverse used for display headings: hyphens back to spaces
pub fn unslugify(slug: &str) -> String {
    slug.replace('-', " ")
}

/// A validated search: mode plus the trimmed free-text name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub mode: SearchMode,
    pub name: String,
}

impl Query {
    pub fn new(mode: SearchMode, name: &str) -> Self {
        Self {
            mode,
            name: name.trim().to_string(),
        }
    }

    /// Validate raw user input into a query
    pub fn parse(mode: &str, name: &str) -> Result<Self> {
        Ok(Self::new(mode.parse()?, name))
    }

    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// Resolve the listing URL for this query against `base`
    pub fn target_url(&self, base: &Url) -> Result<Url> {
        let path = self.mode.path_template().replace("{slug}", &self.slug());
        let url = Url::parse(&format!(
            "{}/{}",
            base.as_str().trim_end_matches('/'),
            path
        ))?;
        Ok(url)
    }
}
