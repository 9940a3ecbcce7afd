pub mod html;
pub mod text;
pub mod tree;


use crate::error::{Result, ScrapeError};
use scraper::Selector;

/// Title of a sampled track
pub const TRACK_NAME: &str = ".trackName";
/// Release year next to a track title
pub const TRACK_YEAR: &str = ".trackYear";
/// Artist link in the rendered listing
pub const TRACK_ARTIST_NAME: &str = ".trackArtistName";
/// Artist element inside a server-rendered sample entry
pub const TRACK_ARTIST: &str = ".trackArtist";
/// One sample entry in the server-rendered listing
pub const TRACK_SAMPLE: &str = ".trackListing .trackSample";

/// Compiles a CSS selector, reporting the offending text on failure
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{css}: {e:?}")))
}
