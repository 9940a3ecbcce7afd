use crate::error::{Result, ScrapeError};
use crate::parsers::text::{element_text, stripped_text};
use crate::parsers::{
    TRACK_ARTIST, TRACK_ARTIST_NAME, TRACK_NAME, TRACK_SAMPLE, TRACK_YEAR, selector,
};
use crate::results::SampleRecord;
use scraper::Html;
use serde::Serialize;

/// Count and leading values of one selector's matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSample {
    pub count: usize,
    pub samples: Vec<String>,
}

/// Parses a browser-rendered listing into at most `limit` records
///
/// Titles, years and artists are selected independently and paired by
/// position, so the result length is the smallest of the three match counts
/// and `limit`.
pub fn parse_listing(html: &str, limit: usize) -> Result<Vec<SampleRecord>> {
    let doc = Html::parse_document(html);

    let titles = select_texts(&doc, TRACK_NAME)?;
    let years = select_texts(&doc, TRACK_YEAR)?;
    let artists = select_texts(&doc, TRACK_ARTIST_NAME)?;

    ::log::debug!(
        "Listing matched {} titles, {} years, {} artists",
        titles.len(),
        years.len(),
        artists.len()
    );

    let records = titles
        .into_iter()
        .zip(years)
        .zip(artists)
        .take(limit)
        .map(|((title, year), artist)| SampleRecord::new(title, Some(year), artist))
        .collect();

    Ok(records)
}

/// Parses every sample entry of a server-rendered listing
///
/// A page without entries parses to an empty list. An entry that lacks its
/// title or artist means the markup no longer matches and is reported as
/// [`ScrapeError::StructureChanged`].
pub fn parse_track_listing(html: &str) -> Result<Vec<SampleRecord>> {
    let doc = Html::parse_document(html);

    let container_selector = selector(TRACK_SAMPLE)?;
    let title_selector = selector(TRACK_NAME)?;
    let artist_selector = selector(TRACK_ARTIST)?;

    let mut records = Vec::new();
    for entry in doc.select(&container_selector) {
        let title = entry
            .select(&title_selector)
            .next()
            .ok_or(ScrapeError::StructureChanged {
                container: TRACK_SAMPLE,
                selector: TRACK_NAME,
            })?;
        let artist = entry
            .select(&artist_selector)
            .next()
            .ok_or(ScrapeError::StructureChanged {
                container: TRACK_SAMPLE,
                selector: TRACK_ARTIST,
            })?;

        records.push(SampleRecord::new(
            stripped_text(title),
            None,
            stripped_text(artist),
        ));
    }

    ::log::debug!("Track listing parsed {} entries", records.len());
    Ok(records)
}

/// Counts matches of `css` and keeps the trimmed text of the first `limit`
pub fn sample_field(html: &str, css: &str, limit: usize) -> Result<FieldSample> {
    let doc = Html::parse_document(html);
    let texts = select_texts(&doc, css)?;

    Ok(FieldSample {
        count: texts.len(),
        samples: texts.into_iter().take(limit).collect(),
    })
}

fn select_texts(doc: &Html, css: &str) -> Result<Vec<String>> {
    let selector = selector(css)?;
    Ok(doc.select(&selector).map(element_text).collect())
}
