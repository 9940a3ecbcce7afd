use crate::RunContext;
use crate::error::Result;
use crate::fetchers::PageFetcher;
use crate::parsers::html;
use crate::prompt::value_or_prompt;
use crate::query::{Query, unslugify};
use crate::results::Listing;
use std::io::{BufRead, Write};

/// Reads the artist name unless it was given on the command line
pub fn read_artist<R: BufRead, W: Write>(
    artist: Option<String>,
    input: &mut R,
    out: &mut W,
) -> Result<String> {
    value_or_prompt(artist, input, out, "Enter artist name (e.g., J. Cole): ")
}

/// Fetches the unrendered listing for `query` and prints every entry
///
/// Returns the number of records printed.
pub async fn run<F: PageFetcher, W: Write>(
    ctx: &RunContext,
    fetcher: &F,
    query: &Query,
    out: &mut W,
) -> Result<usize> {
    let url = ctx.target_url(query)?;
    ::log::info!("Fetching {} samples for '{}': {}", query.mode, query.name, url);

    let page = fetcher.fetch(&url).await?;
    let records = html::parse_track_listing(&page)?;

    let heading = unslugify(&query.slug());
    Listing {
        heading: &heading,
        records: &records,
        bulleted: true,
    }
    .write_to(out, ctx.output())?;

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetchers::StaticPage;
    use crate::{ScrapeError, ScraperConfig, SearchMode};

    fn ctx() -> RunContext {
        RunContext::new(ScraperConfig::default()).unwrap()
    }

    fn track_listing(n: usize) -> String {
        let entries: String = (1..=n)
            .map(|i| {
                format!(
                    "<div class=\"trackSample\"><a class=\"trackName\">Break {i}</a>\
                     <span class=\"trackArtist\">Crew {i}</span></div>"
                )
            })
            .collect();
        format!("<html><body><div class=\"trackListing\">{entries}</div></body></html>")
    }

    #[test]
    fn test_read_artist_prompt() {
        let mut input = "J. Cole\n".as_bytes();
        let mut out = Vec::new();
        assert_eq!(read_artist(None, &mut input, &mut out).unwrap(), "J. Cole");
        assert_eq!(out, "Enter artist name (e.g., J. Cole): ".as_bytes());
    }

    #[tokio::test]
    async fn test_every_entry_is_printed() {
        let page = StaticPage::new(track_listing(23));
        let query = Query::new(SearchMode::Artist, "J. Cole");
        let mut out = Vec::new();

        let printed = run(&ctx(), &page, &query, &mut out).await.unwrap();

        assert_eq!(printed, 23);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\n🎵 Samples for J. Cole 🎵\n\n- Break 1 by Crew 1\n"));
        assert_eq!(text.lines().filter(|l| l.starts_with("- ")).count(), 23);
        assert_eq!(
            page.requested.borrow()[0],
            "https://www.whosampled.com/J.-Cole/samples/?ob=0"
        );
    }

    #[tokio::test]
    async fn test_empty_listing_prints_banner_only() {
        let page = StaticPage::new("<div class=\"trackListing\"></div>");
        let query = Query::new(SearchMode::Artist, "Kanye-West");
        let mut out = Vec::new();

        let printed = run(&ctx(), &page, &query, &mut out).await.unwrap();

        assert_eq!(printed, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n🎵 Samples for Kanye West 🎵\n\n"
        );
    }

    #[tokio::test]
    async fn test_changed_markup_is_an_error() {
        let page = StaticPage::new(
            "<div class=\"trackListing\"><div class=\"trackSample\"><b>Break</b></div></div>",
        );
        let query = Query::new(SearchMode::Artist, "J. Cole");
        let mut out = Vec::new();

        let err = run(&ctx(), &page, &query, &mut out).await.unwrap_err();

        assert!(matches!(err, ScrapeError::StructureChanged { .. }));
        assert!(out.is_empty());
    }
}
