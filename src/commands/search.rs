use crate::RunContext;
use crate::error::Result;
use crate::fetchers::PageFetcher;
use crate::parsers::html;
use crate::prompt::value_or_prompt;
use crate::query::Query;
use crate::results::Listing;
use std::io::{BufRead, Write};

/// Reads the search type and name, prompting for whichever was not given
///
/// An invalid search type fails here, before anything touches the network.
pub fn read_query<R: BufRead, W: Write>(
    mode: Option<String>,
    name: Option<String>,
    input: &mut R,
    out: &mut W,
) -> Result<Query> {
    let mode = value_or_prompt(mode, input, out, "Enter search type (artist/song): ")?;
    let mode = mode.parse()?;
    let name = value_or_prompt(name, input, out, "Enter the name (artist or song title): ")?;
    Ok(Query::new(mode, &name))
}

/// Fetches the rendered listing for `query` and prints up to the configured limit
///
/// Returns the number of records printed.
pub async fn run<F: PageFetcher, W: Write>(
    ctx: &RunContext,
    fetcher: &F,
    query: &Query,
    out: &mut W,
) -> Result<usize> {
    let url = ctx.target_url(query)?;
    ::log::info!("Searching {} samples for '{}': {}", query.mode, query.name, url);

    let page = fetcher.fetch(&url).await?;
    let records = html::parse_listing(&page, ctx.config().listing_limit)?;

    Listing {
        heading: &query.name,
        records: &records,
        bulleted: false,
    }
    .write_to(out, ctx.output())?;

    Ok(records.len())
}
