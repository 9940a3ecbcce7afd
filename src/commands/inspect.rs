use crate::RunContext;
use crate::error::Result;
use crate::fetchers::PageFetcher;
use crate::parsers::html::{self, FieldSample};
use crate::parsers::{TRACK_NAME, tree};
use crate::prompt::read_line;
use crate::query::{Query, SearchMode};
use crate::results::OutputFormat;
use scraper::Html;
use std::io::{BufRead, Write};

/// Artist inspected when none is given
pub const DEFAULT_ARTIST: &str = "Kanye-West";

/// Dumps the rendered artist page and a sample of its track titles
///
/// With JSON output only the count and samples are written.
pub async fn run<F: PageFetcher, W: Write>(
    ctx: &RunContext,
    fetcher: &F,
    artist: &str,
    out: &mut W,
) -> Result<FieldSample> {
    let query = Query::new(SearchMode::Artist, artist);
    let url = ctx.target_url(&query)?;
    ::log::info!("Inspecting {}", url);

    let page = fetcher.fetch(&url).await?;
    let field = html::sample_field(&page, TRACK_NAME, ctx.config().sample_limit)?;

    match ctx.output() {
        OutputFormat::Text => {
            writeln!(out, "===== RAW HTML START =====")?;
            write!(out, "{}", tree::prettify(&Html::parse_document(&page)))?;
            writeln!(out, "===== RAW HTML END =====")?;

            writeln!(out, "trackName count: {}", field.count)?;
            for sample in &field.samples {
                writeln!(out, "🎵 {}", sample)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &field)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(field)
}

/// Blocks until the user presses Enter
pub fn wait_for_dismissal<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<()> {
    read_line(input, out, "Press Enter to close the browser.")?;
    Ok(())
}

/// Waits for Enter on standard input without blocking the runtime
///
/// The read happens on a detached thread so an interrupted wait does not keep
/// the process alive at shutdown.
pub async fn dismissal_from_stdin() -> Result<()> {
    let (tx, rx) = tokio::sync::oneshot::channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        let outcome = wait_for_dismissal(&mut stdin.lock(), &mut std::io::stdout());
        if tx.send(outcome).is_err() {
            ::log::debug!("Dismissal read finished after the wait was abandoned");
        }
    });

    rx.await
        .map_err(|_| std::io::Error::other("standard input reader stopped"))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScraperConfig;
    use crate::fetchers::StaticPage;

    #[tokio::test]
    async fn test_dump_count_and_samples() {
        let titles: String = (1..=7)
            .map(|i| format!("<span class=\"trackName\">Cut {i}</span>"))
            .collect();
        let page = StaticPage::new(format!("<html><body>{titles}</body></html>"));
        let ctx = RunContext::new(ScraperConfig::default()).unwrap();
        let mut out = Vec::new();

        let field = run(&ctx, &page, DEFAULT_ARTIST, &mut out).await.unwrap();

        assert_eq!(field.count, 7);
        assert_eq!(field.samples.len(), 5);
        assert_eq!(
            page.requested.borrow()[0],
            "https://www.whosampled.com/Kanye-West/samples/?ob=0"
        );

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("===== RAW HTML START =====\n<html>\n"));
        assert!(text.contains("  <span class=\"trackName\">\n   Cut 7\n  </span>\n"));
        assert!(text.contains("</html>\n===== RAW HTML END =====\ntrackName count: 7\n"));
        assert!(text.ends_with("🎵 Cut 1\n🎵 Cut 2\n🎵 Cut 3\n🎵 Cut 4\n🎵 Cut 5\n"));
    }

    #[tokio::test]
    async fn test_page_without_titles() {
        let page = StaticPage::new("<html><body><p>Access denied</p></body></html>");
        let ctx = RunContext::new(ScraperConfig::default()).unwrap();
        let mut out = Vec::new();

        let field = run(&ctx, &page, "Some Artist", &mut out).await.unwrap();

        assert_eq!(field.count, 0);
        assert!(String::from_utf8(out).unwrap().ends_with("trackName count: 0\n"));
        assert_eq!(
            page.requested.borrow()[0],
            "https://www.whosampled.com/Some-Artist/samples/?ob=0"
        );
    }

    #[tokio::test]
    async fn test_json_output_skips_dump() {
        let page = StaticPage::new(
            "<html><body><i class=\"trackName\">Cut 1</i>\
             <i class=\"trackName\">Cut 2</i></body></html>",
        );
        let ctx = RunContext::new(ScraperConfig::default())
            .unwrap()
            .with_output(OutputFormat::Json);
        let mut out = Vec::new();

        run(&ctx, &page, DEFAULT_ARTIST, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("RAW HTML"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["samples"], serde_json::json!(["Cut 1", "Cut 2"]));
    }

    #[test]
    fn test_wait_for_dismissal_consumes_one_line() {
        let mut input = "\nleftover\n".as_bytes();
        let mut out = Vec::new();
        wait_for_dismissal(&mut input, &mut out).unwrap();
        assert_eq!(out, "Press Enter to close the browser.".as_bytes());
        assert_eq!(input, "leftover\n".as_bytes());
    }
}
