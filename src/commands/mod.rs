//! The three entry points: rendered search, plain HTTP fetch, and page inspection.
//!
//! Each command is split into input gathering (prompts, validated before any
//! network access) and a `run` function that is generic over the
//! [`PageFetcher`](crate::fetchers::PageFetcher), so the browser or HTTP
//! client can be swapped for a static page.

pub mod fetch;
pub mod inspect;
pub mod search;

use crate::error::Result;
use std::future::Future;

/// Runs `work` until it finishes or `interrupt` fires, whichever comes first
///
/// Returns `Ok(None)` when interrupted, so callers holding a browser session
/// still reach their release step.
pub async fn until_interrupted<T, W, I>(work: W, interrupt: I) -> Result<Option<T>>
where
    W: Future<Output = Result<T>>,
    I: Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        done = work => done.map(Some),
        signalled = interrupt => {
            signalled?;
            ::log::info!("Interrupted, releasing resources");
            Ok(None)
        }
    }
}
