use clap::Parser;
use samplefindr::commands::{fetch, inspect, search, until_interrupted};
use samplefindr::fetchers::{BrowserSession, HttpFetcher};
use samplefindr::{Overrides, Query, Result, RunContext, ScraperConfig};
use std::io;
use std::process::ExitCode;

mod args;
use args::{Args, Command};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let ctx = build_context(&args)?;
    let mut out = io::stdout();

    match args.command {
        Command::Search { mode, name } => {
            let query = search::read_query(mode, name, &mut io::stdin().lock(), &mut out)?;

            let session = BrowserSession::connect(&ctx.search_browser()).await?;
            let work = search::run(&ctx, &session, &query, &mut out);
            let outcome = until_interrupted(work, tokio::signal::ctrl_c()).await;
            if let Some(printed) = session.release_after(outcome).await? {
                ::log::info!("Printed {} samples", printed);
            }
        }
        Command::Fetch { artist, mode } => {
            let artist = fetch::read_artist(artist, &mut io::stdin().lock(), &mut out)?;
            let query = Query::new(mode.into(), &artist);

            let fetcher = HttpFetcher::new(ctx.config())?;
            let printed = fetch::run(&ctx, &fetcher, &query, &mut out).await?;
            ::log::info!("Printed {} samples", printed);
        }
        Command::Inspect { artist, headless } => {
            let session = BrowserSession::connect(&ctx.inspect_browser(headless)).await?;
            let work = async {
                inspect::run(&ctx, &session, &artist, &mut out).await?;
                inspect::dismissal_from_stdin().await
            };
            let outcome = until_interrupted(work, tokio::signal::ctrl_c()).await;
            session.release_after(outcome).await?;
        }
    }

    Ok(())
}

/// Layer config file, environment and flags into one run context
fn build_context(args: &Args) -> Result<RunContext> {
    let config = match &args.config {
        Some(path) => {
            ::log::info!("Loading configuration from file: {}", path.display());
            ScraperConfig::from_file(path)?
        }
        None => ScraperConfig::default(),
    };

    let overrides = Overrides {
        webdriver_url: args.webdriver_url.clone(),
        base_url: args.base_url.clone(),
        json: args.json,
    };

    RunContext::layered(config, std::env::var("WEBDRIVER_URL").ok(), &overrides)
}
