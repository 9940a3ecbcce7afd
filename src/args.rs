use clap::{Parser, Subcommand, ValueEnum};
use samplefindr::SearchMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "samplefindr")]
#[command(about = "Look up which records a song or artist sampled on WhoSampled")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// WebDriver server URL (overrides config and WEBDRIVER_URL)
    #[arg(long, global = true)]
    pub webdriver_url: Option<String>,

    /// Scheme and host to build listing URLs against
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Print records as a JSON array instead of text lines
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a listing in a headless browser and print up to ten samples
    Search {
        /// Search type, artist or song (prompted when omitted)
        mode: Option<String>,

        /// Artist or song title (prompted when omitted)
        name: Option<String>,
    },

    /// Fetch a listing over plain HTTP and print every sample
    Fetch {
        /// Artist name (prompted when omitted)
        artist: Option<String>,

        /// Listing type
        #[arg(short, long, value_enum, default_value_t = ModeArg::Artist)]
        mode: ModeArg,
    },

    /// Dump the rendered HTML of an artist page for debugging selectors
    Inspect {
        /// Artist slug or name
        #[arg(default_value = samplefindr::commands::inspect::DEFAULT_ARTIST)]
        artist: String,

        /// Run the browser without a window
        #[arg(long)]
        headless: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Artist,
    Song,
}

/// Convert from CLI argument mode to internal search mode
impl From<ModeArg> for SearchMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Artist => SearchMode::Artist,
            ModeArg::Song => SearchMode::Song,
        }
    }
}
