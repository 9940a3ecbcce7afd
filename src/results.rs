use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// One sample attribution scraped from a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Title of the sampled track
    pub title: String,

    /// Release year, when the listing shows one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    /// Artist of the sampled track
    pub artist: String,
}

impl SampleRecord {
    pub fn new(title: String, year: Option<String>, artist: String) -> Self {
        Self {
            title,
            year,
            artist,
        }
    }
}

impl fmt::Display for SampleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.year {
            Some(year) => write!(f, "{} ({}) by {}", self.title, year, self.artist),
            None => write!(f, "{} by {}", self.title, self.artist),
        }
    }
}

/// How records are written to standard output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Banner followed by one line per record
    #[default]
    Text,
    /// A JSON array of records, nothing else
    Json,
}

/// A set of records ready to print under a heading
pub struct Listing<'a> {
    pub heading: &'a str,
    pub records: &'a [SampleRecord],
    /// Prefix each text line with `- `
    pub bulleted: bool,
}

impl Listing<'_> {
    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => {
                writeln!(out, "\n🎵 Samples for {} 🎵\n", self.heading)?;
                for record in self.records {
                    if self.bulleted {
                        writeln!(out, "- {}", record)?;
                    } else {
                        writeln!(out, "{}", record)?;
                    }
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self.records)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}
