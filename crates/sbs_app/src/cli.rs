use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Scrape a product listing and print a JSON report of its products.
#[derive(Debug, Parser)]
#[command(name = "sbs", version)]
pub struct Args {
    /// RON file with scrape settings; missing fields keep their defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listing endpoint to scrape instead of the configured one
    #[arg(short, long)]
    pub url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Product pages fetched at once (results keep listing order)
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Log debug output to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Info
        }
    }
}
