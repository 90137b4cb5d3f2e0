//! Command-line interface definitions for Awful Feed News.
//!
//! All arguments can be provided via command-line flags or environment variables.

use clap::Parser;

/// Command-line arguments for the Awful Feed News application.
///
/// # Examples
///
/// ```sh
/// # Built-in feeds, JSON printed to stdout
/// awful_feed_news
///
/// # Custom feeds written to a dated JSON file
/// awful_feed_news --sources feeds.yaml -j ./json
///
/// # At most four feeds in flight, ten second request timeout
/// awful_feed_news --max-concurrent-sources 4 --request-timeout-secs 10
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// YAML file listing feed sources (defaults to the built-in registry)
    #[arg(short, long, env = "FEED_SOURCES")]
    pub sources: Option<String>,

    /// Output directory for the JSON edition file (prints to stdout when omitted)
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// Maximum number of sources fetched at the same time (unbounded when omitted)
    #[arg(long, env = "MAX_CONCURRENT_SOURCES")]
    pub max_concurrent_sources: Option<usize>,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long, env = "REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,
}
