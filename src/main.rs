//! # Awful Feed News
//!
//! Command-line front end: load the source registry, ingest every feed, and
//! write the resulting edition as JSON.
//!
//! ## Usage
//!
//! ```sh
//! awful_feed_news --sources feeds.yaml -j ./json
//! ```

use awful_feed_news::cli::Cli;
use awful_feed_news::models::Edition;
use awful_feed_news::outputs::json;
use awful_feed_news::utils::{ensure_writable_dir, time_of_day};
use awful_feed_news::{build_client, default_sources, load_sources, Ingester};
use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("awful_feed_news starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // Early check: ensure JSON output dir is writable
    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "JSON output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    // ---- Sources ----
    let sources = match &args.sources {
        Some(path) => load_sources(path)?,
        None => default_sources(),
    };
    info!(count = sources.len(), "Using feed sources");

    // ---- Ingest ----
    let client = build_client(args.request_timeout_secs.map(Duration::from_secs))?;
    let ingester = Ingester::with_http(client);
    let articles = match args.max_concurrent_sources {
        Some(limit) => ingester.ingest_all_bounded(&sources, limit).await,
        None => ingester.ingest_all(&sources).await,
    };
    info!(count = articles.len(), "Total articles ingested");

    // ---- Output ----
    let now = Local::now();
    let edition = Edition {
        local_date: now.date_naive().to_string(),
        time_of_day: time_of_day(now.time()).to_string(),
        local_time: now.time().to_string(),
        articles,
    };

    match &args.json_output_dir {
        Some(dir) => {
            let path = json::write_edition(&edition, dir).await?;
            info!(path = %path.display(), "Wrote edition");
        }
        None => println!("{}", json::to_pretty_json(&edition)?),
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
