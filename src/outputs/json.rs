//! JSON output for an ingestion run.
//!
//! # Output Structure
//!
//! Files are organized by date with edition names:
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── morning.json
//!     ├── afternoon.json
//!     └── evening.json
//! ```

use crate::models::Edition;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write an [`Edition`] to `{json_output_dir}/{date}/{time_of_day}.json`.
///
/// Returns the path written.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_edition(
    edition: &Edition,
    json_output_dir: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string(edition)?;

    let full_json_dir = PathBuf::from(json_output_dir).join(&edition.local_date);
    info!(full_json_dir = %full_json_dir.display(), "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(full_json_dir = %full_json_dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let output_json_filename = full_json_dir.join(format!("{}.json", edition.time_of_day));
    info!(path = %output_json_filename.display(), "Writing JSON");
    fs::write(&output_json_filename, json).await?;
    info!(
        path = %output_json_filename.display(),
        articles = edition.articles.len(),
        "Wrote JSON edition file"
    );

    Ok(output_json_filename)
}

/// Render an [`Edition`] as pretty JSON for stdout.
pub fn to_pretty_json(edition: &Edition) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(edition)
}
