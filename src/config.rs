//! Source registry loading and validation.
//!
//! Sources are read from a YAML file shaped like:
//!
//! ```yaml
//! sources:
//!   - name: BBC News
//!     url: https://feeds.bbci.co.uk/news/rss.xml
//! ```
//!
//! Invalid configuration is the only failure the pipeline reports as an
//! error; everything past this point degrades instead.

use crate::models::Source;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument};
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read sources file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse sources file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("source #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("source {name:?} has an invalid feed URL {url:?}")]
    InvalidUrl { name: String, url: String },
}

/// On-disk layout of a sources file.
#[derive(Debug, Deserialize)]
pub struct SourcesFile {
    pub sources: Vec<Source>,
}

/// Read and validate the sources listed in a YAML file.
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_sources(path: impl AsRef<Path>) -> Result<Vec<Source>, ConfigError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: SourcesFile = serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate_sources(&file.sources)?;
    info!(count = file.sources.len(), "Loaded sources");
    Ok(file.sources)
}

/// Every source needs a name and an absolute http(s) feed URL.
pub fn validate_sources(sources: &[Source]) -> Result<(), ConfigError> {
    for (index, source) in sources.iter().enumerate() {
        if source.name.trim().is_empty() {
            return Err(ConfigError::EmptyName { index });
        }
        let valid = Url::parse(&source.url)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !valid {
            return Err(ConfigError::InvalidUrl {
                name: source.name.clone(),
                url: source.url.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_sources() {
        let file = write_yaml(
            "sources:\n  - name: NPR\n    url: https://feeds.npr.org/1001/rss.xml\n  - name: BBC\n    url: http://feeds.bbci.co.uk/news/rss.xml\n",
        );
        let sources = load_sources(file.path()).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].name, "NPR");
        assert_eq!(sources[1].url, "http://feeds.bbci.co.uk/news/rss.xml");
    }

    #[test]
    fn test_load_sources_missing_file() {
        let err = load_sources("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_sources_bad_yaml() {
        let file = write_yaml("sources: [name: oops");
        assert!(matches!(load_sources(file.path()), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_entries() {
        let empty_name = vec![Source::new("  ", "https://example.com/rss")];
        assert!(matches!(
            validate_sources(&empty_name),
            Err(ConfigError::EmptyName { index: 0 })
        ));

        let relative = vec![Source::new("Relative", "/rss.xml")];
        assert!(matches!(validate_sources(&relative), Err(ConfigError::InvalidUrl { .. })));

        let ftp = vec![Source::new("Ftp", "ftp://example.com/rss.xml")];
        assert!(matches!(validate_sources(&ftp), Err(ConfigError::InvalidUrl { .. })));

        assert!(validate_sources(&[]).is_ok());
    }
}
