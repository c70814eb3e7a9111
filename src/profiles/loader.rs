//! Fail-closed loading of the profile document.
//!
//! Both entry points return a usable [`AppData`] no matter what: a document
//! that cannot be read or parsed (I/O error, malformed YAML, a value outside
//! the achievement/badge enumerations, a missing required field) is reported
//! through `tracing` and replaced wholesale by [`AppData::fallback`]. There
//! is no partial-data path and no error surface for callers.

use crate::profiles::types::AppData;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Demo dataset compiled into the binary.
const EMBEDDED_DOCUMENT: &str = include_str!("data/profiles.yaml");

#[derive(Debug, Error)]
enum LoadError {
    #[error("could not read profile document: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse profile document: {0}")]
    Parse(#[from] serde_yaml::Error),
}

fn parse(document: &str) -> Result<AppData, LoadError> {
    Ok(serde_yaml::from_str(document)?)
}

/// Loads the embedded demo dataset.
pub fn load() -> AppData {
    match parse(EMBEDDED_DOCUMENT) {
        Ok(data) => {
            tracing::debug!(profiles = data.profile_count(), "loaded embedded dataset");
            data
        }
        Err(err) => {
            tracing::warn!(%err, "embedded dataset unusable, falling back to empty data");
            AppData::fallback()
        }
    }
}

/// Loads a profile document from an external file.
pub fn load_from_path(path: &Path) -> AppData {
    let loaded = fs::read_to_string(path)
        .map_err(LoadError::from)
        .and_then(|text| parse(&text));

    match loaded {
        Ok(data) => {
            tracing::debug!(
                path = %path.display(),
                profiles = data.profile_count(),
                "loaded profile document"
            );
            data
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                %err,
                "profile document unusable, falling back to empty data"
            );
            AppData::fallback()
        }
    }
}
