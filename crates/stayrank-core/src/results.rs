//! Result file persistence.
//!
//! The ranked list is written as a pretty-printed JSON array. Writes go to a
//! sibling temporary file that is renamed over the destination, so a failed
//! run never leaves a truncated result file behind.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::listing::ScoredListing;

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("failed to serialize results: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write results to {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse results file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Write the ranked listings to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ResultsError::Io`] if the directory, temporary file, or rename
/// fails, and [`ResultsError::Serialize`] if encoding fails.
pub fn write_results(path: &Path, listings: &[ScoredListing]) -> Result<(), ResultsError> {
    let io_err = |source: std::io::Error| ResultsError::Io {
        path: path.display().to_string(),
        source,
    };

    let mut body = serde_json::to_string_pretty(listings).map_err(ResultsError::Serialize)?;
    body.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let staging = staging_path(path);
    if let Err(e) = std::fs::write(&staging, body).and_then(|()| std::fs::rename(&staging, path)) {
        let _ = std::fs::remove_file(&staging);
        return Err(io_err(e));
    }

    tracing::debug!(path = %path.display(), count = listings.len(), "results file written");
    Ok(())
}

/// Read a result file previously produced by [`write_results`].
///
/// # Errors
///
/// Returns [`ResultsError::Io`] if the file cannot be read and
/// [`ResultsError::Parse`] if it is not a ranked listing array.
pub fn read_results(path: &Path) -> Result<Vec<ScoredListing>, ResultsError> {
    let content = std::fs::read_to_string(path).map_err(|e| ResultsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ResultsError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
