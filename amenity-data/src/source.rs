//! Input providers feeding the loader from readers and files.
//!
//! I/O failures stay distinct from [`LoadError`] so callers can tell "could
//! not read the export" from "the export is not JSON".

use std::io::{self, Read};

use amenity_core::RawDocument;
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use thiserror::Error;

use crate::loader::{LoadError, load};

/// Errors raised while obtaining and parsing export text.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The export file could not be opened.
    #[error("failed to open export at {path}: {source}")]
    Open {
        /// Requested path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Reading the export text failed (including invalid UTF-8).
    #[error("failed to read export: {source}")]
    Read {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The text was read but is not valid JSON.
    #[error(transparent)]
    Malformed(#[from] LoadError),
}

impl SourceError {
    /// Whether the failure came from the document itself rather than I/O.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

/// Read an export from any reader and parse it.
///
/// # Errors
/// Returns [`SourceError::Read`] when reading fails and
/// [`SourceError::Malformed`] when the text is not JSON.
pub fn load_reader<R: Read>(mut reader: R) -> Result<RawDocument, SourceError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| SourceError::Read { source })?;
    debug!("read {} bytes of export text", text.len());
    Ok(load(&text)?)
}

/// Open the export at `path` and parse it.
///
/// # Errors
/// Returns [`SourceError::Open`] when the file cannot be opened, otherwise
/// the errors of [`load_reader`].
pub fn load_path(path: &Utf8Path) -> Result<RawDocument, SourceError> {
    let file = amenity_fs::open_utf8_file(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loading export from {path}");
    load_reader(file)
}
