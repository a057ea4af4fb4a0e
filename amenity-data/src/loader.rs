//! Parse export text into a [`RawDocument`].

use amenity_core::RawDocument;
use serde_json::Value;
use thiserror::Error;

/// Errors returned by [`load`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The text is not a syntactically valid JSON document.
    #[error("malformed JSON document: {source}")]
    MalformedDocument {
        /// Parser diagnostic carrying the failing line and column.
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// One-based line where parsing stopped.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedDocument { source } => source.line(),
        }
    }

    /// One-based column where parsing stopped.
    #[must_use]
    pub fn column(&self) -> usize {
        match self {
            Self::MalformedDocument { source } => source.column(),
        }
    }
}

/// Parse a text blob holding one JSON document.
///
/// No semantic validation happens here; any well-formed JSON value is
/// returned unchanged.
///
/// # Errors
/// Returns [`LoadError::MalformedDocument`] for empty text, syntax errors and
/// trailing characters after the document.
///
/// # Examples
/// ```
/// use amenity_data::{LoadError, load};
///
/// let doc = load(r#"{"elements": []}"#)?;
/// assert_eq!(doc.elements().map(<[_]>::len), Some(0));
///
/// let err = load("not valid json{").unwrap_err();
/// assert!(matches!(err, LoadError::MalformedDocument { .. }));
/// # Ok::<(), LoadError>(())
/// ```
pub fn load(text: &str) -> Result<RawDocument, LoadError> {
    serde_json::from_str::<Value>(text)
        .map(RawDocument::from)
        .map_err(|source| LoadError::MalformedDocument { source })
}
