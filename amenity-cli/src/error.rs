//! Error types emitted by the Amenity CLI.

use std::sync::Arc;

use amenity_data::{ExportError, SourceError};
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the Amenity CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The export could not be read or is not valid JSON.
    #[error("error loading document: {source}")]
    LoadDocument {
        path: Utf8PathBuf,
        #[source]
        source: SourceError,
    },
    /// Creating the requested output file failed.
    #[error("failed to create output file {path:?}: {source}")]
    CreateOutput {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Serialising extracted rows as JSON failed.
    #[error("failed to serialise rows: {0}")]
    SerialiseRows(#[source] serde_json::Error),
    /// Writing GeoJSON output failed.
    #[error(transparent)]
    ExportGeoJson(#[from] ExportError),
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    WriteReport(#[source] std::io::Error),
}
