//! Loading and export for Amenity Atlas.
//!
//! Responsibilities:
//! - Parse export text into a [`RawDocument`](amenity_core::RawDocument)
//!   ([`load`]).
//! - Obtain that text from readers and files ([`load_reader`], [`load_path`]).
//! - Run the full load → extract → materialise pipeline ([`ingest_str`],
//!   [`ingest_path`]).
//! - Serialise materialised sets as GeoJSON ([`geojson`]).
//!
//! Boundaries:
//! - Extraction rules live in `amenity-core`; nothing here inspects elements.
//! - No network access: fetching exports is the caller's business.
#![forbid(unsafe_code)]

use amenity_core::{
    ExtractOptions, ExtractSummary, GeoPointRecordSet, RawDocument, extract_report, materialize,
};
use camino::Utf8Path;

pub mod geojson;
mod loader;
mod source;

pub use geojson::{ExportError, export_geojson, to_feature_collection, write_geojson};
pub use loader::{LoadError, load};
pub use source::{SourceError, load_path, load_reader};

/// Outcome of a full pipeline run over one document.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestReport {
    /// Counters from extraction.
    pub summary: ExtractSummary,
    /// Extracted rows paired with their geometries.
    pub points: GeoPointRecordSet,
}

impl IngestReport {
    fn from_document(document: &RawDocument, options: &ExtractOptions) -> Self {
        let report = extract_report(Some(document), options);
        Self {
            summary: report.summary,
            points: materialize(report.records),
        }
    }
}

/// Load, extract and materialise a document held in memory.
///
/// # Errors
/// Returns [`LoadError`] when the text is not JSON. A document without
/// usable elements is not an error: the report is simply empty.
///
/// # Examples
/// ```
/// use amenity_core::ExtractOptions;
/// use amenity_data::ingest_str;
///
/// let report = ingest_str(r#"{"elements": []}"#, &ExtractOptions::default())?;
/// assert!(report.points.is_empty());
/// assert!(report.summary.elements_present);
/// # Ok::<(), amenity_data::LoadError>(())
/// ```
pub fn ingest_str(text: &str, options: &ExtractOptions) -> Result<IngestReport, LoadError> {
    let document = load(text)?;
    Ok(IngestReport::from_document(&document, options))
}

/// Load, extract and materialise the export stored at `path`.
///
/// # Errors
/// Returns [`SourceError`] when the file cannot be read or is not JSON.
///
/// # Examples
/// ```no_run
/// use amenity_core::ExtractOptions;
/// use amenity_data::ingest_path;
/// use camino::Utf8Path;
///
/// # fn main() -> Result<(), amenity_data::SourceError> {
/// let report = ingest_path(Utf8Path::new("export.json"), &ExtractOptions::default())?;
/// println!("Loaded {} points", report.points.len());
/// # Ok(())
/// # }
/// ```
pub fn ingest_path(path: &Utf8Path, options: &ExtractOptions) -> Result<IngestReport, SourceError> {
    let document = load_path(path)?;
    Ok(IngestReport::from_document(&document, options))
}
