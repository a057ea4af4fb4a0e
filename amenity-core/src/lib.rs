//! Core domain types for Amenity Atlas.
//!
//! Responsibilities:
//! - Model parsed Overpass exports ([`RawDocument`]) and the flattened rows
//!   derived from them ([`PointRecord`], [`PointRecordSet`]).
//! - Extract rows with a single configurable code path ([`extract`]).
//! - Pair rows with WGS84 point geometries ([`materialize`]).
//!
//! Boundaries:
//! - No I/O. Parsing text and reading files live in `amenity-data`.
//!
//! Invariants:
//! - Every row has a name, an amenity and both coordinates.
//! - Row order always follows element order in the source document.
//! - No global mutable state; every call is a function of its inputs.
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod document;
pub mod extract;
pub mod geometry;
mod record;

pub use document::RawDocument;
pub use extract::{ExtractOptions, ExtractReport, ExtractSummary, extract, extract_report};
pub use geometry::{Crs, GeoPointRecordSet, materialize};
pub use record::{DEFAULT_AMENITY, DEFAULT_NAME, PointRecord, PointRecordSet};
