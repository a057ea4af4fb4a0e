//! Flatten Overpass elements into [`PointRecord`] rows.
//!
//! An element qualifies when it carries a `tags` mapping together with numeric
//! `lat` and `lon` values. Everything else is skipped and counted. Missing
//! `name` and `amenity` tags resolve to fixed defaults here, once, so the rest
//! of the pipeline only sees complete rows.

use std::collections::BTreeSet;
use std::fmt;

use log::{debug, warn};
use serde_json::{Map, Value};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::document::RawDocument;
use crate::record::{DEFAULT_AMENITY, DEFAULT_NAME, PointRecord, PointRecordSet};

const TAGS_KEY: &str = "tags";
const NAME_TAG: &str = "name";
const AMENITY_TAG: &str = "amenity";
const LAT_KEY: &str = "lat";
const LON_KEY: &str = "lon";

/// Knobs controlling how rows are derived and which rows are kept.
///
/// # Examples
/// ```
/// use amenity_core::ExtractOptions;
///
/// let options = ExtractOptions::default()
///     .with_case_fold(true)
///     .with_amenity_filter(["school", "hospital"]);
/// assert!(options.amenity_case_fold);
/// assert!(options.admits("school"));
/// assert!(!options.admits("cafe"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtractOptions {
    /// Lower-case the derived amenity before filtering.
    pub amenity_case_fold: bool,
    /// Keep only rows whose derived amenity is a member. `None` keeps all rows.
    pub amenity_filter: Option<BTreeSet<String>>,
}

impl ExtractOptions {
    /// Enable or disable amenity case folding.
    #[must_use]
    pub const fn with_case_fold(mut self, enabled: bool) -> Self {
        self.amenity_case_fold = enabled;
        self
    }

    /// Restrict output to the given amenity values.
    #[must_use]
    pub fn with_amenity_filter<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenity_filter = Some(amenities.into_iter().map(Into::into).collect());
        self
    }

    /// Whether a derived amenity passes the configured filter.
    #[must_use]
    pub fn admits(&self, amenity: &str) -> bool {
        self.amenity_filter
            .as_ref()
            .is_none_or(|allowed| allowed.contains(amenity))
    }

    fn normalise_amenity(&self, amenity: &str) -> String {
        if self.amenity_case_fold {
            amenity.to_lowercase()
        } else {
            amenity.to_owned()
        }
    }
}

/// Counters describing one extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractSummary {
    /// Whether the document carried an `elements` sequence at all.
    pub elements_present: bool,
    /// Number of elements inspected.
    pub elements: usize,
    /// Rows emitted.
    pub extracted: usize,
    /// Elements that failed the qualification test.
    pub skipped: usize,
    /// Qualifying rows dropped by the amenity filter.
    pub filtered: usize,
}

impl ExtractSummary {
    /// True when processing succeeded but produced no rows.
    #[must_use]
    pub const fn is_empty_result(&self) -> bool {
        self.extracted == 0
    }
}

/// Rows produced by [`extract_report`] together with its counters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractReport {
    /// Element counts for the run.
    pub summary: ExtractSummary,
    /// Extracted rows in source order.
    pub records: PointRecordSet,
}

/// Extract rows from a parsed document.
///
/// An absent document, or one without an `elements` array, yields an empty
/// set rather than an error.
///
/// # Examples
/// ```
/// use amenity_core::{ExtractOptions, RawDocument, extract};
/// use serde_json::json;
///
/// let doc = RawDocument::from(json!({
///     "elements": [
///         {"tags": {"name": "Greenwood School", "amenity": "School"}, "lat": 12.9, "lon": 77.6}
///     ]
/// }));
/// let records = extract(Some(&doc), &ExtractOptions::default());
/// assert_eq!(records.len(), 1);
/// assert_eq!(records.as_slice()[0].amenity, "School");
/// ```
#[must_use]
pub fn extract(document: Option<&RawDocument>, options: &ExtractOptions) -> PointRecordSet {
    extract_report(document, options).records
}

/// Extract rows and report how many elements were skipped or filtered.
///
/// # Examples
/// ```
/// use amenity_core::{ExtractOptions, RawDocument, extract_report};
/// use serde_json::json;
///
/// let doc = RawDocument::from(json!({"elements": [{"lat": 1.0, "lon": 2.0}]}));
/// let report = extract_report(Some(&doc), &ExtractOptions::default());
/// assert!(report.summary.elements_present);
/// assert_eq!(report.summary.skipped, 1);
/// assert!(report.summary.is_empty_result());
/// ```
#[must_use]
pub fn extract_report(document: Option<&RawDocument>, options: &ExtractOptions) -> ExtractReport {
    let Some(doc) = document else {
        warn!("no document supplied; nothing to extract");
        return ExtractReport::default();
    };
    let Some(elements) = doc.elements() else {
        warn!("document has no `elements` sequence; nothing to extract");
        return ExtractReport::default();
    };

    let mut summary = ExtractSummary {
        elements_present: true,
        ..ExtractSummary::default()
    };
    let mut records = PointRecordSet::new();

    for (index, element) in elements.iter().enumerate() {
        summary.elements += 1;
        match derive_record(element, options) {
            Ok(record) if options.admits(&record.amenity) => {
                summary.extracted += 1;
                records.push(record);
            }
            Ok(record) => {
                summary.filtered += 1;
                debug!(
                    "element {index} filtered out by amenity {:?}",
                    record.amenity
                );
            }
            Err(reason) => {
                summary.skipped += 1;
                debug!("skipping element {index}: {reason}");
            }
        }
    }

    debug!(
        "extracted {} of {} elements ({} skipped, {} filtered)",
        summary.extracted, summary.elements, summary.skipped, summary.filtered
    );
    ExtractReport { summary, records }
}

/// Why an element did not qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipReason {
    NotAnObject,
    MissingTags,
    MissingCoordinate(&'static str),
    NonNumericCoordinate(&'static str),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => f.write_str("element is not an object"),
            Self::MissingTags => f.write_str("element has no `tags` mapping"),
            Self::MissingCoordinate(key) => write!(f, "element has no `{key}`"),
            Self::NonNumericCoordinate(key) => write!(f, "element `{key}` is not a number"),
        }
    }
}

fn derive_record(element: &Value, options: &ExtractOptions) -> Result<PointRecord, SkipReason> {
    let fields = element.as_object().ok_or(SkipReason::NotAnObject)?;
    let tags = fields
        .get(TAGS_KEY)
        .and_then(Value::as_object)
        .ok_or(SkipReason::MissingTags)?;
    let lat = coordinate(fields, LAT_KEY)?;
    let lon = coordinate(fields, LON_KEY)?;

    let name = tag_or(tags, NAME_TAG, DEFAULT_NAME);
    let amenity = options.normalise_amenity(tag_or(tags, AMENITY_TAG, DEFAULT_AMENITY));
    Ok(PointRecord::new(name, amenity, lat, lon))
}

fn coordinate(fields: &Map<String, Value>, key: &'static str) -> Result<f64, SkipReason> {
    fields
        .get(key)
        .ok_or(SkipReason::MissingCoordinate(key))?
        .as_f64()
        .ok_or(SkipReason::NonNumericCoordinate(key))
}

// Non-string tag values are treated like a missing tag.
fn tag_or<'a>(tags: &'a Map<String, Value>, key: &str, default: &'a str) -> &'a str {
    tags.get(key).and_then(Value::as_str).unwrap_or(default)
}
