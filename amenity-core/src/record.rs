use geo::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name used when an element carries no `name` tag.
pub const DEFAULT_NAME: &str = "Unnamed";
/// Amenity used when an element carries no `amenity` tag.
pub const DEFAULT_AMENITY: &str = "Unknown";

/// A flattened point of interest row.
///
/// Every field is resolved when the row is derived, so downstream consumers
/// never deal with missing values. Coordinates are copied verbatim from the
/// source and are not range checked.
///
/// # Examples
/// ```
/// use amenity_core::PointRecord;
///
/// let record = PointRecord::new("Greenwood School", "School", 12.9, 77.6);
/// assert_eq!(record.location().x(), 77.6);
/// assert_eq!(record.location().y(), 12.9);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointRecord {
    /// Display name, `"Unnamed"` when the source had none.
    pub name: String,
    /// Amenity classification, `"Unknown"` when the source had none.
    pub amenity: String,
    /// WGS84 latitude.
    pub lat: f64,
    /// WGS84 longitude.
    pub lon: f64,
}

impl PointRecord {
    /// Construct a record from resolved fields.
    #[must_use]
    pub fn new(name: impl Into<String>, amenity: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            amenity: amenity.into(),
            lat,
            lon,
        }
    }

    /// Point geometry with `x = longitude` and `y = latitude`.
    #[must_use]
    pub fn location(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

/// Ordered collection of [`PointRecord`] rows.
///
/// Insertion order mirrors the order of elements in the source document.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PointRecordSet {
    records: Vec<PointRecord>,
}

impl PointRecordSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, keeping insertion order.
    pub fn push(&mut self, record: PointRecord) {
        self.records.push(record);
    }

    /// Number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set holds no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, PointRecord> {
        self.records.iter()
    }

    /// Borrow the rows as a slice.
    #[must_use]
    pub const fn as_slice(&self) -> &[PointRecord] {
        self.records.as_slice()
    }

    /// Consume the set, returning the rows.
    #[must_use]
    pub fn into_vec(self) -> Vec<PointRecord> {
        self.records
    }
}

impl From<Vec<PointRecord>> for PointRecordSet {
    fn from(records: Vec<PointRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<PointRecord> for PointRecordSet {
    fn from_iter<I: IntoIterator<Item = PointRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PointRecordSet {
    type Item = PointRecord;
    type IntoIter = std::vec::IntoIter<PointRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointRecordSet {
    type Item = &'a PointRecord;
    type IntoIter = std::slice::Iter<'a, PointRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
