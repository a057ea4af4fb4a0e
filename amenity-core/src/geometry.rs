//! Pair extracted rows with WGS84 point geometries.

use std::fmt;

use geo::Point;

use crate::record::{PointRecord, PointRecordSet};

/// Coordinate reference system identified by its EPSG code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crs {
    epsg: u32,
}

impl Crs {
    /// WGS84 longitude/latitude in degrees.
    pub const WGS84: Self = Self { epsg: 4326 };

    /// EPSG code of this CRS.
    #[must_use]
    pub const fn epsg(self) -> u32 {
        self.epsg
    }

    /// OGC URN form, e.g. `urn:ogc:def:crs:EPSG::4326`.
    #[must_use]
    pub fn urn(self) -> String {
        format!("urn:ogc:def:crs:EPSG::{}", self.epsg)
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.epsg)
    }
}

/// Rows paired one-to-one with point geometries.
///
/// Only [`materialize`] builds this type, and nothing reorders one half
/// without the other: `geometry()[i]` is always the location of
/// `records().as_slice()[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPointRecordSet {
    records: PointRecordSet,
    geometry: Vec<Point<f64>>,
    crs: Crs,
}

impl GeoPointRecordSet {
    /// The tabular half.
    #[must_use]
    pub const fn records(&self) -> &PointRecordSet {
        &self.records
    }

    /// The geometric half, aligned with [`Self::records`].
    #[must_use]
    pub const fn geometry(&self) -> &[Point<f64>] {
        self.geometry.as_slice()
    }

    /// The CRS tag, always [`Crs::WGS84`].
    #[must_use]
    pub const fn crs(&self) -> Crs {
        self.crs
    }

    /// Number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over `(row, point)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&PointRecord, &Point<f64>)> + '_ {
        self.records.iter().zip(self.geometry.iter())
    }

    /// Split into the row set and its geometries.
    #[must_use]
    pub fn into_parts(self) -> (PointRecordSet, Vec<Point<f64>>, Crs) {
        (self.records, self.geometry, self.crs)
    }
}

/// Attach a point at `(lon, lat)` to every row.
///
/// No reprojection or validation happens; non-finite coordinates pass
/// through unchanged.
///
/// # Examples
/// ```
/// use amenity_core::{Crs, PointRecord, PointRecordSet, materialize};
/// use geo::Point;
///
/// let records = PointRecordSet::from(vec![PointRecord::new("A", "school", 12.9, 77.6)]);
/// let geo = materialize(records);
/// assert_eq!(geo.crs(), Crs::WGS84);
/// assert_eq!(geo.geometry(), [Point::new(77.6, 12.9)]);
/// ```
#[must_use]
pub fn materialize(records: PointRecordSet) -> GeoPointRecordSet {
    let geometry = records.iter().map(PointRecord::location).collect();
    GeoPointRecordSet {
        records,
        geometry,
        crs: Crs::WGS84,
    }
}
