//! GeoJSON export of materialised point sets.
//!
//! Output is a `FeatureCollection` carrying a named CRS member, one `Point`
//! feature per row with `name` and `amenity` properties. Non-finite
//! coordinates serialise as `null`; consumers must handle that themselves.

use std::io::{self, BufWriter, Write};

use amenity_core::GeoPointRecordSet;
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use thiserror::Error;

/// Errors raised while writing GeoJSON.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output file could not be created.
    #[error("failed to create GeoJSON output at {path}: {source}")]
    Create {
        /// Requested output path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Encoding the collection failed.
    #[error("failed to encode GeoJSON: {source}")]
    Encode {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Writing encoded bytes failed.
    #[error("failed to write GeoJSON: {source}")]
    Write {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Build a GeoJSON `FeatureCollection` for the set.
///
/// # Examples
/// ```
/// use amenity_core::{PointRecord, PointRecordSet, materialize};
/// use amenity_data::geojson::to_feature_collection;
///
/// let set = materialize(PointRecordSet::from(vec![PointRecord::new("A", "school", 12.9, 77.6)]));
/// let collection = to_feature_collection(&set);
/// assert_eq!(collection["features"][0]["geometry"]["coordinates"][0], 77.6);
/// ```
#[must_use]
pub fn to_feature_collection(set: &GeoPointRecordSet) -> Value {
    let features: Vec<Value> = set
        .iter()
        .map(|(record, point)| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [point.x(), point.y()],
                },
                "properties": {
                    "name": record.name,
                    "amenity": record.amenity,
                },
            })
        })
        .collect();
    json!({
        "type": "FeatureCollection",
        "crs": {
            "type": "name",
            "properties": { "name": set.crs().urn() },
        },
        "features": features,
    })
}

/// Write the set as pretty-printed GeoJSON followed by a newline.
///
/// # Errors
/// Returns [`ExportError::Write`] when the writer fails and
/// [`ExportError::Encode`] for encoding failures.
pub fn write_geojson<W: Write>(mut writer: W, set: &GeoPointRecordSet) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, &to_feature_collection(set)).map_err(|source| {
        if source.is_io() {
            ExportError::Write {
                source: io::Error::from(source),
            }
        } else {
            ExportError::Encode { source }
        }
    })?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|source| ExportError::Write { source })
}

/// Write the set to `path`, creating parent directories as needed.
///
/// # Errors
/// Returns [`ExportError::Create`] when the file cannot be created, otherwise
/// the errors of [`write_geojson`].
pub fn export_geojson(path: &Utf8Path, set: &GeoPointRecordSet) -> Result<(), ExportError> {
    let file = amenity_fs::create_file(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_geojson(BufWriter::new(file), set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use amenity_core::{PointRecord, PointRecordSet, materialize};
    use rstest::{fixture, rstest};

    #[fixture]
    fn pair() -> GeoPointRecordSet {
        materialize(PointRecordSet::from(vec![
            PointRecord::new("Greenwood School", "school", 12.9, 77.6),
            PointRecord::new("City \"General\" Hospital", "hospital", -1.0, 2.0),
        ]))
    }

    #[rstest]
    fn collection_carries_crs_and_features(pair: GeoPointRecordSet) {
        let value = to_feature_collection(&pair);
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["crs"]["properties"]["name"], "urn:ogc:def:crs:EPSG::4326");
        let features = value["features"].as_array().cloned().unwrap_or_default();
        assert_eq!(features.len(), 2);
        assert_eq!(features[1]["properties"]["name"], "City \"General\" Hospital");
        assert_eq!(features[1]["geometry"]["coordinates"], json!([2.0, -1.0]));
    }

    #[rstest]
    fn empty_set_still_has_feature_array() {
        let value = to_feature_collection(&materialize(PointRecordSet::new()));
        assert_eq!(value["features"], json!([]));
    }

    #[rstest]
    fn written_output_parses_back(pair: GeoPointRecordSet) {
        let mut buffer = Vec::new();
        write_geojson(&mut buffer, &pair).unwrap_or_else(|err| panic!("write: {err}"));
        assert_eq!(buffer.last(), Some(&b'\n'));
        let parsed: Value =
            serde_json::from_slice(&buffer).unwrap_or_else(|err| panic!("parse: {err}"));
        assert_eq!(parsed, to_feature_collection(&pair));
    }

    #[rstest]
    fn export_creates_missing_directories(pair: GeoPointRecordSet) {
        let dir = tempfile::TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .unwrap_or_else(|path| panic!("non UTF-8 temp dir {path:?}"));
        let target = root.join("nested/out/points.geojson");
        export_geojson(&target, &pair).unwrap_or_else(|err| panic!("export: {err}"));
        let text = amenity_fs::read_to_string(&target).unwrap_or_else(|err| panic!("read: {err}"));
        let parsed: Value = serde_json::from_str(&text).unwrap_or_else(|err| panic!("parse: {err}"));
        assert_eq!(parsed, to_feature_collection(&pair));
    }

    #[rstest]
    fn nan_coordinates_become_null() {
        let set = materialize(PointRecordSet::from(vec![PointRecord::new(
            "Nowhere",
            "x",
            f64::NAN,
            1.0,
        )]));
        let value = to_feature_collection(&set);
        assert_eq!(
            value["features"][0]["geometry"]["coordinates"],
            json!([1.0, null])
        );
    }
}
