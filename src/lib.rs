//! Facade crate for Amenity Atlas.
//!
//! This crate re-exports the core extraction types and, behind the `data`
//! feature, the loaders and GeoJSON export.

#![forbid(unsafe_code)]

pub use amenity_core::{
    Crs, DEFAULT_AMENITY, DEFAULT_NAME, ExtractOptions, ExtractReport, ExtractSummary,
    GeoPointRecordSet, PointRecord, PointRecordSet, RawDocument, extract, extract_report,
    materialize,
};

#[cfg(feature = "data")]
pub use amenity_data::{
    ExportError, IngestReport, LoadError, SourceError, export_geojson, ingest_path, ingest_str,
    load, load_path, load_reader, to_feature_collection, write_geojson,
};

#[cfg(all(test, feature = "data"))]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn facade_runs_the_pipeline() {
        let report = ingest_str(
            r#"{"elements":[{"tags":{"name":"Greenwood School","amenity":"School"},"lat":12.9,"lon":77.6}]}"#,
            &ExtractOptions::default().with_case_fold(true),
        )
        .expect("valid export");
        assert_eq!(report.points.crs(), Crs::WGS84);
        let amenities: Vec<_> = report
            .points
            .records()
            .iter()
            .map(|record| record.amenity.as_str())
            .collect();
        assert_eq!(amenities, ["school"]);
    }
}
