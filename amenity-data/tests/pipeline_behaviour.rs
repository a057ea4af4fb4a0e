//! Behavioural coverage for the file-to-geometry pipeline.

use std::cell::RefCell;
use std::fs;

use amenity_core::ExtractOptions;
use amenity_data::{IngestReport, SourceError, ingest_path};
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

/// Scenario state shared between steps.
struct PipelineWorld {
    dir: TempDir,
    path: RefCell<Option<Utf8PathBuf>>,
    outcome: RefCell<Option<Result<IngestReport, SourceError>>>,
}

impl PipelineWorld {
    fn write_export(&self, contents: &str) {
        let path = Utf8PathBuf::from_path_buf(self.dir.path().join("export.json"))
            .unwrap_or_else(|path| panic!("temp path {} is not UTF-8", path.display()));
        fs::write(&path, contents).unwrap_or_else(|err| panic!("write export: {err}"));
        self.path.replace(Some(path));
    }

    fn ingest(&self, options: &ExtractOptions) {
        let path = self
            .path
            .borrow()
            .clone()
            .unwrap_or_else(|| panic!("export file must be prepared"));
        self.outcome.replace(Some(ingest_path(&path, options)));
    }

    fn report(&self) -> IngestReport {
        match self.outcome.borrow().as_ref() {
            Some(Ok(report)) => report.clone(),
            Some(Err(err)) => panic!("ingestion failed: {err}"),
            None => panic!("ingestion must have run"),
        }
    }
}

#[fixture]
fn world() -> PipelineWorld {
    PipelineWorld {
        dir: TempDir::new().unwrap_or_else(|err| panic!("create temp dir: {err}")),
        path: RefCell::new(None),
        outcome: RefCell::new(None),
    }
}

#[given("an export file containing one school called Greenwood School")]
fn greenwood_export(world: &PipelineWorld) {
    world.write_export(
        r#"{"elements":[{"tags":{"name":"Greenwood School","amenity":"school"},"lat":12.9,"lon":77.6}]}"#,
    );
}

#[given("an export file containing one school tagged in upper case")]
fn upper_case_export(world: &PipelineWorld) {
    world.write_export(r#"{"elements":[{"tags":{"amenity":"SCHOOL"},"lat":1.0,"lon":2.0}]}"#);
}

#[given("an export file with an empty element list")]
fn empty_export(world: &PipelineWorld) {
    world.write_export(r#"{"elements":[]}"#);
}

#[given("an export file containing invalid JSON")]
fn invalid_export(world: &PipelineWorld) {
    world.write_export("not valid json{");
}

#[given("an export file whose object has no elements key")]
fn keyless_export(world: &PipelineWorld) {
    world.write_export(r#"{"version":0.6,"generator":"Overpass API"}"#);
}

#[when("I ingest the file with default options")]
fn ingest_default(world: &PipelineWorld) {
    world.ingest(&ExtractOptions::default());
}

#[when("I ingest the file with case folding")]
fn ingest_folded(world: &PipelineWorld) {
    world.ingest(&ExtractOptions::default().with_case_fold(true));
}

#[then("one point named \"Greenwood School\" is produced at longitude 77.6 and latitude 12.9")]
fn greenwood_point(world: &PipelineWorld) {
    let report = world.report();
    assert_eq!(report.points.len(), 1);
    let Some((record, point)) = report.points.iter().next() else {
        panic!("expected one point");
    };
    assert_eq!(record.name, "Greenwood School");
    assert_eq!(record.amenity, "school");
    assert_eq!((point.x(), point.y()), (77.6, 12.9));
}

#[then("the point's amenity is \"school\"")]
fn folded_amenity(world: &PipelineWorld) {
    let report = world.report();
    let amenities: Vec<_> = report
        .points
        .records()
        .iter()
        .map(|record| record.amenity.as_str())
        .collect();
    assert_eq!(amenities, ["school"]);
}

#[then("the result is empty without an error")]
fn empty_result(world: &PipelineWorld) {
    let report = world.report();
    assert!(report.points.is_empty());
    assert!(report.summary.is_empty_result());
}

#[then("ingestion fails with a malformed document diagnostic")]
fn malformed_failure(world: &PipelineWorld) {
    let outcome = world.outcome.borrow();
    let Some(Err(err)) = outcome.as_ref() else {
        panic!("expected ingestion to fail");
    };
    assert!(err.is_malformed(), "unexpected error: {err}");
    assert!(!err.to_string().is_empty());
}

#[scenario(path = "tests/features/pipeline.feature", index = 0)]
fn named_school(world: PipelineWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/pipeline.feature", index = 1)]
fn folding_case(world: PipelineWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/pipeline.feature", index = 2)]
fn empty_element_list(world: PipelineWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/pipeline.feature", index = 3)]
fn malformed_text(world: PipelineWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/pipeline.feature", index = 4)]
fn missing_elements(world: PipelineWorld) {
    let _ = world;
}
