//! Extract command implementation for the Amenity CLI.

use std::io::{BufWriter, Write};

use amenity_core::{ExtractOptions, GeoPointRecordSet};
use amenity_data::{IngestReport, ingest_path, write_geojson};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::render::{write_json, write_table};
use crate::{
    ARG_AMENITY, ARG_CASE_FOLD, ARG_FORMAT, ARG_INPUT, ARG_OUTPUT, CliError, ENV_EXTRACT_INPUT,
    require_existing,
};

/// Report layouts understood by `extract`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Aligned plain-text table with a `POINT (lon lat)` column.
    #[default]
    Table,
    /// Pretty-printed JSON array of rows.
    Json,
    /// GeoJSON `FeatureCollection` tagged with its CRS.
    Geojson,
}

/// CLI arguments for the `extract` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load an Overpass JSON export, derive one row per element \
                 carrying tags and coordinates, and write the rows with their \
                 WGS84 point geometry. Options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Extract amenity points from an Overpass export"
)]
#[ortho_config(prefix = "AMENITY")]
pub(crate) struct ExtractArgs {
    /// Path to the Overpass JSON export.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Lower-case amenity values before filtering.
    #[arg(
        long = ARG_CASE_FOLD,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) case_fold: Option<bool>,
    /// Keep only rows with this amenity (repeatable).
    #[arg(long = ARG_AMENITY, value_name = "tag")]
    #[serde(default)]
    pub(crate) amenity: Option<Vec<String>>,
    /// Report layout.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Write the report to this file instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ExtractArgs {
    pub(crate) fn into_config(self) -> Result<ExtractConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ExtractConfig::try_from(merged)
    }
}

/// Resolved `extract` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExtractConfig {
    /// Export to read.
    pub(crate) input: Utf8PathBuf,
    /// Extraction knobs built from the case-fold and amenity options.
    pub(crate) options: ExtractOptions,
    pub(crate) format: OutputFormat,
    /// Destination file, standard output when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TryFrom<ExtractArgs> for ExtractConfig {
    type Error = CliError;

    fn try_from(args: ExtractArgs) -> Result<Self, Self::Error> {
        let input = args.input.ok_or(CliError::MissingArgument {
            field: ARG_INPUT,
            env: ENV_EXTRACT_INPUT,
        })?;
        let mut options = ExtractOptions::default().with_case_fold(args.case_fold.unwrap_or(false));
        if let Some(amenities) = args.amenity.filter(|list| !list.is_empty()) {
            options = options.with_amenity_filter(amenities);
        }
        Ok(Self {
            input,
            options,
            format: args.format.unwrap_or_default(),
            output: args.output,
        })
    }
}

pub(crate) fn run_extract_with(args: ExtractArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = load_points(&config.input, &config.options)?;
    match config.output.as_deref() {
        Some(path) => {
            let file = amenity_fs::create_file(path).map_err(|source| CliError::CreateOutput {
                path: path.to_path_buf(),
                source,
            })?;
            let mut sink = BufWriter::new(file);
            write_report(&mut sink, config.format, &report.points)?;
            sink.flush().map_err(CliError::WriteReport)?;
            info!("wrote {} rows to {path}", report.points.len());
            Ok(())
        }
        None => write_report(writer, config.format, &report.points),
    }
}

/// Validate the input path, then load, extract and materialise it.
pub(crate) fn load_points(
    input: &Utf8Path,
    options: &ExtractOptions,
) -> Result<IngestReport, CliError> {
    require_existing(input, ARG_INPUT)?;
    let report = ingest_path(input, options).map_err(|source| CliError::LoadDocument {
        path: input.to_path_buf(),
        source,
    })?;
    info!(
        "extracted {} of {} elements from {input} ({} skipped, {} filtered)",
        report.summary.extracted,
        report.summary.elements,
        report.summary.skipped,
        report.summary.filtered,
    );
    Ok(report)
}

fn write_report(
    writer: &mut dyn Write,
    format: OutputFormat,
    points: &GeoPointRecordSet,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => write_table(writer, points).map_err(CliError::WriteReport),
        OutputFormat::Json => write_json(writer, points.records()),
        OutputFormat::Geojson => write_geojson(writer, points).map_err(CliError::from),
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ExtractConfig, CliError> {
    let merged = ExtractArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ExtractConfig::try_from(merged)
}
