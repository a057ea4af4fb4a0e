//! Names command: list distinct names per amenity.

use std::collections::HashSet;
use std::io::{self, Write};

use amenity_core::{ExtractOptions, PointRecordSet};
use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::extract::load_points;
use crate::render::NO_DATA;
use crate::{ARG_AMENITY, ARG_CASE_FOLD, ARG_INPUT, CliError, ENV_NAMES_INPUT};

/// Amenities reported when none are requested.
pub(crate) const DEFAULT_REPORTED_AMENITIES: [&str; 2] = ["school", "hospital"];

/// CLI arguments for the `names` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load an Overpass JSON export and print, for each requested \
                 amenity, the distinct names of matching points in the order \
                 they first appear. Reports schools then hospitals by default.",
    about = "List the names recorded for selected amenities"
)]
#[ortho_config(prefix = "AMENITY")]
pub(crate) struct NamesArgs {
    /// Path to the Overpass JSON export.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Lower-case amenity values before matching.
    #[arg(
        long = ARG_CASE_FOLD,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) case_fold: Option<bool>,
    /// Amenity to report (repeatable, in report order).
    #[arg(long = ARG_AMENITY, value_name = "tag")]
    #[serde(default)]
    pub(crate) amenity: Option<Vec<String>>,
}

impl NamesArgs {
    pub(crate) fn into_config(self) -> Result<NamesConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NamesConfig::try_from(merged)
    }
}

/// Resolved `names` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NamesConfig {
    pub(crate) input: Utf8PathBuf,
    pub(crate) case_fold: bool,
    /// Amenities to report, in order, without duplicates.
    pub(crate) amenities: Vec<String>,
}

impl NamesConfig {
    // No amenity filter: `write_names` selects rows per section.
    const fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            amenity_case_fold: self.case_fold,
            amenity_filter: None,
        }
    }
}

impl TryFrom<NamesArgs> for NamesConfig {
    type Error = CliError;

    fn try_from(args: NamesArgs) -> Result<Self, Self::Error> {
        let input = args.input.ok_or(CliError::MissingArgument {
            field: ARG_INPUT,
            env: ENV_NAMES_INPUT,
        })?;
        let requested = args
            .amenity
            .filter(|list| !list.is_empty())
            .unwrap_or_else(|| {
                DEFAULT_REPORTED_AMENITIES
                    .iter()
                    .map(|amenity| (*amenity).to_owned())
                    .collect()
            });
        let mut seen = HashSet::new();
        let amenities = requested
            .into_iter()
            .filter(|amenity| seen.insert(amenity.clone()))
            .collect();
        Ok(Self {
            input,
            case_fold: args.case_fold.unwrap_or(false),
            amenities,
        })
    }
}

pub(crate) fn run_names_with(args: NamesArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = load_points(&config.input, &config.extract_options())?;
    write_names(writer, report.points.records(), &config.amenities).map_err(CliError::WriteReport)
}

/// Distinct names of rows whose amenity equals `amenity`, in first-seen order.
pub(crate) fn distinct_names<'a>(records: &'a PointRecordSet, amenity: &str) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|record| record.amenity == amenity)
        .map(|record| record.name.as_str())
        .filter(|name| seen.insert(*name))
        .collect()
}

/// Write one section per amenity, or [`NO_DATA`] when there are no rows.
pub(crate) fn write_names(
    writer: &mut dyn Write,
    records: &PointRecordSet,
    amenities: &[String],
) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(writer, "{NO_DATA}");
    }
    for (position, amenity) in amenities.iter().enumerate() {
        let names = distinct_names(records, amenity);
        if names.is_empty() {
            writeln!(writer, "No {amenity}s found in the data.")?;
            continue;
        }
        if position > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "List of all {amenity}s:")?;
        for name in names {
            writeln!(writer, "{name}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<NamesConfig, CliError> {
    let merged = NamesArgs::merge_from_layers(layers).map_err(CliError::from)?;
    NamesConfig::try_from(merged)
}
