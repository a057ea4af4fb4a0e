//! Command-line interface for reporting amenities found in Overpass exports.
#![forbid(unsafe_code)]

use std::ffi::OsString;
use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};

mod error;
mod extract;
mod names;
mod render;

pub use error::CliError;

use extract::ExtractArgs;
use names::NamesArgs;

pub(crate) const ARG_INPUT: &str = "input";
pub(crate) const ARG_CASE_FOLD: &str = "case-fold";
pub(crate) const ARG_AMENITY: &str = "amenity";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ENV_EXTRACT_INPUT: &str = "AMENITY_CMDS_EXTRACT_INPUT";
pub(crate) const ENV_NAMES_INPUT: &str = "AMENITY_CMDS_NAMES_INPUT";

/// Run the Amenity CLI with the current process arguments and environment,
/// writing reports to standard output.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// export cannot be loaded, or the report cannot be written.
pub fn run() -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_with(&mut stdout)
}

/// Run the Amenity CLI, writing reports to `writer`.
///
/// # Errors
/// See [`run`].
pub fn run_with(writer: &mut dyn Write) -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    dispatch(cli.command, writer)
}

/// Run the Amenity CLI over an explicit argument list, including the
/// program name, writing reports to `writer`.
///
/// # Errors
/// See [`run`].
pub fn run_from<I, T>(args: I, writer: &mut dyn Write) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(CliError::ArgumentParsing)?;
    dispatch(cli.command, writer)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Extract(args) => extract::run_extract_with(args, writer),
        Command::Names(args) => names::run_names_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "amenity",
    about = "Extract and report amenity points from Overpass JSON exports",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract amenity points and write them as a table, JSON or GeoJSON.
    Extract(ExtractArgs),
    /// List the distinct names recorded for selected amenities.
    Names(NamesArgs),
}

/// Check that `path` names an existing regular file before loading it.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match amenity_fs::is_regular_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests;
