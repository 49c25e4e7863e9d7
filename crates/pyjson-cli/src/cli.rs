//! Command line surface shared by both binaries:
//!
//! ```text
//! <prog> <source_file_path> [<destination_file_path>]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches, Parser};

use crate::{convert_file, default_destination, ConvertError, Pipeline};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version)]
pub struct Args {
    /// Gzip-compressed Python dump to convert
    pub source: Option<PathBuf>,

    /// Output file [default: ./<source file name>]
    pub destination: Option<PathBuf>,
}

/// What a run ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The source was missing or not a regular file; usage was printed.
    Usage,
    Converted { source: PathBuf, destination: PathBuf },
}

fn command(pipeline: Pipeline) -> clap::Command {
    Args::command()
        .name(pipeline.program())
        .about(pipeline.about())
}

/// Parses the process arguments, exiting on `--help`, `--version` or
/// unexpected extra arguments.
pub fn parse_args(pipeline: Pipeline) -> Args {
    let matches = command(pipeline).get_matches();
    Args::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
}

/// The usage line, e.g. `Usage: pickle2json [SOURCE] [DESTINATION]`.
pub fn usage(pipeline: Pipeline) -> String {
    command(pipeline).render_usage().to_string()
}

/// Validates `args` and runs the conversion.
pub fn execute(pipeline: Pipeline, args: Args) -> Result<Outcome, ConvertError> {
    let Some(source) = args.source.filter(|path| path.is_file()) else {
        eprintln!("{}", usage(pipeline));
        return Ok(Outcome::Usage);
    };
    let destination = args
        .destination
        .unwrap_or_else(|| default_destination(&source));
    println!(
        "Processing {} to {} ...",
        source.display(),
        destination.display()
    );
    convert_file(pipeline, &source, &destination)?;
    Ok(Outcome::Converted {
        source,
        destination,
    })
}

/// [`execute`] with errors reported on stderr and mapped to an exit code.
pub fn run(pipeline: Pipeline, args: Args) -> ExitCode {
    match execute(pipeline, args) {
        Ok(Outcome::Converted { .. }) => ExitCode::SUCCESS,
        Ok(Outcome::Usage) => ExitCode::from(2),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
