//! Argument parsing and the load, solve, report pipeline.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use boruvka_core::{
    Boruvka, BoruvkaBuilder, ConfigError, MinimumSpanningForest, MstError, ScanStrategy,
};
use boruvka_providers_binary::{BinaryGraph, BinaryGraphError};
use clap::Parser;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::report::render_report;

/// Report path used when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "mst_output.txt";

/// Process exit status for every failure, usage errors included.
pub const FAILURE_STATUS: u8 = 1;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "boruvka",
    version,
    about = "Compute a minimum spanning forest of a binary graph file."
)]
pub struct Cli {
    /// Binary graph file: a u16 vertex count followed by i16 (from, to, weight) records.
    pub input: PathBuf,

    /// Where to write the text report.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Scan edges on the calling thread instead of the rayon pool.
    #[arg(long)]
    pub sequential: bool,

    /// Abort if the forest has not converged after this many rounds.
    #[arg(long = "max-rounds", value_parser = clap::value_parser!(usize))]
    pub max_rounds: Option<usize>,
}

impl Cli {
    /// Builds a CLI invocation with default options for `input`.
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            sequential: false,
            max_rounds: None,
        }
    }

    const fn scan_strategy(&self) -> ScanStrategy {
        if self.sequential {
            ScanStrategy::Sequential
        } else {
            ScanStrategy::Parallel
        }
    }
}

/// Maps an argument-parsing failure to the process exit status.
///
/// `--help` and `--version` surface as [`clap::Error`]s printed to stdout and
/// exit with 0. Usage errors exit with [`FAILURE_STATUS`] instead of clap's
/// own status 2.
///
/// # Examples
/// ```
/// use boruvka_cli::cli::{Cli, FAILURE_STATUS, usage_exit_status};
/// use clap::Parser;
///
/// let err = Cli::try_parse_from(["boruvka"]).unwrap_err();
/// assert_eq!(usage_exit_status(&err), FAILURE_STATUS);
/// ```
#[must_use]
pub fn usage_exit_status(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        FAILURE_STATUS
    } else {
        0
    }
}

/// Errors surfaced while executing the CLI pipeline.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CliError {
    /// The engine options were rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The input graph could not be loaded.
    #[error("failed to load graph from `{path}`: {source}")]
    Load {
        /// Input path.
        path: PathBuf,
        /// Loader failure.
        #[source]
        source: BinaryGraphError,
    },
    /// The engine rejected the graph or hit its round limit.
    #[error("failed to compute minimum spanning forest of `{path}`: {source}")]
    Engine {
        /// Input path.
        path: PathBuf,
        /// Engine failure.
        #[source]
        source: MstError,
    },
    /// The report file could not be created.
    #[error("failed to create report `{path}`: {source}")]
    Create {
        /// Report path.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing the report failed part way.
    #[error("failed to write report `{path}`: {source}")]
    Write {
        /// Report path.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

/// Stable codes describing [`CliError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum CliErrorCode {
    /// Invalid engine options.
    InvalidConfig,
    /// The input graph could not be loaded.
    LoadFailed,
    /// The engine failed.
    EngineFailed,
    /// The report file could not be created.
    CreateFailed,
    /// The report could not be written.
    WriteFailed,
}

impl CliErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidConfig => "CLI_INVALID_CONFIG",
            Self::LoadFailed => "CLI_LOAD_FAILED",
            Self::EngineFailed => "CLI_ENGINE_FAILED",
            Self::CreateFailed => "CLI_CREATE_FAILED",
            Self::WriteFailed => "CLI_WRITE_FAILED",
        }
    }
}

impl fmt::Display for CliErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CliError {
    /// Retrieve the stable [`CliErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> CliErrorCode {
        match self {
            Self::Config(_) => CliErrorCode::InvalidConfig,
            Self::Load { .. } => CliErrorCode::LoadFailed,
            Self::Engine { .. } => CliErrorCode::EngineFailed,
            Self::Create { .. } => CliErrorCode::CreateFailed,
            Self::Write { .. } => CliErrorCode::WriteFailed,
        }
    }

    /// Returns the code of the wrapped library error, if any.
    #[must_use]
    pub const fn source_code(&self) -> Option<&'static str> {
        match self {
            Self::Config(err) => Some(err.code().as_str()),
            Self::Load { source, .. } => Some(source.code().as_str()),
            Self::Engine { source, .. } => Some(source.code().as_str()),
            Self::Create { .. } | Self::Write { .. } => None,
        }
    }
}

/// Summarises a successful run.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Graph file that was read.
    pub input: PathBuf,
    /// Report file that was written.
    pub output: PathBuf,
    /// Vertex count from the graph header.
    pub vertex_count: usize,
    /// Number of edges decoded from the input.
    pub edge_count: usize,
    /// Bytes of a trailing partial record that were ignored.
    pub truncated_bytes: usize,
    /// The computed forest.
    pub forest: MinimumSpanningForest,
}

/// Loads the graph named by `cli`, computes its minimum spanning forest and
/// writes the report.
///
/// # Errors
/// Returns [`CliError`] when the options are invalid, the graph cannot be
/// loaded, the engine fails, or the report cannot be written.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use boruvka_cli::cli::{Cli, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("pair.bin");
/// // Two vertices joined by one edge of weight 7.
/// std::fs::write(&input, [2_u8, 0, 0, 0, 1, 0, 7, 0])?;
/// let mut cli = Cli::new(&input);
/// cli.output = dir.path().join("report.txt");
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.forest.total_weight(), 7);
/// assert!(std::fs::read_to_string(dir.path().join("report.txt"))?.contains("0 - 1 : 7"));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(input = %cli.input.display(), output = %cli.output.display(), strategy = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let strategy = cli.scan_strategy();
    Span::current().record("strategy", field::debug(strategy));

    let mut builder = BoruvkaBuilder::new().with_scan_strategy(strategy);
    if let Some(rounds) = cli.max_rounds {
        builder = builder.with_max_rounds(rounds);
    }
    let engine = builder.build()?;

    let graph = load_graph(&cli.input)?;
    let forest = solve(&engine, &cli.input, &graph)?;
    write_report(&cli.output, &forest)?;

    info!(
        total_weight = forest.total_weight(),
        edges = forest.edges().len(),
        "report written"
    );
    Ok(ExecutionSummary {
        input: cli.input,
        output: cli.output,
        vertex_count: graph.vertex_count(),
        edge_count: graph.edges().len(),
        truncated_bytes: graph.truncated_bytes(),
        forest,
    })
}

#[instrument(name = "cli.load", err, fields(path = %path.display()))]
pub(super) fn load_graph(path: &Path) -> Result<BinaryGraph, CliError> {
    BinaryGraph::from_path(path).map_err(|source| CliError::Load {
        path: path.to_path_buf(),
        source,
    })
}

fn solve(
    engine: &Boruvka,
    path: &Path,
    graph: &BinaryGraph,
) -> Result<MinimumSpanningForest, CliError> {
    engine
        .run(graph.vertex_count(), graph.edges())
        .map_err(|source| CliError::Engine {
            path: path.to_path_buf(),
            source,
        })
}

#[instrument(name = "cli.write_report", err, skip(forest), fields(path = %path.display()))]
pub(super) fn write_report(path: &Path, forest: &MinimumSpanningForest) -> Result<(), CliError> {
    let file = File::create(path).map_err(|source| CliError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    render_report(forest, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        })
}
