//! Command-line interface for computing a minimum spanning forest.
//!
//! Reads a binary graph, runs the Borůvka engine, and writes a text report.

mod commands;
mod report;

pub use commands::{
    Cli, CliError, CliErrorCode, DEFAULT_OUTPUT, ExecutionSummary, FAILURE_STATUS, run_cli,
    usage_exit_status,
};
pub use report::{render_report, render_summary};
