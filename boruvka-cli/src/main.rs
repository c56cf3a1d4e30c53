//! Entry point for the `boruvka` binary.
//!
//! Parses arguments, runs the load, solve, report pipeline, and prints a
//! short summary to stdout. Usage errors are printed by clap; pipeline
//! failures are logged with their stable codes. Both exit with status 1.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use boruvka_cli::{
    cli::{Cli, CliError, render_summary, run_cli, usage_exit_status},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn try_main(cli: Cli) -> Result<()> {
    let summary = run_cli(cli).context("failed to compute minimum spanning forest")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to print summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_usage(&err),
    };

    if let Err(err) = try_main(cli) {
        let cli_error = err.downcast_ref::<CliError>();
        let code = cli_error.map(|cli_error| field::display(cli_error.code().as_str()));
        let source_code = cli_error
            .and_then(CliError::source_code)
            .map(field::display);

        error!(
            error = %format!("{err:#}"),
            code,
            source_code,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn report_usage(err: &clap::Error) -> ExitCode {
    let status = usage_exit_status(err);
    if err.print().is_err() {
        return ExitCode::FAILURE;
    }
    ExitCode::from(status)
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
