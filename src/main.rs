//! Campus - navigation and utility planner
//!
//! An interactive menu for registering campus buildings and roads, running
//! BFS/DFS traversals and shortest-path queries, and managing a building
//! hierarchy tree.

mod cli;
mod commands;

use std::env;
use std::io;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use campus_core::config::CampusConfig;
use campus_core::error::{CampusError, ExitCode as CampusExitCode};
use campus_core::logging;
use cli::{Cli, OutputFormat};
use commands::session::Session;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap fails before `Cli.format` exists; honour `--format json`
            // from raw argv so scripted callers still get a JSON envelope.
            if argv_requests_json() {
                let campus_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => CampusError::UsageError(err.to_string()),
                };
                eprintln!("{}", campus_error.to_json());
                return ExitCode::from(campus_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match run(&cli, start) {
        Ok(()) => ExitCode::from(CampusExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli, start: Instant) -> campus_core::error::Result<()> {
    let config = CampusConfig::resolve(cli.config.as_deref())?;
    campus_core::trace_time!(start, "load_config");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config, cli.format, cli.quiet);
    session.run()?;

    campus_core::trace_time!(start, "session_complete");
    Ok(())
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        let value = if arg == "--format" {
            args.next()
        } else {
            arg.strip_prefix("--format=").map(str::to_string)
        };
        if value
            .and_then(|v| v.parse::<OutputFormat>().ok())
            .is_some_and(|format| format == OutputFormat::Json)
        {
            return true;
        }
    }
    false
}
