//! Lox CLI - scan Lox scripts into tokens.
//!
//! With a script argument the file is scanned once; without one an
//! interactive prompt scans each line as it is entered.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lox_drv::{Config, ConfigFile, DriverError, EmitFormat, ExitStatus, Session};
use lox_lex::IdentifierPolicy;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "LOX_LOG";

/// Lox - scan Lox scripts into tokens
#[derive(Parser, Debug)]
#[command(name = "lox")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Lox scripts into tokens", long_about = None)]
struct Cli {
    /// Script to scan; starts an interactive prompt when omitted
    #[arg(value_name = "SCRIPT")]
    scripts: Vec<PathBuf>,

    /// Token output format (default: from config, else tokens)
    #[arg(long, value_enum)]
    emit: Option<EmitFormat>,

    /// Let block comments nest
    #[arg(long)]
    nested_comments: bool,

    /// Accept Unicode letters in identifiers
    #[arg(long)]
    unicode_idents: bool,

    /// Enable verbose output
    #[arg(short, long, env = "LOX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "LOX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "LOX_NO_COLOR")]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here, on stdout.
            let status = if e.use_stderr() {
                ExitStatus::Usage
            } else {
                ExitStatus::Success
            };
            let _ = e.print();
            return status.into();
        },
    };

    match run(cli) {
        Ok(status) => status.into(),
        Err(err) => {
            report_failure(&err);
            exit_status(&err).into()
        },
    }
}

/// Runs the driver and returns the status to exit with.
fn run(cli: Cli) -> anyhow::Result<ExitStatus> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = build_config(&cli)?;
    debug!(?config, "driver configured");

    let session = Session::new(config);
    let stdin = io::stdin();
    let status = session.run(stdin.lock(), &mut io::stdout().lock(), &mut io::stderr().lock())?;

    debug!(status = status.code(), "driver finished");
    Ok(status)
}

/// Initialize the logging system.
///
/// `LOX_LOG` takes precedence over the verbosity flag.
fn init_logging(verbose: bool, no_color: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<ConfigFile, DriverError> {
    match config_path {
        Some(path) => ConfigFile::load_from_path(path),
        None => ConfigFile::load(),
    }
}

/// Merges the configuration file with command-line overrides.
fn build_config(cli: &Cli) -> Result<Config, DriverError> {
    if cli.scripts.len() > 1 {
        return Err(DriverError::Usage);
    }

    let file = load_config(cli.config.as_deref())?;
    let mut config = Config::from_file(&file);

    config.script = cli.scripts.first().cloned();
    config.verbose = cli.verbose;
    if let Some(emit) = cli.emit {
        config.emit = emit;
    }
    if cli.nested_comments {
        config.scan.nested_comments = true;
    }
    if cli.unicode_idents {
        config.scan.identifiers = IdentifierPolicy::Unicode;
    }

    Ok(config)
}

fn report_failure(err: &anyhow::Error) {
    match err.downcast_ref::<DriverError>() {
        Some(DriverError::Usage) => eprintln!("{}", err),
        _ => eprintln!("error: {:#}", err),
    }
}

/// Maps a driver failure to its exit status.
fn exit_status(err: &anyhow::Error) -> ExitStatus {
    err.downcast_ref::<DriverError>()
        .map(DriverError::exit_status)
        .unwrap_or(ExitStatus::Software)
}
