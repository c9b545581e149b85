// setcal: interpreter for set and relation programs

use std::fs;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::style::Stylize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use setcal::config::{Config, DEFAULT_LOG_FILTER};
use setcal::Error;

/// Run a set calculator program and print the result of every line
#[derive(Debug, Parser)]
#[command(name = "setcal", version, about)]
struct Cli {
    /// Program file
    file: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            report(&e.into());
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), Error> {
    let source = fs::read_to_string(&cli.file).map_err(|source| Error::Read {
        path: cli.file.clone(),
        source,
    })?;
    debug!(file = %cli.file.display(), bytes = source.len(), "read program");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = setcal::execute(&source, &mut out, config.rng());

    // Lines printed before a failure are still part of the output
    out.flush().map_err(|e| Error::Runtime(e.into()))?;
    result
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn report(error: &Error) {
    if io::stderr().is_terminal() {
        eprintln!("{}: {}", "error".red().bold(), error);
    } else {
        eprintln!("error: {}", error);
    }
}
