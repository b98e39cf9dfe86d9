use clap::Parser;
use dirdiff::commands::diff::{self, ERROR_EXIT_CODE};
use dirdiff::config::Cli;
use dirdiff::{Config, DirDiffError};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match try_main(cli) {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            match error.downcast_ref::<DirDiffError>() {
                Some(known) => eprintln!("{}", diff::format_error(known)),
                None => eprintln!("Error: {:#}", error),
            }
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}

fn try_main(cli: Cli) -> anyhow::Result<u8> {
    // Convert CLI args to Config - this validates immediately
    let config = Config::try_from(cli)?;
    let outcome = diff::run(&config)?;
    Ok(outcome.exit_code())
}

/// Logs go to stderr so verdicts on stdout stay machine-readable
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("dirdiff=debug"),
        _ => EnvFilter::new("dirdiff=trace"),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
