//! `huematch` — recolor a target image with the color statistics of a source.

use std::process::ExitCode;

use clap::Parser;
use huematch_cli::Args;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the `-v` log level.
const LOG_ENV: &str = "HUEMATCH_LOG";

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match huematch_cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
