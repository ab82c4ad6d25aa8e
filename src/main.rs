//! CLI entry point for the picsum tool.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use picsum_core::{HttpClient, process_image};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    init_tracing(default_log_level(args.quiet, args.verbose));
    debug!(?args, "CLI arguments parsed");

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<()> {
    let client = HttpClient::new()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let saved = process_image(
        args.dimensions.as_slice(),
        args.image_options(),
        &client,
        &mut input,
        &mut output,
    )
    .await?;

    info!(path = %saved.display(), "picsum finished");
    Ok(())
}

/// Log level used when `RUST_LOG` is not set.
///
/// Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn)
fn default_log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::default_log_level;

    #[test]
    fn test_default_log_level_quiet_wins() {
        assert_eq!(default_log_level(true, 2), "error");
    }

    #[test]
    fn test_default_log_level_by_verbosity() {
        assert_eq!(default_log_level(false, 0), "warn");
        assert_eq!(default_log_level(false, 1), "debug");
        assert_eq!(default_log_level(false, 5), "trace");
    }
}
