// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments into a Config (clap handles -h/--help)
// 2. Open the URL source; if the file cannot be opened we stop right here,
//    before a single worker has been started
// 3. Run the worker pool until every URL has been probed
// 4. Print all results at once, then report any input read error
// 5. Exit with the proper code (0 = run completed, 1 = input file could not
//    be opened, 2 = usage error, reported by clap)
//
// The results go to stdout; everything else (errors, logs) goes to stderr.
// =============================================================================

mod aggregator;
mod cli;
mod formatters;
mod pool;
mod prober;
mod source;

use aggregator::Aggregator;
use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Config};
use pool::Engine;
use prober::HttpProber;
use source::UrlSource;
use std::io::Write;
use std::sync::Arc;

/// Exit code for a run that could not start because its input could not be opened
const EXIT_INPUT_UNAVAILABLE: i32 = 1;

#[tokio::main]
async fn main() {
    // Exits with code 2 on usage errors, 0 after printing help or version
    let cli = Cli::parse();
    formatters::init_logging(cli.verbose);

    let exit_code = match run(cli.into_config()).await {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            EXIT_INPUT_UNAVAILABLE
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = the run completed (failed probes and read errors included)
//   Err   = the run never started (or its results could not be written)
async fn run(config: Config) -> Result<i32> {
    log::debug!("{:?}", config);

    // The only fatal error: no input, no workers
    let source = UrlSource::open(config.input_path.as_deref()).await?;
    let prober = Arc::new(HttpProber::new()?);

    let aggregator = Aggregator::new(config.quiet);
    let mut engine = Engine::new(config.worker_count);
    let stats = engine.run(source, prober, aggregator.recorder()).await?;

    let formatter = formatters::get_formatter(config.format);
    let report = aggregator.flush(formatter.as_ref()).await?;

    if !config.quiet {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(report.output.as_bytes())
            .and_then(|_| stdout.flush())
            .context("Cannot write results to stdout")?;
    }

    // Reported even in quiet mode
    if let Some(e) = stats.input_error {
        log::error!("Error reading input: {}", e);
    }
    if stats.failed_workers > 0 {
        log::warn!("{} worker(s) stopped abnormally", stats.failed_workers);
    }
    if !config.quiet {
        log::info!("{}", report.summary);
    }

    Ok(0)
}
