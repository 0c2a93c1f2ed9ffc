// src/formatters/mod.rs
// =============================================================================
// Turns probe results into text.
//
// Submodules:
// - json: one JSON record per line
// - color: one (optionally colored) human-readable line per result
// - summary: per-class counts for the end-of-run log line
// - log: env_logger setup for our own diagnostics on stderr
//
// The rendering mode is a strategy chosen once from the configuration, so the
// aggregator never needs to know which one is in use.
// =============================================================================

mod color;
mod json;
mod log;
mod summary;

pub use color::{ColorFormatter, PlainFormatter};
pub use json::JsonFormatter;
pub use self::log::init_logging;
pub use summary::Summary;

use crate::cli::OutputFormat;
use crate::prober::ProbeResult;
use anyhow::Result;

/// Renders a single result as one line of text (without the newline)
pub trait ResultFormatter: Send + Sync {
    fn format_result(&self, result: &ProbeResult) -> Result<String>;
}

/// Picks the formatter for the configured output format
pub fn get_formatter(format: OutputFormat) -> Box<dyn ResultFormatter> {
    match format {
        OutputFormat::Color => Box::new(ColorFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
