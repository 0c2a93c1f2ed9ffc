// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The parsed arguments are turned into a plain `Config` value once, at
// startup. Everything downstream receives that value; there are no global
// flags anywhere in the program.
//
// Rust concepts:
// - Derive macros: clap generates the parser from the struct definition
// - ValueEnum: lets clap parse `--format json` straight into an enum
// - Ownership: `into_config` consumes the Cli, moving its fields out
// =============================================================================

use clap::builder::TypedValueParser;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How many workers run when neither `--workers` nor `MREQ_WORKERS` is given.
pub const DEFAULT_WORKERS: usize = 10;

// This struct represents our entire CLI application
//
// clap adds `-h/--help` and `-V/--version` for us. Both print and exit
// before we ever touch the input file or the network.
#[derive(Parser, Debug)]
#[command(
    name = "mreq",
    version,
    about = "Probe a list of URLs concurrently and report their HTTP status",
    long_about = "mreq reads one URL per line from a file (or standard input when no file is given), \
                  sends a GET request to each of them through a fixed pool of workers and prints \
                  the status of every URL once all of them have been probed."
)]
pub struct Cli {
    /// File with one URL per line (reads standard input when omitted)
    pub input: Option<PathBuf>,

    /// Quiet mode: probe every URL but print no results
    #[arg(short, long)]
    pub quiet: bool,

    /// Number of concurrent workers
    #[arg(
        short,
        long,
        env = "MREQ_WORKERS",
        default_value_t = DEFAULT_WORKERS,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    pub workers: usize,

    /// Output format for the results
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Color)]
    pub format: OutputFormat,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// The available rendering modes for probe results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One colored line per URL
    #[default]
    Color,
    /// One line per URL, no colors
    Plain,
    /// One JSON object per line
    Json,
}

/// Everything a run needs to know, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub quiet: bool,
    pub worker_count: usize,
    pub input_path: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            quiet: self.quiet,
            worker_count: self.workers,
            input_path: self.input,
            format: self.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = Cli::try_parse_from(["mreq"]).unwrap().into_config();
        assert_eq!(
            config,
            Config {
                quiet: false,
                worker_count: DEFAULT_WORKERS,
                input_path: None,
                format: OutputFormat::Color,
            }
        );
    }

    #[test]
    fn test_quiet_flag_is_not_taken_as_input() {
        let config = Cli::try_parse_from(["mreq", "-q", "urls.txt"])
            .unwrap()
            .into_config();
        assert!(config.quiet);
        assert_eq!(config.input_path, Some(PathBuf::from("urls.txt")));

        let config = Cli::try_parse_from(["mreq", "urls.txt", "-q"])
            .unwrap()
            .into_config();
        assert!(config.quiet);
        assert_eq!(config.input_path, Some(PathBuf::from("urls.txt")));
    }

    #[test]
    fn test_workers_and_format() {
        let config = Cli::try_parse_from(["mreq", "-w", "3", "--format", "json"])
            .unwrap()
            .into_config();
        assert_eq!(config.worker_count, 3);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_zero_workers_is_rejected() {
        assert!(Cli::try_parse_from(["mreq", "--workers", "0"]).is_err());
    }

    #[test]
    fn test_unknown_flag_is_a_usage_error() {
        let err = Cli::try_parse_from(["mreq", "--frobnicate"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_short_circuits() {
        let err = Cli::try_parse_from(["mreq", "-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
