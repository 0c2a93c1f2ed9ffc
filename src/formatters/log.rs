// src/formatters/log.rs
// Sets up env_logger: warnings and errors by default, more with -v,
// and RUST_LOG wins over both.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize logging to stderr for the given `-v` count
pub fn init_logging(verbose: u8) {
    let env = Env::default().filter_or("RUST_LOG", "warn");
    let mut builder = Builder::from_env(env);

    if std::env::var("RUST_LOG").is_err() {
        // Keep dependencies (hyper, reqwest, ...) at warn, only we get louder
        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("mreq", level_for(verbose));
    }

    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    builder.init();
}
