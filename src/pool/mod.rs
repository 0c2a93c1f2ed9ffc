// src/pool/mod.rs
// =============================================================================
// The worker pool: a fixed number of workers draining one bounded queue.
//
// Submodules:
// - worker: a single consume-probe-record loop
// - engine: starts the workers, feeds the queue, waits for everyone to exit
// =============================================================================

mod engine;
mod worker;

pub use engine::{Engine, RunState, RunStats, QUEUE_FACTOR};
pub use worker::Worker;
