// src/aggregator/mod.rs
// =============================================================================
// This module gathers the results coming out of the worker pool.
//
// Instead of a shared buffer behind a lock, a single collector task owns the
// buffer. Workers hold `Recorder`s, which just send results down a channel to
// that task. Results end up in the order they were recorded, which is the
// order the probes finished in, not the order of the input.
//
// Rust concepts:
// - Channels: many senders, one receiver, no lock to contend on
// - Consuming methods: `flush(self)` takes ownership, so it cannot run twice
// =============================================================================

mod collector;

pub use collector::{Aggregator, Recorder, Report};
