// src/prober/mod.rs
// =============================================================================
// This module probes URLs: one GET request per URL, classified into a
// ProbeResult.
//
// Submodules:
// - result: the ProbeResult record and its status classes
// - http: the reqwest-backed prober used by the real program
//
// The `Prober` trait is the seam between the worker pool and the network.
// Workers only ever see the trait, so tests can swap in a prober that counts
// how many probes are running at the same time.
// =============================================================================

mod http;
mod result;

pub use http::HttpProber;
pub use result::{Outcome, ProbeResult, StatusClass};

use std::future::Future;

/// Something that can probe a URL
///
/// Implementations must never fail: every problem is reported inside the
/// returned ProbeResult.
pub trait Prober: Send + Sync + 'static {
    fn probe(&self, url: &str) -> impl Future<Output = ProbeResult> + Send;
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does `-> impl Future<Output = ProbeResult> + Send` mean?
//    - The method returns "some future" without naming its concrete type
//    - `+ Send` promises that future can move between threads, which
//      tokio::spawn requires for the worker tasks
//
// 2. Why `Send + Sync + 'static` on the trait?
//    - One prober is shared by all workers through an Arc
//    - Sync lets many tasks call `probe(&self)` at once
//    - 'static means it borrows nothing that could go away mid-run
// -----------------------------------------------------------------------------
