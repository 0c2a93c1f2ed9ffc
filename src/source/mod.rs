// src/source/mod.rs
// =============================================================================
// This module turns a line-oriented byte stream (a file or standard input)
// into a lazy sequence of candidate URLs.
//
// Rust concepts:
// - Trait objects: Box<dyn AsyncRead> lets a file and stdin share one type
// - Option: the sequence ends with None, like an iterator
// =============================================================================

mod lines;

pub use lines::UrlSource;
