//! compbench testing suite
//!
//! Integration tests and codec throughput benchmarks for the compbench
//! crates, plus the fixtures they share.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Shared test data and file helpers
pub mod test_utils;
