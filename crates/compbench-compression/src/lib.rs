//! Codec adapters and benchmark harness for compbench
//!
//! This crate measures how well and how fast a set of compression algorithms
//! handle one input. It includes:
//!
//! - **Codec adapters**: gzip, zlib, deflate, brotli, zstd, lz4, snappy and
//!   LZW behind one `(bytes, level hint) -> bytes` call
//! - **Registry**: the ordered catalog of algorithms, extensions and platform
//!   support
//! - **Selection**: resolving a user filter against the registry
//! - **Benchmarking**: sequential, failure-isolated timing runs
//! - **Reporting**: aligned text tables and serializable rows
//! - **Output**: writing compressed payloads next to the input
//!
//! # Features
//!
//! - `serde` (default): Enable serialization of results and reports
//!
//! # Examples
//!
//! ```rust
//! use compbench_compression::{resolve, BenchmarkRunner, Registry, Report};
//!
//! let registry = Registry::standard();
//! let data = b"Hello, world! This is test data for compression.".repeat(20);
//!
//! let selection = resolve("gzip,zstd", &registry.supported_identifiers());
//! let results = BenchmarkRunner::new(&registry).run(&data, &selection);
//!
//! let report = Report::build("hello.txt", data.len() as u64, &results, &registry);
//! assert_eq!(report.rows.len(), 2);
//! println!("{}", report.render(false));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod benchmarks;
pub mod output;
pub mod registry;
pub mod report;
pub mod selection;

// Re-export main types
pub use algorithms::{Codec, CodecAdapter, LevelRange, LzoVariant, StandardCodecs};
pub use benchmarks::{compression_ratio, BenchmarkResult, BenchmarkRunner, ResultSet, RunOptions};
pub use output::{OutputMode, OutputWriter, WriteSummary};
pub use registry::{AlgorithmDescriptor, Registry};
pub use report::{format_size, Report, ReportRow};
pub use selection::{resolve, SelectionOutcome};
