//! Compression benchmark runner
//!
//! Runs each selected algorithm once over the same read-only input, in
//! registry order, one at a time. A failing codec is logged and left out of
//! the result set; it never aborts the batch.

use crate::algorithms::{CodecAdapter, StandardCodecs};
use crate::registry::{AlgorithmDescriptor, Registry};
use crate::selection::SelectionOutcome;
use compbench_types::{Error, LevelHint, Result};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of one successful compression
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BenchmarkResult {
    /// Algorithm identifier
    pub algorithm: String,
    /// Input size in bytes
    pub original_size: u64,
    /// Output size in bytes
    pub compressed_size: u64,
    /// Compressed size as a percentage of the original
    pub compression_ratio: f64,
    /// Wall-clock time of the compress call
    pub elapsed: Duration,
    /// Compressed bytes, kept for the output writer
    #[cfg_attr(feature = "serde", serde(skip))]
    pub payload: Vec<u8>,
}

impl BenchmarkResult {
    /// Bytes saved; negative when the output grew
    pub fn space_savings(&self) -> i64 {
        self.original_size as i64 - self.compressed_size as i64
    }

    /// Bytes saved as a percentage of the original; 0 for empty input
    pub fn space_savings_percent(&self) -> f64 {
        if self.original_size == 0 {
            0.0
        } else {
            self.space_savings() as f64 / self.original_size as f64 * 100.0
        }
    }

    /// Elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Compressed size as a percentage of `original`
///
/// An empty input has a ratio of 0 rather than a division fault. Values
/// above 100 are valid for incompressible or tiny inputs.
pub fn compression_ratio(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        0.0
    } else {
        compressed as f64 / original as f64 * 100.0
    }
}

/// Successful results keyed by algorithm identifier
///
/// Map order is meaningless; use [`ResultSet::ordered`] for display.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    results: HashMap<String, BenchmarkResult>,
}

impl ResultSet {
    /// Create an empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result under its algorithm identifier
    pub fn insert(&mut self, result: BenchmarkResult) {
        self.results.insert(result.algorithm.clone(), result);
    }

    /// Get the result for an algorithm
    pub fn get(&self, id: &str) -> Option<&BenchmarkResult> {
        self.results.get(id)
    }

    /// Check if an algorithm has a result
    pub fn contains(&self, id: &str) -> bool {
        self.results.contains_key(id)
    }

    /// Number of results
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if there are no results
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results paired with their descriptors, in registry order
    pub fn ordered<'a>(
        &'a self,
        registry: &'a Registry,
    ) -> impl Iterator<Item = (&'a AlgorithmDescriptor, &'a BenchmarkResult)> + 'a {
        registry
            .descriptors()
            .iter()
            .filter_map(move |d| self.results.get(d.id).map(|r| (d, r)))
    }

    /// Consume the set, yielding owned results in registry order
    ///
    /// Results whose identifier is not in `registry` are dropped.
    pub fn into_ordered(
        mut self,
        registry: &Registry,
    ) -> Vec<(&AlgorithmDescriptor, BenchmarkResult)> {
        registry
            .descriptors()
            .iter()
            .filter_map(|d| self.results.remove(d.id).map(|r| (d, r)))
            .collect()
    }
}

/// Knobs shared by every benchmark in a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Level hint forwarded to every codec
    pub level: LevelHint,
    /// Decompress each payload and compare it with the input
    pub verify: bool,
}

/// Sequential benchmark runner
#[derive(Debug)]
pub struct BenchmarkRunner<'r, A = StandardCodecs> {
    registry: &'r Registry,
    adapter: A,
    options: RunOptions,
}

impl<'r> BenchmarkRunner<'r, StandardCodecs> {
    /// Create a runner backed by the linked codec libraries
    pub fn new(registry: &'r Registry) -> Self {
        Self::with_adapter(registry, StandardCodecs)
    }
}

impl<'r, A: CodecAdapter> BenchmarkRunner<'r, A> {
    /// Create a runner with a custom codec adapter
    pub fn with_adapter(registry: &'r Registry, adapter: A) -> Self {
        Self {
            registry,
            adapter,
            options: RunOptions::default(),
        }
    }

    /// Set run options
    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// Current run options
    pub fn options(&self) -> RunOptions {
        self.options
    }

    /// Benchmark every selected algorithm over `data`
    pub fn run(&self, data: &[u8], selection: &SelectionOutcome) -> ResultSet {
        let mut results = ResultSet::new();

        for id in selection.selected() {
            if self.registry.lookup(id).is_none() {
                info!("Skipping algorithm not in registry: {}", id);
            }
        }

        for descriptor in self
            .registry
            .descriptors()
            .iter()
            .filter(|d| selection.contains(d.id))
        {
            info!("Testing algorithm: {}", descriptor.display_name);

            match self.benchmark_algorithm(descriptor, data) {
                Ok(result) => {
                    debug!(
                        "{}: original {}B -> compressed {}B ({:.1}%) time: {:?}",
                        descriptor.display_name,
                        result.original_size,
                        result.compressed_size,
                        result.compression_ratio,
                        result.elapsed
                    );
                    results.insert(result);
                }
                Err(e) => {
                    info!("{} compression failed: {}", descriptor.display_name, e);
                }
            }
        }

        info!(
            "Completed {} of {} benchmark tests",
            results.len(),
            selection.len()
        );
        results
    }

    /// Compress `data` once with `descriptor`, timing the call
    pub fn benchmark_algorithm(
        &self,
        descriptor: &AlgorithmDescriptor,
        data: &[u8],
    ) -> Result<BenchmarkResult> {
        let start = Instant::now();
        let outcome = self.adapter.compress(descriptor, data, self.options.level);
        let elapsed = start.elapsed();

        let payload = outcome.map_err(|e| {
            debug!("{} failed after {:?}", descriptor.id, elapsed);
            e
        })?;

        if self.options.verify {
            let decompressed = self.adapter.decompress(descriptor, &payload)?;
            if decompressed != data {
                return Err(Error::codec(
                    descriptor.id,
                    "data integrity check failed after decompression",
                ));
            }
        }

        let original_size = data.len() as u64;
        let compressed_size = payload.len() as u64;

        Ok(BenchmarkResult {
            algorithm: descriptor.id.to_string(),
            original_size,
            compressed_size,
            compression_ratio: compression_ratio(original_size, compressed_size),
            elapsed,
            payload,
        })
    }
}
