//! Persisting compressed payloads
//!
//! Without an override every algorithm writes `<stem><extension>` next to
//! the input. A single override path receives every payload in registry
//! order, so the last algorithm wins. Split mode derives one file per
//! algorithm from the override path instead.

use crate::benchmarks::ResultSet;
use crate::registry::{AlgorithmDescriptor, Registry};
use compbench_types::Error;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where compressed payloads go
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `<input dir>/<input stem><extension>` per algorithm
    #[default]
    PerAlgorithm,
    /// Every payload to the same path; last writer wins
    Single(PathBuf),
    /// `<stem>.<id><ext>` beside the given path when several algorithms ran
    Split(PathBuf),
}

/// Files written and per-file failures of one write pass
#[derive(Debug, Default)]
pub struct WriteSummary {
    /// `(algorithm id, path)` for each successful write, in write order
    pub written: Vec<(String, PathBuf)>,
    /// One [`Error::OutputWrite`] per failed write
    pub failures: Vec<Error>,
}

impl WriteSummary {
    /// Check if every write succeeded
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Writes compressed payloads to disk
#[derive(Debug, Clone)]
pub struct OutputWriter {
    input: PathBuf,
    mode: OutputMode,
}

impl OutputWriter {
    /// Create a writer for payloads derived from `input`
    pub fn new(input: impl Into<PathBuf>, mode: OutputMode) -> Self {
        Self {
            input: input.into(),
            mode,
        }
    }

    /// Output mode
    pub fn mode(&self) -> &OutputMode {
        &self.mode
    }

    /// Destination of `descriptor`'s payload when `result_count` results are written
    pub fn destination(&self, descriptor: &AlgorithmDescriptor, result_count: usize) -> PathBuf {
        match &self.mode {
            OutputMode::PerAlgorithm => derived_path(&self.input, &descriptor.extension),
            OutputMode::Single(path) => path.clone(),
            OutputMode::Split(path) if result_count > 1 => split_path(path, descriptor.id),
            OutputMode::Split(path) => path.clone(),
        }
    }

    /// Write every payload in `results`, in registry order
    ///
    /// A failed write is recorded and the remaining writes continue.
    pub async fn write_all(&self, results: &ResultSet, registry: &Registry) -> WriteSummary {
        let mut summary = WriteSummary::default();
        let count = results.len();

        for (descriptor, result) in results.ordered(registry) {
            let path = self.destination(descriptor, count);
            if self.is_input(&path).await {
                debug!("Refusing to overwrite input with {} output", descriptor.display_name);
                summary
                    .failures
                    .push(Error::output_write(path, "destination is the input file"));
                continue;
            }

            match tokio::fs::write(&path, &result.payload).await {
                Ok(()) => {
                    info!(
                        "Saved {} output -> {} ({} bytes)",
                        descriptor.display_name,
                        path.display(),
                        result.payload.len()
                    );
                    summary.written.push((descriptor.id.to_string(), path));
                }
                Err(e) => {
                    debug!("Failed to write {} output: {}", descriptor.display_name, e);
                    summary
                        .failures
                        .push(Error::output_write(path, e.to_string()));
                }
            }
        }

        summary
    }

    /// Check if `path` names the input file, directly or through a link
    async fn is_input(&self, path: &Path) -> bool {
        if path == self.input.as_path() {
            return true;
        }
        match (
            tokio::fs::canonicalize(path).await,
            tokio::fs::canonicalize(&self.input).await,
        ) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

/// `<dir of input>/<stem of input><extension>`
fn derived_path(input: &Path, extension: &str) -> PathBuf {
    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    let mut name = input
        .file_stem()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(extension);
    dir.join(name)
}

/// `<dir>/<stem>.<id><.ext>` derived from an override path
fn split_path(path: &Path, id: &str) -> PathBuf {
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let mut name = path.file_stem().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(id);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    dir.join(name)
}
