//! JSON output structures for the compbench CLI

use compbench_compression::{Report, WriteSummary};
use serde::Serialize;
use std::path::Path;

/// Complete JSON document for one benchmark run
#[derive(Debug, Serialize)]
pub struct BenchmarkRunJson<'a> {
    /// Run metadata
    pub metadata: RunMetadata,
    /// Comparison report
    pub report: &'a Report,
    /// Payload files written during the run
    pub outputs: Vec<WrittenOutputJson>,
}

/// Run metadata
#[derive(Debug, Serialize)]
pub struct RunMetadata {
    /// compbench version
    pub version: String,
    /// Timestamp when the report was produced
    pub timestamp: String,
    /// Input path as given on the command line
    pub input_path: String,
    /// `os/arch` of the host
    pub platform: String,
    /// Level hint passed to the codecs
    pub level: i32,
    /// Whether payloads were decompressed and compared
    pub verified: bool,
}

/// One written payload
#[derive(Debug, Serialize)]
pub struct WrittenOutputJson {
    /// Algorithm identifier
    pub algorithm: String,
    /// Destination path
    pub path: String,
}

impl<'a> BenchmarkRunJson<'a> {
    /// Assemble the document from a finished run
    pub fn new(
        report: &'a Report,
        input: &Path,
        level: i32,
        verified: bool,
        summary: Option<&WriteSummary>,
    ) -> Self {
        let outputs = summary
            .map(|s| {
                s.written
                    .iter()
                    .map(|(algorithm, path)| WrittenOutputJson {
                        algorithm: algorithm.clone(),
                        path: path.display().to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            metadata: RunMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                timestamp: chrono::Utc::now().to_rfc3339(),
                input_path: input.display().to_string(),
                platform: crate::platform(),
                level,
                verified,
            },
            report,
            outputs,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
