//! Configuration management system for compbench
//!
//! Settings are layered: built-in defaults, then an optional configuration
//! file (YAML, TOML or JSON), then `COMPBENCH__*` environment variables.
//! Command line flags are applied on top by the CLI.
//!
//! # Examples
//!
//! ```rust
//! use compbench_config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .add_defaults()
//!     .build()
//!     .expect("Failed to load configuration");
//!
//! assert_eq!(config.benchmark.algorithms, "all");
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use compbench_types::{LevelHint, Verbosity};
use serde::{Deserialize, Serialize};

pub mod builder;
pub mod error;
pub mod loader;

pub use builder::ConfigBuilder;
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;

/// Environment variable prefix (`COMPBENCH__BENCHMARK__LEVEL=9`)
pub const ENV_PREFIX: &str = "COMPBENCH";

/// Main configuration structure for compbench
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Benchmark configuration
    #[serde(default)]
    pub benchmark: BenchmarkConfig,
    /// Report and payload output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// What to benchmark and how
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Comma separated algorithm list, or `all`
    pub algorithms: String,
    /// Level hint passed to every codec; negative selects codec defaults
    pub level: LevelHint,
    /// Decompress every payload and compare it with the input
    pub verify: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            algorithms: "all".to_string(),
            level: LevelHint::default(),
            verify: false,
        }
    }
}

/// Report rendering format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Aligned text table
    #[default]
    Text,
    /// JSON document
    Json,
}

/// Report and payload output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Append the list of algorithms without a codec on this platform
    pub show_unsupported: bool,
    /// Derive one file per algorithm from an explicit output path
    pub split_output: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Diagnostic verbosity (0-2)
    pub verbosity: Verbosity,
}
