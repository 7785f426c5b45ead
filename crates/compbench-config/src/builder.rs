//! Configuration builder for flexible configuration loading

use crate::{Config, ConfigError, ConfigResult, ENV_PREFIX};
use compbench_types::Verbosity;
use config::{ConfigBuilder as ConfigBuilderInner, Environment, File, FileFormat};
use std::path::{Path, PathBuf};

/// Nesting separator for environment keys (`COMPBENCH__OUTPUT__FORMAT`)
const ENV_SEPARATOR: &str = "__";

/// Configuration builder for loading configuration from multiple sources
#[derive(Debug)]
pub struct ConfigBuilder {
    inner: ConfigBuilderInner<config::builder::DefaultState>,
    sources: Vec<ConfigSource>,
}

#[derive(Debug, Clone)]
enum ConfigSource {
    File { path: PathBuf, format: FileFormat },
    Defaults,
    Environment { prefix: String },
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self {
            inner: config::Config::builder(),
            sources: Vec::new(),
        }
    }

    /// Add default configuration values
    pub fn add_defaults(mut self) -> Self {
        self.sources.push(ConfigSource::Defaults);
        self
    }

    /// Add a configuration file source; missing files are skipped
    pub fn add_source_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let format = Self::detect_format(&path);
        self.sources.push(ConfigSource::File { path, format });
        self
    }

    /// Add environment variable source with prefix
    pub fn add_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.sources.push(ConfigSource::Environment {
            prefix: prefix.into(),
        });
        self
    }

    /// Add the standard `COMPBENCH` environment source
    pub fn add_default_env(self) -> Self {
        self.add_env_prefix(ENV_PREFIX)
    }

    /// Build the configuration
    pub fn build(mut self) -> ConfigResult<Config> {
        // Defaults are always the base layer
        let defaults_value = serde_yaml::to_value(Config::default())
            .map_err(|e| ConfigError::other(format!("Failed to serialize defaults: {}", e)))?;
        self.inner = self
            .inner
            .add_source(config::Config::try_from(&defaults_value)?);

        for source in &self.sources {
            match source {
                ConfigSource::File { path, format } => {
                    if path.exists() {
                        self.inner = self
                            .inner
                            .add_source(File::from(path.clone()).format(*format));
                    }
                }
                ConfigSource::Environment { prefix } => {
                    self.inner = self.inner.add_source(
                        Environment::with_prefix(prefix).separator(ENV_SEPARATOR),
                    );
                }
                ConfigSource::Defaults => {}
            }
        }

        let config = self.inner.build()?;
        let result: Config = config.try_deserialize()?;

        Self::validate(&result)?;

        Ok(result)
    }

    /// Detect file format from extension
    fn detect_format(path: &Path) -> FileFormat {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => FileFormat::Toml,
            Some("json") => FileFormat::Json,
            _ => FileFormat::Yaml,
        }
    }

    /// Validate the configuration
    fn validate(config: &Config) -> ConfigResult<()> {
        Verbosity::new(config.logging.verbosity.get()).map_err(ConfigError::validation)?;
        Ok(())
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
