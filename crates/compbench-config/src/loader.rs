//! Configuration loader utilities

use crate::{Config, ConfigBuilder, ConfigError, ConfigResult};
use std::path::{Path, PathBuf};

const FILE_NAMES: [&str; 3] = ["compbench.yaml", "compbench.yml", "compbench.toml"];

/// Configuration loader with common loading patterns
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the first file found in the default
    /// locations, then the environment
    pub fn load_default() -> ConfigResult<Config> {
        let mut builder = ConfigBuilder::new().add_defaults();

        if let Some(path) = Self::config_exists() {
            builder = builder.add_source_file(path);
        }

        builder.add_default_env().build()
    }

    /// Load configuration from a specific file, then the environment
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Config> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Configuration file not found",
                ),
            });
        }

        ConfigBuilder::new()
            .add_defaults()
            .add_source_file(path)
            .add_default_env()
            .build()
    }

    /// Save configuration to a file, picking the format from the extension
    pub fn save_to_file<P: AsRef<Path>>(config: &Config, path: P) -> ConfigResult<()> {
        let path = path.as_ref();

        let content = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::to_string_pretty(config).map_err(|e| {
                ConfigError::Serialization {
                    message: format!("Failed to serialize to TOML: {}", e),
                }
            })?,
            Some("json") => serde_json::to_string_pretty(config).map_err(|e| {
                ConfigError::Serialization {
                    message: format!("Failed to serialize to JSON: {}", e),
                }
            })?,
            _ => serde_yaml::to_string(config)?,
        };

        std::fs::write(path, content).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Generate a default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> ConfigResult<()> {
        Self::save_to_file(&Config::default(), path)
    }

    /// Check if a configuration file exists in default locations
    pub fn config_exists() -> Option<PathBuf> {
        Self::default_config_paths()
            .into_iter()
            .find(|path| path.exists())
    }

    /// Default configuration file paths in order of preference
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = FILE_NAMES.iter().map(PathBuf::from).collect();
        paths.extend(FILE_NAMES.iter().map(|name| PathBuf::from(format!(".{}", name))));

        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("compbench");
            paths.extend(
                ["config.yaml", "config.yml", "config.toml"]
                    .iter()
                    .map(|name| app_dir.join(name)),
            );
        }

        paths
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("APPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME").ok().map(|home| {
                PathBuf::from(home)
                    .join("Library")
                    .join("Application Support")
            })
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_CONFIG_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|home| PathBuf::from(home).join(".config"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
