use anyhow::Context;
use scrub_core::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Simple configuration for scrub
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Appended to the file stem of every output
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Extension used when the input has none
    #[serde(default = "default_extension")]
    pub fallback_extension: String,

    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Extension of the files picked up in directory mode
    #[serde(default = "default_extension")]
    pub extension: String,

    /// File-name globs skipped in directory mode
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            fallback_extension: default_extension(),
            format: OutputFormat::default(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            exclude: default_exclude(),
        }
    }
}

fn default_suffix() -> String {
    "_modified".to_string()
}

fn default_extension() -> String {
    "plist".to_string()
}

fn default_exclude() -> Vec<String> {
    vec!["*_modified.*".to_string()]
}

impl Config {
    /// Load config from the default location, falling back to defaults if absent
    pub fn load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "scrub", "scrub")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
