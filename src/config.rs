// src/config.rs
//! Configuration: defaults, then an optional YAML file, then environment overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_CONFIG_FILE: &str = "hrintel.yaml";
const DEFAULT_STATE_DIR: &str = ".hrintel";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub timeout_seconds: u64,
    pub state_dir: PathBuf,
    pub log_file: Option<PathBuf>,
}

/// Shape of `hrintel.yaml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub api_base: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub state_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from the working directory and process environment
    pub fn load() -> Result<AppConfig> {
        let base_dir = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = std::env::var("HRINTEL_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| base_dir.join(DEFAULT_CONFIG_FILE));

        let file = Self::read_file(&config_path)?;
        Self::from_sources(file, &base_dir, |key| std::env::var(key).ok())
    }

    /// Parse the YAML file if it exists; a missing file is not an error.
    pub fn read_file(path: &Path) -> Result<Option<ConfigFile>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(Some(file))
    }

    /// Merge defaults, file and environment lookups (highest precedence last).
    pub fn from_sources<F>(file: Option<ConfigFile>, base_dir: &Path, env: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = file.unwrap_or_default();

        let api_base = env("HRINTEL_API_BASE")
            .or(file.api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let timeout_seconds = match env("HRINTEL_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("HRINTEL_TIMEOUT_SECS must be a number of seconds"))?,
            None => file.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };
        if timeout_seconds == 0 {
            anyhow::bail!("Request timeout must be at least one second");
        }

        let state_dir = env("HRINTEL_STATE_DIR")
            .map(PathBuf::from)
            .or(file.state_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR));

        let log_file = env("HRINTEL_LOG_FILE").map(PathBuf::from).or(file.log_file);

        Ok(AppConfig {
            api_base: api_base.trim_end_matches('/').to_string(),
            timeout_seconds,
            state_dir: resolve_path(base_dir, &state_dir),
            log_file: log_file.map(|p| resolve_path(base_dir, &p)),
        })
    }
}

fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
