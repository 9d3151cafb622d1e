// src/preferences.rs
//! Persisted display preferences (currently only the theme)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const PREFERENCES_FILE: &str = "preferences.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" | "night" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => anyhow::bail!("Unknown theme: {}. Use dark or light", other),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(default)]
    theme: Theme,
}

/// Single-writer store for the theme preference.
pub struct ThemeStore {
    path: PathBuf,
    current: Theme,
}

impl ThemeStore {
    /// Read the stored theme; a missing or unreadable file means dark.
    pub fn open(state_dir: &Path) -> Self {
        let path = state_dir.join(PREFERENCES_FILE);
        let current = match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<PreferencesFile>(&content) {
                Ok(prefs) => prefs.theme,
                Err(e) => {
                    warn!("Ignoring unreadable preferences {}: {}", path.display(), e);
                    Theme::default()
                }
            },
            Err(_) => Theme::default(),
        };

        Self { path, current }
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.current = theme;
        self.save()
    }

    /// Flip dark/light and persist the result.
    pub fn toggle(&mut self) -> Result<Theme> {
        self.set(self.current.toggled())?;
        Ok(self.current)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = toml::to_string(&PreferencesFile {
            theme: self.current,
        })
        .context("Failed to serialize preferences")?;

        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))?;

        info!("Theme set to {}", self.current);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_defaults_to_dark() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = ThemeStore::open(dir.path());
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists_across_reload() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut store = ThemeStore::open(dir.path());
        assert_eq!(store.toggle().unwrap(), Theme::Light);

        let reloaded = ThemeStore::open(dir.path());
        assert_eq!(reloaded.theme(), Theme::Light);

        let mut store = reloaded;
        store.toggle().unwrap();
        assert_eq!(ThemeStore::open(dir.path()).theme(), Theme::Dark);
    }

    #[test]
    fn test_garbage_file_falls_back_to_dark() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join(PREFERENCES_FILE), "theme = 'sepia'").unwrap();
        assert_eq!(ThemeStore::open(dir.path()).theme(), Theme::Dark);
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("Light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("blue".parse::<Theme>().is_err());
    }
}
