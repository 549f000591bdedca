//! Application configuration file.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use quotewire_lib::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything the CLI can be configured with. Missing keys take their
/// built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) feeds: FeedConfig,
    pub(crate) series: SeriesConfig,
    #[cfg(feature = "chart")]
    pub(crate) chart: ChartConfig,
}

impl AppConfig {
    /// Returns the platform config file location, e.g.
    /// `~/.config/quotewire/config.json` on Linux.
    pub(crate) fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "quotewire").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, the platform config file
    /// is used when present, and the built-in defaults otherwise.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path),
                None => Ok(Self::default()),
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub(crate) fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
