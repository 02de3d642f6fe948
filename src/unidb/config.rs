use crate::error::{Result, UnidbError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

const CONFIG_FILENAME: &str = "config.json";
pub const HOME_ENV: &str = "UNIDB_HOME";

/// Which record store backs the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Linear,
    Indexed,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Linear => write!(f, "linear"),
            StoreKind::Indexed => write!(f, "indexed"),
        }
    }
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(StoreKind::Linear),
            "indexed" => Ok(StoreKind::Indexed),
            other => Err(format!(
                "unknown store '{}' (expected 'linear' or 'indexed')",
                other
            )),
        }
    }
}

/// Session preferences, stored in `<config dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnidbConfig {
    #[serde(default)]
    pub store: StoreKind,

    /// Ask before deleting a record or clearing the database
    #[serde(default = "default_true")]
    pub confirm_destructive: bool,

    #[serde(default)]
    pub load_sample_on_start: bool,

    /// Clear the terminal before the banner (ignored when stdout is not a tty)
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UnidbConfig {
    fn default() -> Self {
        Self {
            store: StoreKind::default(),
            confirm_destructive: true,
            load_sample_on_start: false,
            clear_screen: true,
            color: true,
        }
    }
}

impl UnidbConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: UnidbConfig = serde_json::from_str(&content)?;
        debug!(path = %config_path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<PathBuf> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(config_path)
    }

    pub fn path_in<P: AsRef<Path>>(config_dir: P) -> PathBuf {
        config_dir.as_ref().join(CONFIG_FILENAME)
    }
}

/// Picks the config directory: an explicit path, then `UNIDB_HOME`, then the
/// platform config directory.
pub fn resolve_config_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(home) = std::env::var_os(HOME_ENV) {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    ProjectDirs::from("edu", "unidb", "unidb")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| UnidbError::Config("could not determine a config directory".into()))
}
