use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

/// Top-level Yaamod configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct YaamodConfig {
    /// Synagogue settings.
    #[serde(default)]
    pub synagogue: SynagogueToml,

    /// Precedence settings.
    #[serde(default)]
    pub precedence: PrecedenceToml,

    /// Member roster location.
    #[serde(default)]
    pub roster: RosterToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynagogueToml {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub in_israel: bool,
    #[serde(default)]
    pub in_jerusalem: bool,
}

impl Default for SynagogueToml {
    fn default() -> Self {
        Self {
            name: default_name(),
            in_israel: false,
            in_jerusalem: false,
        }
    }
}

fn default_name() -> String {
    "Synagogue".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrecedenceToml {
    #[serde(default = "default_last_aliya_gap_days")]
    pub last_aliya_gap_days: i64,
}

impl Default for PrecedenceToml {
    fn default() -> Self {
        Self {
            last_aliya_gap_days: default_last_aliya_gap_days(),
        }
    }
}

fn default_last_aliya_gap_days() -> i64 {
    90
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterToml {
    /// JSON roster; relative paths are taken from the config file's
    /// directory.
    #[serde(default = "default_roster_path")]
    pub path: PathBuf,
}

impl Default for RosterToml {
    fn default() -> Self {
        Self {
            path: default_roster_path(),
        }
    }
}

fn default_roster_path() -> PathBuf {
    PathBuf::from("members.json")
}

impl YaamodConfig {
    /// Reads and parses the TOML file at `path`.
    ///
    /// A missing file yields the defaults (a diaspora synagogue) so the
    /// calendar commands work without any setup.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let mut config: YaamodConfig =
            toml::from_str(&toml_str).context("failed to parse TOML config")?;
        if config.roster.path.is_relative() {
            if let Some(dir) = path.parent() {
                config.roster.path = dir.join(&config.roster.path);
            }
        }
        Ok(config)
    }
}
