use std::path::Path;

use anyhow::{Context, Result};

#[derive(Clone, Debug, PartialEq, serde::Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
}

/// Board and rule settings. Every field may be omitted in the TOML.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct GameConfig {
    #[serde(default = "defaults::width")]
    pub width: isize,
    #[serde(default = "defaults::height")]
    pub height: isize,
    #[serde(default = "defaults::goal")]
    pub goal: i64,
    #[serde(default = "defaults::spawn_value")]
    pub spawn_value: i64,
    /// Fixed seed for a reproducible tile stream; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: defaults::width(),
            height: defaults::height(),
            goal: defaults::goal(),
            spawn_value: defaults::spawn_value(),
            seed: None,
        }
    }
}

impl Config {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

mod defaults {
    pub fn width() -> isize { 4 }
    pub fn height() -> isize { 4 }
    pub fn goal() -> i64 { 2048 }
    pub fn spawn_value() -> i64 { 2 }
}
