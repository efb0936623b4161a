use std::path::PathBuf;

use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Configuration from tasklist.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Task file, relative to the working directory
    #[serde(default = "default_task_file")]
    pub file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            file: default_task_file(),
        }
    }
}

fn default_task_file() -> PathBuf {
    PathBuf::from("tasklist.json")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub style: RenderStyle,
    /// false renders priority/due as letter codes instead of colored cells
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default)]
    pub due_clock: DueClock,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            style: RenderStyle::default(),
            color: true,
            due_clock: DueClock::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Consecutive invalid answers before a prompt gives up. 0 = never.
    #[serde(default)]
    pub max_attempts: u32,
}

/// How `print` lays out tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    #[default]
    Table,
    Plain,
}

/// Which calendar decides what "today" is for due tags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DueClock {
    #[default]
    Utc,
    Local,
}

impl DueClock {
    pub fn today(self) -> NaiveDate {
        match self {
            DueClock::Utc => Utc::now().date_naive(),
            DueClock::Local => Local::now().date_naive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.storage.file, PathBuf::from("tasklist.json"));
        assert_eq!(config.display.style, RenderStyle::Table);
        assert!(config.display.color);
        assert_eq!(config.display.due_clock, DueClock::Utc);
        assert_eq!(config.input.max_attempts, 0);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[display]
style = "plain"
due_clock = "local"
"#,
        )
        .unwrap();
        assert_eq!(config.display.style, RenderStyle::Plain);
        assert_eq!(config.display.due_clock, DueClock::Local);
        assert!(config.display.color);
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn unknown_style_is_rejected() {
        assert!(toml::from_str::<Config>("[display]\nstyle = \"fancy\"\n").is_err());
    }
}
