//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TreepickResult;
use crate::provider::DirectoryOptions;

use super::loader;

/// Picker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Start with every branch collapsed instead of open
    #[serde(default)]
    pub start_collapsed: bool,

    /// Show descendant counts next to branch labels
    #[serde(default = "default_true")]
    pub show_counts: bool,

    #[serde(default)]
    pub unicode: UnicodeMode,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            start_collapsed: false,
            show_counts: true,
            unicode: UnicodeMode::default(),
        }
    }
}

/// Directory source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub include_hidden: bool,

    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    #[serde(default)]
    pub max_depth: Option<usize>,

    #[serde(default)]
    pub dirs_only: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            include_hidden: false,
            respect_gitignore: true,
            max_depth: None,
            dirs_only: false,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

fn default_true() -> bool {
    true
}

/// Unicode glyph mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnicodeMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl UnicodeMode {
    /// Resolve against what the terminal reports
    pub fn resolve(self, detected: bool) -> bool {
        match self {
            UnicodeMode::Auto => detected,
            UnicodeMode::Always => true,
            UnicodeMode::Never => false,
        }
    }
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Combine the configured level with `-v` flags; flags only ever raise it.
    pub fn with_flags(self, count: u8) -> Self {
        let from_flags = match count {
            0 => Verbosity::Quiet,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        };
        self.max(from_flags)
    }

    /// `log` filter for this level
    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Error,
            Verbosity::Normal => log::LevelFilter::Warn,
            Verbosity::Verbose => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub picker: PickerConfig,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TreepickResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Options for the directory provider
    pub fn directory_options(&self) -> DirectoryOptions {
        DirectoryOptions {
            include_hidden: self.source.include_hidden,
            respect_gitignore: self.source.respect_gitignore,
            max_depth: self.source.max_depth,
            dirs_only: self.source.dirs_only,
        }
    }
}
