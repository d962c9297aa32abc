//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TreepickError, TreepickResult};

use super::env_validator::{closest, EnvVarValidator};
use super::types::{Config, UnicodeMode, Verbosity};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".treepick.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TreepickResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML `content` as if it were read from `path`
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> TreepickResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TreepickError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: closest(&key, KNOWN_KEYS).map(str::to_string),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit path, project config, user config, or defaults.
///
/// An explicit path must exist and parse; discovered files that fail to
/// parse are skipped with a warning so a broken user config never blocks a
/// run.
pub fn load_or_default(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> TreepickResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let mut candidates = Vec::new();
    if let Some(root) = project_root {
        candidates.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("treepick/config.toml"));
    }

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                log::debug!("using config {}", candidate.display());
                return Ok((with_env_overrides(config), warnings));
            }
            Err(err) => log::warn!("ignoring config {}: {}", candidate.display(), err),
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (TREEPICK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `get_env` (for testing)
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(value) = get_env("TREEPICK_VERBOSITY") {
        config.output.verbosity = EnvVarValidator::new(
            "TREEPICK_VERBOSITY",
            &["quiet", "normal", "verbose", "debug"],
        )
        .parse(&value, parse_verbosity, config.output.verbosity);
    }

    if let Some(value) = get_env("TREEPICK_UNICODE") {
        config.picker.unicode =
            EnvVarValidator::new("TREEPICK_UNICODE", &["auto", "always", "never"]).parse(
                &value,
                parse_unicode,
                config.picker.unicode,
            );
    }

    if let Some(value) = get_env("TREEPICK_INCLUDE_HIDDEN") {
        config.source.include_hidden = EnvVarValidator::new("TREEPICK_INCLUDE_HIDDEN", BOOL_VALUES)
            .parse(&value, parse_bool, config.source.include_hidden);
    }

    if let Some(value) = get_env("TREEPICK_START_COLLAPSED") {
        config.picker.start_collapsed =
            EnvVarValidator::new("TREEPICK_START_COLLAPSED", BOOL_VALUES).parse(
                &value,
                parse_bool,
                config.picker.start_collapsed,
            );
    }

    config
}

fn parse_verbosity(value: &str) -> Option<Verbosity> {
    match value.to_lowercase().as_str() {
        "quiet" => Some(Verbosity::Quiet),
        "normal" => Some(Verbosity::Normal),
        "verbose" => Some(Verbosity::Verbose),
        "debug" => Some(Verbosity::Debug),
        _ => None,
    }
}

fn parse_unicode(value: &str) -> Option<UnicodeMode> {
    match value.to_lowercase().as_str() {
        "auto" => Some(UnicodeMode::Auto),
        "always" => Some(UnicodeMode::Always),
        "never" => Some(UnicodeMode::Never),
        _ => None,
    }
}

const BOOL_VALUES: &[&str] = &["true", "false", "1", "0", "yes", "no", "on", "off"];

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

const KNOWN_KEYS: &[&str] = &[
    "picker",
    "start_collapsed",
    "show_counts",
    "unicode",
    "source",
    "include_hidden",
    "respect_gitignore",
    "max_depth",
    "dirs_only",
    "output",
    "verbosity",
];
