//! Configuration module for treepick
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TREEPICK_*)
//! 3. Explicit `--config` file, else project `.treepick.toml`
//! 4. User config (~/.config/treepick/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{closest, levenshtein, EnvVarValidator};
pub use loader::{
    load_or_default, load_with_warnings, parse_with_warnings, with_env_overrides,
    with_env_overrides_from, ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{Config, OutputConfig, PickerConfig, SourceConfig, UnicodeMode, Verbosity};
