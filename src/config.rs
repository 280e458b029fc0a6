//! Configuration module.
//!
//! Handles loading, validating, and merging `folio.toml`. Stock defaults are
//! the base layer; values from the user's file are merged on top key by key,
//! then the result is deserialized and validated.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [store]
//! root = "content"          # Directory store root
//! asset_base_url = ""       # Prefix for relative image paths ("" = leave as is)
//!
//! [fallback]
//! # path = "fallback.json"  # Replace the bundled fallback dataset
//!
//! [contact]
//! profanity_words = ["fuck", "shit", "ass", "bitch", "bastard", "damn", "cunt", "dick", "piss"]
//! message_min = 10          # Minimum message length in characters
//! message_max = 1000        # Maximum message length in characters
//!
//! [log]
//! level = "warn"            # Default log filter when RUST_LOG is unset
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [contact]
//! message_max = 2000
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::inquiry::{DEFAULT_MESSAGE_MAX, DEFAULT_MESSAGE_MIN, InquiryRules};
use crate::profanity::{DEFAULT_WORDS, ProfanityFilter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "folio.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `folio.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    /// Where content documents live.
    pub store: StoreConfig,
    /// Replacement fallback dataset.
    pub fallback: FallbackConfig,
    /// Contact form validation.
    pub contact: ContactConfig,
    /// Logging defaults.
    pub log: LogConfig,
}

impl FolioConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.root.trim().is_empty() {
            return Err(ConfigError::Validation(
                "store.root must not be empty".into(),
            ));
        }
        if self.contact.message_min == 0 {
            return Err(ConfigError::Validation(
                "contact.message_min must be at least 1".into(),
            ));
        }
        if self.contact.message_min > self.contact.message_max {
            return Err(ConfigError::Validation(
                "contact.message_min must not exceed contact.message_max".into(),
            ));
        }
        if self.contact.profanity_words.iter().any(|w| w.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "contact.profanity_words entries must not be blank".into(),
            ));
        }
        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.log.level) {
            return Err(ConfigError::Validation(format!(
                "log.level is not a valid filter: {e}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Directory store root. Relative paths resolve against the working directory.
    pub root: String,
    /// Prefix applied to relative asset paths of certificates, awards,
    /// publications and books.
    pub asset_base_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: "content".to_string(),
            asset_base_url: String::new(),
        }
    }
}

impl StoreConfig {
    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(&self.root)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FallbackConfig {
    /// JSON file replacing the bundled dataset. When absent or null, the
    /// dataset compiled into the binary is used.
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Root words for the profanity filter. Leetspeak variants are derived.
    pub profanity_words: Vec<String>,
    pub message_min: usize,
    pub message_max: usize,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            profanity_words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            message_min: DEFAULT_MESSAGE_MIN,
            message_max: DEFAULT_MESSAGE_MAX,
        }
    }
}

impl ContactConfig {
    /// Validation rules for the inquiry form.
    pub fn rules(&self) -> InquiryRules {
        InquiryRules {
            profanity: ProfanityFilter::new(&self.profanity_words),
            message_min: self.message_min,
            message_max: self.message_max,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `"info"` or `"folio=debug"`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(FolioConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<FolioConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: FolioConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from a `folio.toml` path.
///
/// A missing file yields the stock defaults. User values are merged on top
/// of stock defaults, unknown keys are rejected, and the result is validated.
pub fn load_config(path: &Path) -> Result<FolioConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `folio.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Content store
# ---------------------------------------------------------------------------
[store]
# Directory holding one subdirectory per collection, one JSON file per document:
#   content/hero/main.json, content/projects/atrium.json, ...
root = "content"

# Prefix for relative image paths of certificates, awards, publications and
# books. Leave empty to serve paths unchanged.
asset_base_url = ""

# ---------------------------------------------------------------------------
# Fallback content
# ---------------------------------------------------------------------------
[fallback]
# Served whenever the store is unreachable or a collection is empty.
# Uncomment to replace the dataset bundled in the binary. Every collection in
# the file must be non-empty.
# path = "fallback.json"

# ---------------------------------------------------------------------------
# Contact form
# ---------------------------------------------------------------------------
[contact]
# Root words rejected in names, messages and custom project types. Matching is
# case-insensitive, whole-word, and accepts common leetspeak (sh1t, a$$).
profanity_words = ["fuck", "shit", "ass", "bitch", "bastard", "damn", "cunt", "dick", "piss"]

# Message length bounds, in characters (inclusive).
message_min = 10
message_max = 1000

# ---------------------------------------------------------------------------
# Logging
# ---------------------------------------------------------------------------
[log]
# Default filter when RUST_LOG is not set. Fallback warnings are logged at
# "warn"; probe and write results at "info".
level = "warn"
"##
}
