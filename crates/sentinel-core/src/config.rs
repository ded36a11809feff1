//! Configuration types for sentinel.
//!
//! [`Config::load`] reads `~/.config/sentinel/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use crate::normalizer::Placeholders;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[placeholders]
workflow     = "Unknown workflow"
node         = "Unknown node"
error_type   = "Unknown error"
message      = "No message"
execution_id = "N/A"
link         = "No link"
suggestion   = "No suggestion"
cause        = "Unknown cause"
severity     = "medium"
priority     = "medium"

[listing]
page_size           = 20
search_term_max_len = 100
summary_width       = 100
top_workflows       = 5
timeline_days       = 7
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/sentinel/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub placeholders: Placeholders,
    #[serde(default)]
    pub listing: ListingConfig,
}

/// `[listing]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_search_term_max_len")]
    pub search_term_max_len: usize,
    #[serde(default = "default_summary_width")]
    pub summary_width: usize,
    #[serde(default = "default_top_workflows")]
    pub top_workflows: usize,
    #[serde(default = "default_timeline_days")]
    pub timeline_days: usize,
}

fn default_page_size() -> usize { 20 }
fn default_search_term_max_len() -> usize { crate::search::DEFAULT_SEARCH_TERM_MAX_LEN }
fn default_summary_width() -> usize { 100 }
fn default_top_workflows() -> usize { 5 }
fn default_timeline_days() -> usize { 7 }

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            search_term_max_len: default_search_term_max_len(),
            summary_width: default_summary_width(),
            top_workflows: default_top_workflows(),
            timeline_days: default_timeline_days(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/sentinel/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Same as [`Config::load`] with an explicit file path.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CONFIG.trim_start())?;
            tracing::debug!(path = %path.display(), "wrote default config");
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("sentinel")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
