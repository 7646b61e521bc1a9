//! Configuration types for faqbot.
//!
//! [`Config::load`] reads `~/.config/faqbot/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] reads an
//! explicit file instead. Both layer `FAQBOT_*` environment variables on top
//! (`FAQBOT_SERVER__BIND=0.0.0.0:8080`). [`Config::defaults`] returns the
//! built-in defaults without touching the filesystem (useful in tests).

use crate::error::KnowledgeBaseError;
use crate::knowledge::KnowledgeBase;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
bind = "127.0.0.1:8787"

[assistant]
max_message_chars = 500
suggestion_count  = 4
# Path to a TOML/JSON/YAML knowledge base. Empty uses the built-in one.
knowledge_base    = ""
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
}

/// `[server]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address the HTTP server listens on.
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:8787".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

/// `[assistant]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Messages are cut to this many characters before matching.
    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: usize,
    /// Suggestions offered with a fallback reply.
    #[serde(default = "default_suggestion_count")]
    pub suggestion_count: usize,
    #[serde(default)]
    pub knowledge_base: String,
}

fn default_max_message_chars() -> usize { crate::search::DEFAULT_MAX_MESSAGE_CHARS }
fn default_suggestion_count() -> usize { crate::search::DEFAULT_SUGGESTION_COUNT }

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            max_message_chars: default_max_message_chars(),
            suggestion_count: default_suggestion_count(),
            knowledge_base: String::new(),
        }
    }
}

impl AssistantConfig {
    /// Configured knowledge base path, if any.
    pub fn knowledge_base_path(&self) -> Option<PathBuf> {
        let trimmed = self.knowledge_base.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }

    /// Load the configured knowledge base, falling back to the embedded one.
    pub fn load_knowledge_base(&self) -> Result<KnowledgeBase, KnowledgeBaseError> {
        match self.knowledge_base_path() {
            Some(path) => KnowledgeBase::load(&path),
            None => Ok(KnowledgeBase::embedded()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/faqbot/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load from an explicit file, layered on top of the built-in defaults.
    /// A missing file is not an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix("FAQBOT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
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

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("faqbot")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
