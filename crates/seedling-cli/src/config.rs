//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `SEEDLING__SECTION__KEY` environment variables
//! 3. `.seedling.toml` in the current directory
//! 4. The `--config` file, or the platform config file
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use seedling_core::domain::layout::{DEFAULT_COMPOSE, DEFAULT_MANIFEST};

/// File name of the per-project config file.
pub const LOCAL_CONFIG: &str = ".seedling.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How generation treats existing files and skipped merges.
    pub generation: GenerationConfig,
    /// Shared document names inside the project.
    pub project: ProjectConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Fail the run when a step records a recoverable error.
    pub strict: bool,
    /// Replace generated files that already exist.
    pub overwrite: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub manifest: String,
    pub compose: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            manifest: DEFAULT_MANIFEST.into(),
            compose: DEFAULT_COMPOSE.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering files and environment over defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it the platform config file is used if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let primary = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        let config = Config::builder()
            .add_source(defaults)
            .add_source(primary)
            .add_source(File::from(Path::new(LOCAL_CONFIG)).required(false))
            .add_source(
                Environment::with_prefix("SEEDLING")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration sources")?;

        let loaded: Self = config
            .try_deserialize()
            .context("Configuration has invalid values")?;
        debug!(?loaded, "configuration loaded");
        Ok(loaded)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.seedling.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "seedling", "seedling")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }
}
