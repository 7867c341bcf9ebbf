//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/cozydash/cozydash.toml`
//! 3. Explicit config file (`--config <path>`)
//! 4. Environment variables: `COZYDASH_*` prefix
//!
//! Settings are read once at start-up and never reloaded.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ApplicationError;
use crate::domain::APP_THEME;

/// Unified configuration for cozydash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Active theme name. Kept as text: an unregistered name is not a load
    /// error, it resolves to the default palette later.
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: APP_THEME.as_str().to_string(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
///
/// `theme` accepts any TOML value so a mistyped selection cannot stop start-up.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub theme: Option<toml::Value>,
}

impl RawSettings {
    /// Theme selection as text. Non-string values keep their TOML rendering
    /// and so resolve like any other unregistered name.
    pub fn theme_name(&self) -> Option<String> {
        match self.theme.as_ref()? {
            toml::Value::String(name) => Some(name.clone()),
            other => {
                warn!("theme should be a string, got `{}`", other);
                Some(other.to_string())
            }
        }
    }
}

/// Get the XDG config directory for cozydash.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cozydash").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("cozydash.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            theme: overlay.theme_name().unwrap_or_else(|| self.theme.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist if given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path();
        Self::load_from(global.as_deref(), config_file, None)
    }

    /// Load with every source spelled out.
    ///
    /// `env` replaces the process environment when `Some` (used by tests).
    pub fn load_from(
        global: Option<&Path>,
        config_file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, if present
        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        // 3. Explicit config file (missing is an error, the user asked for it)
        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("loading config file: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current, env)?;

        Ok(current)
    }

    /// Apply COZYDASH_* environment variables as explicit overrides.
    fn apply_env_overrides(
        mut settings: Self,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let builder = Config::builder().add_source(
            Environment::with_prefix("COZYDASH")
                .prefix_separator("_")
                .source(env),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("theme") {
            debug!("theme overridden by environment: {}", val);
            settings.theme = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# cozydash configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/cozydash/cozydash.toml
#   File:   --config <path>
#   Env:    COZYDASH_* environment variables (explicit overrides)

# Active theme: default | twitter | material | bootstrap | amazon | dark
# Unknown names fall back to "default".
# theme = "dark"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
