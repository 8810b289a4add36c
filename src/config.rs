//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treemark/treemark.toml`
//! 3. Local config: `<dir>/.treemark.toml`
//! 4. Environment variables: `TREEMARK_*` prefix, `__` between sections
//!    (e.g. `TREEMARK_MARKUP__INDENT=4`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Default element nesting limit.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Markup reading/writing options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MarkupSettings {
    /// File extension appended to output names lacking it (without the dot)
    pub extension: String,
    /// Spaces per nesting level when writing; 0 writes compact output
    pub indent: usize,
    /// Trim text and drop whitespace-only text while reading
    pub trim_text: bool,
    /// Emit an XML declaration when writing
    pub declaration: bool,
    /// Deepest element level accepted when reading or produced when writing
    /// (document element at level 0)
    pub max_depth: usize,
}

impl Default for MarkupSettings {
    fn default() -> Self {
        Self {
            extension: "xml".into(),
            indent: 2,
            trim_text: true,
            declaration: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Unified configuration for treemark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Log a rendering of every tree read or written
    pub verbose: bool,
    /// Markup options
    pub markup: MarkupSettings,
}

/// Get the XDG config directory for treemark.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treemark").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treemark.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".treemark.toml")
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.treemark.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("verbose", defaults.verbose)
            .map_err(config_err)?
            .set_default("markup.extension", defaults.markup.extension.clone())
            .map_err(config_err)?
            .set_default("markup.indent", defaults.markup.indent as i64)
            .map_err(config_err)?
            .set_default("markup.trim_text", defaults.markup.trim_text)
            .map_err(config_err)?
            .set_default("markup.declaration", defaults.markup.declaration)
            .map_err(config_err)?
            .set_default("markup.max_depth", defaults.markup.max_depth as i64)
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                builder = builder.add_source(
                    File::from(global_path)
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("load: local config {}", local_path.display());
                builder = builder.add_source(File::from(local_path).format(FileFormat::Toml));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("TREEMARK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.normalize();
        Ok(settings)
    }

    /// Strip a leading dot from the extension so both `xml` and `.xml` work.
    fn normalize(&mut self) {
        if let Some(stripped) = self.markup.extension.strip_prefix('.') {
            self.markup.extension = stripped.to_string();
        }
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("render settings: {}", e),
        })
    }
}
