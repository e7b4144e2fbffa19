//! User configuration.
//!
//! Loaded from `$CONFIG_DIR/glyphline/config.toml`, or from the path in
//! `GLYPHLINE_CONFIG` when set. A missing file means defaults.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::align::Alignment;
use crate::console::{parse_color, Console, HeaderSettings};
use crate::glyph::StyleVariant;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "GLYPHLINE_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub style: StyleConfig,
    pub color: ColorConfig,
    pub header: HeaderConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Style used by `print` when none is given
    pub default: StyleVariant,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Foreground color name, e.g. "cyan" or "dark_red"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub alignment: Alignment,
    pub show: bool,
    pub separator: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        let defaults = HeaderSettings::default();
        Self {
            alignment: defaults.alignment,
            show: defaults.show,
            separator: defaults.separator,
        }
    }
}

impl From<&HeaderConfig> for HeaderSettings {
    fn from(config: &HeaderConfig) -> Self {
        Self {
            show: config.show,
            alignment: config.alignment,
            separator: config.separator.clone(),
        }
    }
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("glyphline").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path, falling back to defaults when missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Write the config to its default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }

    /// Serialize as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Build a console on `out` with the configured style, color and header
    /// layout. `use_color` disables the foreground color when false.
    pub fn console<W: Write>(&self, out: W, use_color: bool) -> Result<Console<W>> {
        let mut console = Console::with_style(out, self.style.default);
        console.set_header(HeaderSettings::from(&self.header));

        if use_color {
            if let Some(name) = &self.color.foreground {
                let color = parse_color(name).map_err(|e| {
                    tracing::warn!(color = %name, "rejected configured color");
                    e
                })?;
                console.set_color(Some(color));
            }
        }
        Ok(console)
    }
}
