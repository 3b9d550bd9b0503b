use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default location of the configuration file, relative to the working
/// directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// User-interface appearance settings exposed in `[ui]` config section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Named colour theme.  Recognised values: `catppuccin-mocha` (default),
    /// `tokyo-night`, `nord`.
    pub theme: String,
    /// Open the highlighted suggestion in the system browser when the user
    /// presses Enter on the suggestions screen.  When `false` the link is
    /// only shown in the footer.
    pub open_links: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "catppuccin-mocha".to_string(),
            open_links: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub log_level: String,
    /// Directory for the daily rolling log file.  The terminal UI owns
    /// stdout, so logs never go to the console.
    pub log_dir: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: ".giftwise/logs".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_from_with(path, |key| env::var(key).ok())
    }

    /// Like [`AppConfig::load_from`], reading overrides through `lookup`
    /// instead of the process environment.
    pub fn load_from_with(
        path: impl AsRef<Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::default();
        if let Ok(raw) = fs::read_to_string(path) {
            config = toml::from_str(&raw)
                .with_context(|| format!("invalid config file {}", path.display()))?;
        }

        if let Some(theme) = lookup("GIFTWISE_THEME").filter(|value| !value.is_empty()) {
            config.ui.theme = theme;
        }

        if let Some(level) = lookup("GIFTWISE_LOG_LEVEL").filter(|value| !value.is_empty()) {
            config.telemetry.log_level = level;
        }

        Ok(config)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let rendered = self.to_toml()?;
        fs::write(path, rendered)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
