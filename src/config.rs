//! Portal configuration.
//!
//! Handles loading, validating, and merging `portal.toml`. Stock defaults are
//! serialized to a TOML table and the user file is merged on top, so a config
//! file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Contraloría General de Cuentas"
//!
//! [content]
//! # source = "content"              # Directory of page JSON files (omit for built-in content)
//! fallback_page = "actualizacion-datos"
//! fetch_delay_ms = 500
//!
//! [theme]
//! accent = "#1d4ed8"                # Buttons, active filters, links
//! content_width = "80rem"
//! grid_gap = "1.5rem"
//! radius = "0.75rem"
//!
//! [colors.light]
//! background = "#f8fafc"
//! surface = "#ffffff"
//! text = "#0f172a"
//! text_muted = "#64748b"
//! border = "#e2e8f0"
//!
//! [colors.dark]
//! background = "#0b1120"
//! surface = "#111827"
//! text = "#e2e8f0"
//! text_muted = "#94a3b8"
//! border = "#1f2937"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::routes;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "portal.toml";

const MAX_FETCH_DELAY_MS: u64 = 60_000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Portal configuration loaded from `portal.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub content: ContentConfig,
    pub theme: ThemeConfig,
    pub colors: ColorConfig,
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation("site.title must not be empty".into()));
        }
        if !routes::is_valid_segment(&self.content.fallback_page) {
            return Err(ConfigError::Validation(format!(
                "content.fallback_page '{}' is not a valid page id",
                self.content.fallback_page
            )));
        }
        if self.content.fetch_delay_ms > MAX_FETCH_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "content.fetch_delay_ms must be at most {MAX_FETCH_DELAY_MS}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Shown in the header and every `<title>`.
    pub title: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Contraloría General de Cuentas".to_string(),
        }
    }
}

/// Where page content comes from and how it is served.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// Directory of page JSON files. `None` serves the built-in content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Page shown when a route has no content of its own.
    pub fallback_page: String,
    /// Artificial latency applied to every store read.
    pub fetch_delay_ms: u64,
}

impl ContentConfig {
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: None,
            fallback_page: "actualizacion-datos".to_string(),
            fetch_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub accent: String,
    /// Maximum width of the main column (CSS value).
    pub content_width: String,
    /// Gap between cards in the 12-column grid (CSS value).
    pub grid_gap: String,
    pub radius: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#1d4ed8".to_string(),
            content_width: "80rem".to_string(),
            grid_gap: "1.5rem".to_string(),
            radius: "0.75rem".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    /// Card and modal background.
    pub surface: String,
    pub text: String,
    /// Descriptions, dates, counters.
    pub text_muted: String,
    pub border: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f8fafc".to_string(),
            surface: "#ffffff".to_string(),
            text: "#0f172a".to_string(),
            text_muted: "#64748b".to_string(),
            border: "#e2e8f0".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0b1120".to_string(),
            surface: "#111827".to_string(),
            text: "#e2e8f0".to_string(),
            text_muted: "#94a3b8".to_string(),
            border: "#1f2937".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Stock defaults as a `toml::Value::Table`, the base layer for merging.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
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

/// Read a config file as a raw TOML value. A missing file is `Ok(None)`.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto `base`, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the portal config.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] in the
/// working directory is used if present, stock defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let overlay = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            Some(toml::from_str::<toml::Value>(&content)?)
        }
        None => load_raw_config(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    resolve_config(stock_defaults_value(), overlay)
}

/// Fully commented stock `portal.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Civic Portal Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

[site]
# Shown in the page header and in every <title>.
title = "Contraloría General de Cuentas"

# ---------------------------------------------------------------------------
# Content store
# ---------------------------------------------------------------------------
[content]
# Directory of page JSON files, one page per file. Nested directories are
# walked too. Omit to serve the content compiled into the binary.
# source = "content"

# Page shown when a route has no content of its own.
fallback_page = "actualizacion-datos"

# Artificial latency applied to every store read, in milliseconds.
fetch_delay_ms = 500

# ---------------------------------------------------------------------------
# Theme / layout
# ---------------------------------------------------------------------------
[theme]
# Buttons, active filters and links.
accent = "#1d4ed8"

# Maximum width of the main column (CSS value).
content_width = "80rem"

# Gap between cards in the 12-column grid (CSS value).
grid_gap = "1.5rem"

# Corner radius of cards and modals (CSS value).
radius = "0.75rem"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#f8fafc"
surface = "#ffffff"
text = "#0f172a"
text_muted = "#64748b"    # Descriptions, dates, counters
border = "#e2e8f0"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0b1120"
surface = "#111827"
text = "#e2e8f0"
text_muted = "#94a3b8"
border = "#1f2937"
"##
}

/// CSS custom properties for the theme and both color schemes.
pub fn generate_theme_css(config: &SiteConfig) -> String {
    let theme = &config.theme;
    let light = &config.colors.light;
    let dark = &config.colors.dark;
    format!(
        r#":root {{
    --accent: {accent};
    --content-width: {content_width};
    --grid-gap: {grid_gap};
    --radius: {radius};
    --color-bg: {light_bg};
    --color-surface: {light_surface};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-surface: {dark_surface};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
    }}
}}"#,
        accent = theme.accent,
        content_width = theme.content_width,
        grid_gap = theme.grid_gap,
        radius = theme.radius,
        light_bg = light.background,
        light_surface = light.surface,
        light_text = light.text,
        light_text_muted = light.text_muted,
        light_border = light.border,
        dark_bg = dark.background,
        dark_surface = dark.surface,
        dark_text = dark.text,
        dark_text_muted = dark.text_muted,
        dark_border = dark.border,
    )
}
