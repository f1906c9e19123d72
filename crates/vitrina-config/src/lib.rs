//! Showcase configuration for the vitrina kiosk.
//!
//! TOML file + `VITRINA_`-prefixed environment variables, merged over
//! built-in defaults with figment. Everything here is supplied once at
//! startup and immutable thereafter — branding, contact handles, timing
//! intervals, and the accent color token.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config struct ───────────────────────────────────────────────────

/// Static showcase configuration, shared by both kiosk modes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShowcaseConfig {
    /// Brand name shown in headers and prefilled messages.
    #[serde(default = "default_brand")]
    pub brand: String,

    /// WhatsApp handle (international number, digits only).
    #[serde(default = "default_whatsapp")]
    pub whatsapp: String,

    /// Instagram handle, displayed as-is.
    #[serde(default = "default_instagram")]
    pub instagram: String,

    /// QR image reference, displayed as-is — no validation.
    #[serde(default = "default_qr_src")]
    pub qr_src: String,

    /// TV mode rotation interval in milliseconds.
    #[serde(default = "default_slide_ms")]
    pub slide_ms: u64,

    /// Tablet mode autoplay interval in milliseconds.
    #[serde(default = "default_auto_slide_ms")]
    pub auto_slide_ms: u64,

    /// Accent color as a hex token, e.g. "#6c5dd3".
    #[serde(default = "default_accent")]
    pub accent: String,

    /// Products JSON file. Absent → built-in sample catalog.
    pub catalog: Option<PathBuf>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            whatsapp: default_whatsapp(),
            instagram: default_instagram(),
            qr_src: default_qr_src(),
            slide_ms: default_slide_ms(),
            auto_slide_ms: default_auto_slide_ms(),
            accent: default_accent(),
            catalog: None,
        }
    }
}

fn default_brand() -> String {
    "Mi Emprendimiento".into()
}
fn default_whatsapp() -> String {
    "573001112233".into()
}
fn default_instagram() -> String {
    "@mi_marca".into()
}
fn default_qr_src() -> String {
    "/qr-placeholder.svg".into()
}
fn default_slide_ms() -> u64 {
    7000
}
fn default_auto_slide_ms() -> u64 {
    10_000
}
fn default_accent() -> String {
    "#6c5dd3".into()
}

impl ShowcaseConfig {
    pub fn slide_interval(&self) -> Duration {
        Duration::from_millis(self.slide_ms)
    }

    pub fn auto_slide_interval(&self) -> Duration {
        Duration::from_millis(self.auto_slide_ms)
    }

    /// Parse the accent token into an RGB triple.
    pub fn accent_rgb(&self) -> Result<(u8, u8, u8), ConfigError> {
        parse_hex_color(&self.accent).ok_or_else(|| ConfigError::Validation {
            field: "accent".into(),
            reason: format!("expected #rrggbb, got '{}'", self.accent),
        })
    }
}

/// Parse "#rrggbb" (leading '#' optional) into an RGB triple.
pub fn parse_hex_color(token: &str) -> Option<(u8, u8, u8)> {
    let hex = token.strip_prefix('#').unwrap_or(token);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "vitrina", "vitrina").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("vitrina");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load configuration from an explicit file (or the canonical path) plus
/// `VITRINA_`-prefixed environment variables.
pub fn load_config(path: Option<&std::path::Path>) -> Result<ShowcaseConfig, ConfigError> {
    let path = path.map_or_else(config_path, std::path::Path::to_path_buf);

    let figment = Figment::new()
        .merge(Serialized::defaults(ShowcaseConfig::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("VITRINA_"));

    let config: ShowcaseConfig = figment.extract()?;
    Ok(config)
}

/// Load config, returning the defaults if the file doesn't exist or is
/// unreadable — the kiosk degrades silently.
pub fn load_config_or_default(path: Option<&std::path::Path>) -> ShowcaseConfig {
    load_config(path).unwrap_or_default()
}

/// Serialize config to TOML and write it to the canonical config path.
pub fn save_config(cfg: &ShowcaseConfig) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_the_reference_showcase() {
        let cfg = ShowcaseConfig::default();
        assert_eq!(cfg.brand, "Mi Emprendimiento");
        assert_eq!(cfg.slide_ms, 7000);
        assert_eq!(cfg.auto_slide_ms, 10_000);
        assert_eq!(cfg.accent, "#6c5dd3");
        assert!(cfg.catalog.is_none());
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "brand = \"Dulce Rincón\"\nslide_ms = 5000\naccent = \"#ff6ac1\""
        )
        .unwrap();

        let cfg = load_config(Some(file.path())).unwrap();
        assert_eq!(cfg.brand, "Dulce Rincón");
        assert_eq!(cfg.slide_ms, 5000);
        // Untouched fields keep their defaults.
        assert_eq!(cfg.auto_slide_ms, 10_000);
        assert_eq!(cfg.accent_rgb().unwrap(), (0xff, 0x6a, 0xc1));
    }

    #[test]
    fn env_overrides_toml() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("vitrina.toml", "brand = \"From File\"")?;
            jail.set_env("VITRINA_BRAND", "From Env");

            let cfg = load_config(Some(std::path::Path::new("vitrina.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(cfg.brand, "From Env");
            Ok(())
        });
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load_config_or_default(Some(std::path::Path::new("/nonexistent/vitrina.toml")));
        assert_eq!(cfg.brand, "Mi Emprendimiento");
    }

    #[test]
    fn hex_color_parsing() {
        assert_eq!(parse_hex_color("#6c5dd3"), Some((0x6c, 0x5d, 0xd3)));
        assert_eq!(parse_hex_color("6c5dd3"), Some((0x6c, 0x5d, 0xd3)));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn bad_accent_is_a_validation_error() {
        let cfg = ShowcaseConfig {
            accent: "purple".into(),
            ..ShowcaseConfig::default()
        };
        assert!(matches!(
            cfg.accent_rgb(),
            Err(ConfigError::Validation { .. })
        ));
    }
}
