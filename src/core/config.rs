//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.flashdeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::card::Language;
use crate::core::gesture::GestureConfig;
use crate::core::loader::DataSource;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FlashdeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gesture: GestureSection,
    #[serde(default)]
    pub images: ImagesConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub data_source: Option<String>,
    pub front_language: Option<Language>,
    pub back_language: Option<Language>,
    pub shuffle: Option<bool>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GestureSection {
    pub min_swipe_distance: Option<f64>,
    pub max_vertical_distance: Option<f64>,
    pub move_suppress_threshold: Option<f64>,
    /// Approximate pixel width of one terminal cell.
    pub cell_width: Option<f64>,
    /// Approximate pixel height of one terminal cell.
    pub cell_height: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ImagesConfig {
    pub enabled: Option<bool>,
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DATA_SOURCE: &str = "data/phrases.json";
pub const DEFAULT_FRONT_LANGUAGE: Language = Language::Hindi;
pub const DEFAULT_BACK_LANGUAGE: Language = Language::English;
pub const DEFAULT_CELL_WIDTH: f64 = 8.0;
pub const DEFAULT_CELL_HEIGHT: f64 = 16.0;
pub const DEFAULT_IMAGE_TIMEOUT_MS: u64 = 5000;

// ============================================================================
// CLI overrides
// ============================================================================

/// Values given on the command line (None / false = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub data: Option<String>,
    pub front: Option<Language>,
    pub back: Option<Language>,
    pub seed: Option<u64>,
    pub no_shuffle: bool,
    pub no_images: bool,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_source: DataSource,
    pub front: Language,
    pub back: Language,
    pub shuffle: bool,
    pub seed: Option<u64>,
    pub gesture: GestureConfig,
    pub cell_width: f64,
    pub cell_height: f64,
    pub images_enabled: bool,
    pub image_base_url: Option<String>,
    pub image_timeout: Duration,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.flashdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".flashdeck").join("config.toml"))
}

/// Load config from `~/.flashdeck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FlashdeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FlashdeckConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FlashdeckConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FlashdeckConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: FlashdeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Flashdeck Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_source = "data/phrases.json"  # Path or http(s) URL; or set FLASHDECK_DATA
# front_language = "hi"              # "hi", "en" or "fi"
# back_language = "en"
# shuffle = true                     # Shuffle once when the deck loads
# seed = 42                          # Fixed shuffle order

# [gesture]
# min_swipe_distance = 50.0          # Horizontal travel needed for a swipe (px)
# max_vertical_distance = 100.0      # Swipes must stay below this vertically (px)
# move_suppress_threshold = 10.0     # Drags past this are not clicks (px)
# cell_width = 8.0                   # Pixels per terminal column
# cell_height = 16.0                 # Pixels per terminal row

# [images]
# enabled = true                     # Show an illustration or emoji per card
# base_url = "http://localhost:8080/images"  # Or set FLASHDECK_IMAGE_URL
# timeout_ms = 5000
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FlashdeckConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Data source: CLI → env → config → default
    let data_source = cli
        .data
        .clone()
        .or_else(|| std::env::var("FLASHDECK_DATA").ok())
        .or_else(|| config.general.data_source.clone())
        .unwrap_or_else(|| DEFAULT_DATA_SOURCE.to_string());

    // Image service: env → config
    let image_base_url = std::env::var("FLASHDECK_IMAGE_URL")
        .ok()
        .or_else(|| config.images.base_url.clone())
        .filter(|url| !url.trim().is_empty());

    let defaults = GestureConfig::default();
    let gesture = GestureConfig {
        min_swipe_distance: config
            .gesture
            .min_swipe_distance
            .unwrap_or(defaults.min_swipe_distance),
        max_vertical_distance: config
            .gesture
            .max_vertical_distance
            .unwrap_or(defaults.max_vertical_distance),
        move_suppress_threshold: config
            .gesture
            .move_suppress_threshold
            .unwrap_or(defaults.move_suppress_threshold),
    };

    ResolvedConfig {
        data_source: DataSource::parse(&data_source),
        front: cli
            .front
            .or(config.general.front_language)
            .unwrap_or(DEFAULT_FRONT_LANGUAGE),
        back: cli
            .back
            .or(config.general.back_language)
            .unwrap_or(DEFAULT_BACK_LANGUAGE),
        shuffle: !cli.no_shuffle && config.general.shuffle.unwrap_or(true),
        seed: cli.seed.or(config.general.seed),
        gesture,
        cell_width: positive_or(config.gesture.cell_width, DEFAULT_CELL_WIDTH),
        cell_height: positive_or(config.gesture.cell_height, DEFAULT_CELL_HEIGHT),
        images_enabled: !cli.no_images && config.images.enabled.unwrap_or(true),
        image_base_url,
        image_timeout: Duration::from_millis(
            config.images.timeout_ms.unwrap_or(DEFAULT_IMAGE_TIMEOUT_MS),
        ),
    }
}

/// Cell sizes scale mouse coordinates, so zero or negative values fall back.
fn positive_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        Some(v) => {
            warn!("Ignoring invalid cell size {}, using {}", v, default);
            default
        }
        None => default,
    }
}
