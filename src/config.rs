//! Run configuration.
//!
//! One immutable [`Config`] is constructed at startup and passed by
//! reference to every component; nothing mutates it afterwards.
//!
//! Values layer, lowest to highest priority:
//! - built-in defaults
//! - user config: `<config-dir>/letterbox-detect/config.toml`
//! - project-local: `./letterbox.toml` (replaces the user file when present)
//! - CLI flags (merged per-value via [`Config::merge_with_cli`])
//!
//! Missing files are silently ignored; unreadable or invalid files and
//! out-of-range values are fatal before any video is touched.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

// ============================================================
// Constants
// ============================================================

/// Default darkness threshold handed to the bbox filter
const DEFAULT_MAX_LUMINANCE: u32 = 32;

/// Default fraction of peak incidence defining an active slot
const DEFAULT_MIN_INCIDENCE: f64 = 0.15;

/// Default declared maximum frame width
const DEFAULT_MAX_WIDTH: u32 = 1920;

/// Default declared maximum frame height
const DEFAULT_MAX_HEIGHT: u32 = 1080;

/// Project-local config filename
const LOCAL_CONFIG: &str = "letterbox.toml";

// ============================================================
// Error Types
// ============================================================

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("min-incidence must be within 0..=1, got {0}")]
    MinIncidenceOutOfRange(f64),

    #[error("max-{0} must be greater than zero")]
    ZeroDimension(&'static str),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

// ============================================================
// Configuration
// ============================================================

/// Immutable per-run configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Darkness threshold passed to the external sampler (bbox min_val)
    pub max_luminance: u32,
    /// Fraction of peak incidence defining an active slot (0..=1)
    pub min_incidence: f64,
    /// Crop width alignment factor; 0 disables rounding
    pub width_factor: u32,
    /// Crop height alignment factor; 0 disables rounding
    pub height_factor: u32,
    /// Declared maximum frame width (histogram domain)
    pub max_width: u32,
    /// Declared maximum frame height (histogram domain)
    pub max_height: u32,
    /// Write per-axis histogram bar charts next to each video
    pub save_histogram: bool,
    /// Emit the crop= descriptor
    pub crop: bool,
    /// Emit the drawbox= descriptor
    pub drawbox: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_luminance: DEFAULT_MAX_LUMINANCE,
            min_incidence: DEFAULT_MIN_INCIDENCE,
            width_factor: 0,
            height_factor: 0,
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            save_histogram: false,
            crop: false,
            drawbox: false,
        }
    }
}

impl Config {
    /// Load the layered file configuration (user dir, then project-local).
    pub fn load() -> Result<Self> {
        let mut config = Config::default();
        if let Some(user_path) = user_config_path() {
            if user_path.exists() {
                debug!(path = %user_path.display(), "loading user config");
                config = Self::load_from_path(&user_path)?;
            }
        }
        let local = Path::new(LOCAL_CONFIG);
        if local.exists() {
            debug!(path = %local.display(), "loading project config");
            config = Self::load_from_path(local)?;
        }
        Ok(config)
    }

    /// Load configuration from an explicit TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply CLI overrides (highest priority) and validate the result.
    pub fn merge_with_cli(mut self, overrides: &CliOverrides) -> Result<Self> {
        if let Some(v) = overrides.max_luminance {
            self.max_luminance = v;
        }
        if let Some(v) = overrides.min_incidence {
            self.min_incidence = v;
        }
        if let Some(v) = overrides.width_factor {
            self.width_factor = v;
        }
        if let Some(v) = overrides.height_factor {
            self.height_factor = v;
        }
        if let Some(v) = overrides.max_width {
            self.max_width = v;
        }
        if let Some(v) = overrides.max_height {
            self.max_height = v;
        }
        self.save_histogram |= overrides.save_histogram;
        self.crop |= overrides.crop;
        self.drawbox |= overrides.drawbox;
        self.validate()?;
        Ok(self)
    }

    /// Validate value ranges; any violation is fatal at startup.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_incidence) {
            return Err(ConfigError::MinIncidenceOutOfRange(self.min_incidence));
        }
        if self.max_width == 0 {
            return Err(ConfigError::ZeroDimension("width"));
        }
        if self.max_height == 0 {
            return Err(ConfigError::ZeroDimension("height"));
        }
        Ok(())
    }
}

/// CLI-supplied overrides; `None` leaves the layered value in place.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub max_luminance: Option<u32>,
    pub min_incidence: Option<f64>,
    pub width_factor: Option<u32>,
    pub height_factor: Option<u32>,
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    pub save_histogram: bool,
    pub crop: bool,
    pub drawbox: bool,
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("letterbox-detect/config.toml"))
}
