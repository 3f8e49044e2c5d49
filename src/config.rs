//! CLI configuration module.
//!
//! Handles loading and validating `roomprep.toml`. Stock defaults are
//! overridden by whatever the file specifies; command-line flags override
//! both. The library API never reads config: every operation takes its
//! settings as arguments.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [compress]
//! max_dimension = 1024      # Longest edge of compressed output, in pixels
//! quality = 0.8             # JPEG quality as a fraction in (0, 1]
//! allow_upscale = false     # Enlarge images smaller than max_dimension
//!
//! [processing]
//! max_processes = 4         # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{CompressOptions, DEFAULT_MAX_DIMENSION, DEFAULT_QUALITY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `roomprep.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Defaults for the `compress` command.
    pub compress: CompressConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl Config {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.compress.to_options().map(|_| ())
    }
}

/// Compression defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompressConfig {
    pub max_dimension: u32,
    pub quality: f32,
    pub allow_upscale: bool,
}

impl Default for CompressConfig {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            quality: DEFAULT_QUALITY,
            allow_upscale: false,
        }
    }
}

impl CompressConfig {
    pub fn to_options(&self) -> Result<CompressOptions, ConfigError> {
        self.with_overrides(None, None, None)
    }

    /// Build options from these defaults, letting any `Some` flag win.
    pub fn with_overrides(
        &self,
        max_dimension: Option<u32>,
        quality: Option<f32>,
        allow_upscale: Option<bool>,
    ) -> Result<CompressOptions, ConfigError> {
        CompressOptions::new(
            max_dimension.unwrap_or(self.max_dimension),
            quality.unwrap_or(self.quality),
        )
        .map(|opts| opts.allow_upscale(allow_upscale.unwrap_or(self.allow_upscale)))
        .map_err(|e| ConfigError::Validation(format!("compress: {e}")))
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel compression workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)`, and at least one
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Parse config text. Omitted keys keep their defaults; unknown keys and
/// out-of-range values are errors.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from the given file, falling back to stock defaults when absent.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(e.into()),
    }
}

/// Returns a fully-commented stock `roomprep.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# roomprep configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Command-line flags override them.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Compression
# ---------------------------------------------------------------------------
[compress]
# Longest edge of the compressed image, in pixels.
max_dimension = 1024

# JPEG quality as a fraction: 0.0 (exclusive) to 1.0.
quality = 0.8

# Enlarge images smaller than max_dimension. Off by default so that
# re-compressing an already compressed image never changes its size.
allow_upscale = false

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel compression workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
