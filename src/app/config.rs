//! Configuration Management
//!
//! Ambient settings only. The decision thresholds (the 1.3s timing gate, the
//! aspect tolerances, the minimum shape area) are fixed policy constants in
//! the analysis layer and are deliberately not configurable here.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Stroke intake settings
    pub capture: CaptureConfig,
    /// CLI output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Stroke intake configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Maximum number of points accepted from a stroke file
    pub max_points: usize,
}

/// CLI output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit verdicts as JSON instead of plain text
    pub json: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self { max_points: 10_000 }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { json: false }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.capture.max_points == 0 {
            return Err(crate::Error::Config(
                "max_points must be > 0".to_string(),
            ));
        }
        if self.capture.max_points > 1_000_000 {
            return Err(crate::Error::Config(format!(
                "max_points must be <= 1000000, got {}",
                self.capture.max_points
            )));
        }
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from the default location, falling back to defaults when
    /// no file exists.
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".sketch_judge").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}
