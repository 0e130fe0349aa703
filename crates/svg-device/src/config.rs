//! Device configuration (device.toml) parsing.
//!
//! Hosts that drive the device from a config file can load the open-time
//! settings and output target from a small TOML document:
//!
//! ```toml
//! [device]
//! width = 720.0
//! height = 720.0
//! output = "plot.svg"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::canvas::DeviceSettings;

/// Errors that can occur when loading a device configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// A parsed device configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    /// The `[device]` section.
    pub device: DeviceSection,
}

/// The `[device]` section of the configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceSection {
    /// Canvas width in device units (required).
    pub width: f64,

    /// Canvas height in device units (required).
    pub height: f64,

    /// Where the finished document is written (required).
    pub output: PathBuf,
}

impl DeviceConfig {
    /// Load a configuration from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_owned(),
            source: e,
        })?;

        Self::from_str(&content, path)
    }

    /// Parse a configuration from a string.
    pub fn from_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })
    }

    /// Split into the open-time settings and the output target.
    pub fn into_parts(self) -> (DeviceSettings, PathBuf) {
        (
            DeviceSettings::new(self.device.width, self.device.height),
            self.device.output,
        )
    }
}
