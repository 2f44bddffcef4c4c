//! Configuration system
//!
//! Overlay behaviour constants, native loader naming and the GUI style table,
//! loadable from TOML or RON.

pub mod style;

pub use serde::{Deserialize, Serialize};
pub use style::{StyleColor, StyleConfig, StyleDir};

use crate::foundation::time::FALLBACK_FRAME_TIME;

/// Raw wheel counter units per notch reported by the host
pub const DEFAULT_WHEEL_DELTA: f32 = 120.0;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Format follows the extension
        let config: Self = if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges after loading
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Value out of range
    #[error("Invalid value: {0}")]
    Invalid(String),
}

/// Top-level overlay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Delta time fed to the GUI when the host reports a non-positive frame time
    pub fallback_frame_time: f32,
    /// Raw wheel counter units per notch
    pub wheel_delta: f32,
    /// Position in the host's draw order; the overlay draws after scene content
    pub draw_order: i32,
    /// Native backend extraction settings
    pub native: NativeLoaderConfig,
    /// GUI style table applied at initialization
    pub style: StyleConfig,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            fallback_frame_time: FALLBACK_FRAME_TIME,
            wheel_delta: DEFAULT_WHEEL_DELTA,
            draw_order: i32::MAX,
            native: NativeLoaderConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

impl Config for OverlayConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("fallback_frame_time", self.fallback_frame_time), ("wheel_delta", self.wheel_delta)] {
            if !is_positive(value) {
                return Err(ConfigError::Invalid(format!("{name} must be positive and finite, got {value}")));
            }
        }
        Ok(())
    }
}

/// True for finite values above zero
pub(crate) fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Naming used when extracting the embedded native GUI backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeLoaderConfig {
    /// Prefix of the embedded resource names, joined as `{prefix}.{platform}.{library}`
    pub resource_prefix: String,
    /// Prefix of the temporary directory the library is extracted into
    pub temp_dir_prefix: String,
}

impl Default for NativeLoaderConfig {
    fn default() -> Self {
        Self {
            resource_prefix: "imgui_overlay.bin".to_string(),
            temp_dir_prefix: "imgui_overlay".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_frame_constants() {
        let config = OverlayConfig::default();
        assert_eq!(config.fallback_frame_time, 1.0 / 60.0);
        assert_eq!(config.wheel_delta, 120.0);
        assert_eq!(config.draw_order, i32::MAX);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: OverlayConfig = toml::from_str("wheel_delta = 60.0\n").unwrap();
        assert_eq!(config.wheel_delta, 60.0);
        assert_eq!(config.draw_order, i32::MAX);
        assert_eq!(config.native, NativeLoaderConfig::default());
    }

    #[test]
    fn test_save_and_load_ron() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.ron");
        let path = path.to_str().unwrap();

        let mut config = OverlayConfig::default();
        config.draw_order = 10;
        config.style.window_rounding = 4.0;
        config.save_to_file(path).unwrap();

        let loaded = OverlayConfig::load_from_file(path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_zero_fallback_frame_time_is_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.toml");
        std::fs::write(&path, "fallback_frame_time = 0.0\n").unwrap();

        let result = OverlayConfig::load_from_file(path.to_str().unwrap());
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_bad_wheel_delta() {
        let mut config = OverlayConfig::default();
        assert!(config.validate().is_ok());

        for wheel_delta in [0.0, -120.0, f32::NAN, f32::INFINITY] {
            config.wheel_delta = wheel_delta;
            assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        }
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let result = OverlayConfig::default().save_to_file("overlay.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
