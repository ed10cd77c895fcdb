use std::path::Path;

use serde::Deserialize;

use crate::brush::{BrushColor, BrushConfig, DEFAULT_RADIUS, RADIUS_STEP};
use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming a JSON file to read the configuration from
pub const CONFIG_ENV_VAR: &str = "CHALKBOARD_CONFIG";

/// Startup settings for a drawing session.
///
/// Every field has a default, so a config file only needs the keys it
/// wants to override:
///
/// ```json
/// { "brush": { "color": "blue", "radius": 10 } }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ChalkboardConfig {
    pub brush: BrushSettings,
    pub notifications: NotificationSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    /// Color selected when the session starts
    pub color: BrushColor,
    /// Radius of the brush when the session starts
    pub radius: u32,
    /// How much `[` and `]` shrink or grow the brush
    pub step: u32,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            color: BrushColor::default(),
            radius: DEFAULT_RADIUS,
            step: RADIUS_STEP,
        }
    }
}

impl BrushSettings {
    pub fn initial_brush(&self) -> BrushConfig {
        BrushConfig::new(self.color, self.radius)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// How long a toast stays on screen
    pub duration_ms: u64,
    /// Whether the starting brush color is announced like a color change
    pub announce_initial_color: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            announce_initial_color: true,
        }
    }
}

impl ChalkboardConfig {
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], falling back to the
    /// defaults when the variable is unset or the file is unusable.
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::load_from(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.brush.step == 0 {
            return Err(ConfigError::Invalid("brush.step must be positive".into()));
        }
        if self.brush.radius < self.brush.step {
            return Err(ConfigError::Invalid(format!(
                "brush.radius ({}) must be at least brush.step ({})",
                self.brush.radius, self.brush.step
            )));
        }
        if self.notifications.duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "notifications.duration_ms must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ChalkboardConfig::default();
        assert_eq!(config.brush.color, BrushColor::White);
        assert_eq!(config.brush.radius, 5);
        assert_eq!(config.brush.step, 5);
        assert_eq!(config.notifications.duration_ms, 2000);
        assert!(config.notifications.announce_initial_color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config =
            ChalkboardConfig::from_json_str(r#"{ "brush": { "color": "blue", "radius": 10 } }"#)
                .unwrap();
        assert_eq!(config.brush.color, BrushColor::Blue);
        assert_eq!(config.brush.radius, 10);
        assert_eq!(config.brush.step, 5);
        assert_eq!(config.notifications, NotificationSettings::default());
    }

    #[test]
    fn test_unknown_color_rejected() {
        let result = ChalkboardConfig::from_json_str(r#"{ "brush": { "color": "teal" } }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_radius_below_step_rejected() {
        let result =
            ChalkboardConfig::from_json_str(r#"{ "brush": { "radius": 2, "step": 5 } }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let result =
            ChalkboardConfig::from_json_str(r#"{ "notifications": { "duration_ms": 0 } }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "notifications": {{ "announce_initial_color": false }} }}"#
        )
        .unwrap();

        let config = ChalkboardConfig::load_from(file.path()).unwrap();
        assert!(!config.notifications.announce_initial_color);
        assert_eq!(config.brush, BrushSettings::default());
    }

    #[test]
    fn test_load_missing_file() {
        let result = ChalkboardConfig::load_from(Path::new("/nonexistent/chalkboard.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
