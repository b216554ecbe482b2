//! Game tuning loaded from JSON, with CLI overrides applied on top.
//!
//! Lookup order: explicit `--config` path, then `config.json` in the platform
//! config directory if it exists, then built-in defaults. Missing keys fall
//! back to their defaults, so a file may override a single value.

use super::constants::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config {}: {}", path.display(), source)
            }
            Self::Invalid { field, reason } => write!(f, "invalid config `{}`: {}", field, reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid { .. } => None,
        }
    }
}

/// Every tunable of the game loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Velocity added every tick (positive = downward).
    pub gravity: f64,
    /// Velocity set by a jump (must be negative).
    pub jump_impulse: f64,
    pub bird_x: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    pub rotation_step: f64,
    pub rotation_cap: f64,
    pub jump_tilt: f64,
    pub obstacle_width: f64,
    pub obstacle_gap: f64,
    /// Horizontal distance obstacles travel per tick.
    pub obstacle_step: f64,
    /// A new obstacle spawns once the last one is this far from the right edge.
    pub spawn_spacing: f64,
    pub gap_margin_top: f64,
    pub gap_margin_bottom: f64,
    pub max_field_width: f64,
    pub max_field_height: f64,
    pub viewport_padding: f64,
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            bird_x: BIRD_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            rotation_step: ROTATION_STEP,
            rotation_cap: ROTATION_CAP,
            jump_tilt: JUMP_TILT,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_gap: OBSTACLE_GAP,
            obstacle_step: OBSTACLE_STEP,
            spawn_spacing: SPAWN_SPACING,
            gap_margin_top: GAP_MARGIN_TOP,
            gap_margin_bottom: GAP_MARGIN_BOTTOM,
            max_field_width: MAX_FIELD_WIDTH,
            max_field_height: MAX_FIELD_HEIGHT,
            viewport_padding: VIEWPORT_PADDING,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Platform config file location (`~/.config/flapper/config.json` on Linux).
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "flapper").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from `path` if given, else from [`Self::default_path`] when that
    /// file exists, else defaults. The result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file without validating it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Smallest field that can still hold a bird and a gap placement.
    pub fn min_field_width(&self) -> f64 {
        self.bird_x + self.bird_width + self.obstacle_width
    }

    pub fn min_field_height(&self) -> f64 {
        self.gap_margin_top + self.gap_margin_bottom
    }

    /// Reject tunings that would break the loop's invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("gravity", self.gravity),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_gap", self.obstacle_gap),
            ("obstacle_step", self.obstacle_step),
            ("spawn_spacing", self.spawn_spacing),
            ("max_field_width", self.max_field_width),
            ("max_field_height", self.max_field_height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {}", value),
                });
            }
        }

        let non_negative = [
            ("bird_x", self.bird_x),
            ("rotation_step", self.rotation_step),
            ("gap_margin_top", self.gap_margin_top),
            ("viewport_padding", self.viewport_padding),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must not be negative, got {}", value),
                });
            }
        }

        if !(self.jump_impulse.is_finite() && self.jump_impulse < 0.0) {
            return Err(ConfigError::Invalid {
                field: "jump_impulse",
                reason: format!("must be negative (upward), got {}", self.jump_impulse),
            });
        }
        if !self.rotation_cap.is_finite() || !self.jump_tilt.is_finite() {
            return Err(ConfigError::Invalid {
                field: "rotation_cap",
                reason: "rotation values must be finite".to_string(),
            });
        }
        if !(self.gap_margin_bottom.is_finite() && self.gap_margin_bottom >= self.obstacle_gap) {
            return Err(ConfigError::Invalid {
                field: "gap_margin_bottom",
                reason: format!(
                    "must be at least obstacle_gap ({}), got {}",
                    self.obstacle_gap, self.gap_margin_bottom
                ),
            });
        }
        if self.max_field_height < self.min_field_height() {
            return Err(ConfigError::Invalid {
                field: "max_field_height",
                reason: format!(
                    "must be at least gap_margin_top + gap_margin_bottom ({})",
                    self.min_field_height()
                ),
            });
        }
        if self.bird_height >= self.min_field_height() {
            return Err(ConfigError::Invalid {
                field: "bird_height",
                reason: format!(
                    "must be below the smallest field height ({}), got {}",
                    self.min_field_height(),
                    self.bird_height
                ),
            });
        }
        if self.max_field_width < self.min_field_width() {
            return Err(ConfigError::Invalid {
                field: "max_field_width",
                reason: format!(
                    "must be at least bird_x + bird_width + obstacle_width ({})",
                    self.min_field_width()
                ),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "tick_interval_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_interval_ms, 16);
        assert!((config.gravity - 0.5).abs() < f64::EPSILON);
        assert!((config.jump_impulse - (-8.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "gravity": 0.25 }"#).unwrap();
        assert!((config.gravity - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.obstacle_gap, OBSTACLE_GAP);
        assert_eq!(config.max_field_width, MAX_FIELD_WIDTH);
    }

    #[test]
    fn test_rejects_upward_gravity() {
        let config = GameConfig {
            gravity: -1.0,
            ..GameConfig::default()
        };
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "gravity"),
            other => panic!("expected invalid gravity, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_downward_jump() {
        let config = GameConfig {
            jump_impulse: 4.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "jump_impulse",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_gap_larger_than_bottom_margin() {
        let config = GameConfig {
            obstacle_gap: 250.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "gap_margin_bottom",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_bird_taller_than_smallest_field() {
        let config = GameConfig {
            bird_height: 300.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "bird_height",
                ..
            })
        ));

        let config = GameConfig {
            bird_height: 299.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_tick() {
        let config = GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_min_field_dimensions() {
        let config = GameConfig::default();
        assert_eq!(config.min_field_height(), 300.0);
        assert_eq!(config.min_field_width(), 200.0);
    }

    #[test]
    fn test_error_display_names_field() {
        let err = ConfigError::Invalid {
            field: "gravity",
            reason: "must be a positive number, got 0".to_string(),
        };
        assert!(err.to_string().contains("`gravity`"));
    }
}
