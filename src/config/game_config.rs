use crate::formula::{BoardLayout, ExpressionBoard};
use crate::question::TargetPolicy;
use crate::scenery::ElementProperty;
use crate::util::Vec2D;
use crate::{info, warn};
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Errors raised while reading a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "could not read config: {e}"),
            ConfigError::Parse(e) => write!(f, "could not parse config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError::Io(e) }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self { ConfigError::Parse(e) }
}

/// Countdown and start-up timing for a session.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Initial countdown in seconds, clamped into the clock range by the session.
    pub init_time_limit: f32,
    /// Delay in seconds between session creation and the first question.
    pub start_delay: f32,
}

impl Default for SessionConfig {
    fn default() -> Self { Self { init_time_limit: 60.0, start_delay: 3.0 } }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct QuestionConfig {
    pub policy: TargetPolicy,
}

/// Slot frame positions and drop reach; absent positions mean the default single row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub slot_positions: Option<Vec<Vec2D<f32>>>,
    /// Maximum distance between a released tile and the frame it snaps to.
    pub drop_radius: f32,
}

impl Default for BoardConfig {
    fn default() -> Self { Self { slot_positions: None, drop_radius: Self::DEFAULT_DROP_RADIUS } }
}

impl BoardConfig {
    const DEFAULT_DROP_RADIUS: f32 = 0.5;

    /// Builds the layout, falling back to the default row if the list does not cover every slot.
    pub fn layout(&self) -> BoardLayout {
        match self.slot_positions.as_deref() {
            None => BoardLayout::row(),
            Some(frames) => match <[Vec2D<f32>; ExpressionBoard::LEN]>::try_from(frames) {
                Ok(frames) => BoardLayout::new(frames),
                Err(_) => {
                    warn!(
                        "Expected {} slot positions, got {}; using default row",
                        ExpressionBoard::LEN,
                        frames.len()
                    );
                    BoardLayout::row()
                }
            },
        }
    }
}

/// Element properties for the three scenery rings. A missing ring is skipped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneryConfig {
    pub ring_size: usize,
    pub white_line: Option<ElementProperty>,
    pub buildings_left: Option<ElementProperty>,
    pub buildings_right: Option<ElementProperty>,
}

impl SceneryConfig {
    const DEFAULT_RING_SIZE: usize = 5;
}

impl Default for SceneryConfig {
    fn default() -> Self {
        Self {
            ring_size: Self::DEFAULT_RING_SIZE,
            white_line: None,
            buildings_left: None,
            buildings_right: None,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub session: SessionConfig,
    pub question: QuestionConfig,
    pub board: BoardConfig,
    pub scenery: SceneryConfig,
}

impl GameConfig {
    /// Environment variable naming the TOML file to load.
    pub const PATH_VAR: &'static str = "CALC_RUSH_CONFIG";

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    /// `ConfigError::Parse` for malformed TOML or mistyped fields.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> { Ok(toml::from_str(text)?) }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    /// `ConfigError::Io` if the file cannot be read, `ConfigError::Parse` if it is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&text)?;
        info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Loads the file named by [`GameConfig::PATH_VAR`], or the defaults when it is unset.
    ///
    /// # Errors
    /// Propagates [`GameConfig::load`] errors for a configured path.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(Self::PATH_VAR) {
            Ok(path) => Self::load(path),
            Err(_) => {
                info!("{} not set, using default config", Self::PATH_VAR);
                Ok(Self::default())
            }
        }
    }
}
