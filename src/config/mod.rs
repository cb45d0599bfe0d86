//! Read-only game configuration, loaded once from TOML before a session is created.

mod game_config;


pub use game_config::{BoardConfig, ConfigError, GameConfig, QuestionConfig, SceneryConfig, SessionConfig};
