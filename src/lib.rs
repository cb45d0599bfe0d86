#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
//! Core of a timed arithmetic puzzle: a countdown-driven session state machine, the
//! twelve-slot expression board with its evaluator, and the staggered scenery scheduler.
//!
//! Everything advances through explicit per-tick deltas; nothing in here reads the wall clock
//! or spawns work on its own.

pub mod config;
pub mod formula;
pub mod question;
pub mod scenery;
pub mod scheduling;
pub mod session;
pub mod util;

pub use config::GameConfig;
pub use formula::{ExpressionBoard, PlacementError, Symbol};
pub use question::{Question, QuestionGenerator, TargetPolicy};
pub use scenery::SceneryMover;
pub use session::{ScoreSink, SessionSignal, SessionState, SessionStateMachine};
