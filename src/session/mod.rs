//! The puzzle session: countdown clock, counters, the `Stay -> OnGoing -> Over` state
//! machine and the signals it emits for presentation and scoring collaborators.

mod clock;
mod game_data;
mod machine;
mod signal;
mod state;

#[cfg(test)]
mod tests;

pub use clock::SessionClock;
pub use game_data::GameData;
pub use machine::{AttackReport, SessionStateMachine};
pub use signal::{ScoreSink, SessionSignal};
pub use state::{SessionEvent, SessionState};
