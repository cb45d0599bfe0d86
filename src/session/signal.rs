use super::state::SessionState;
use crate::formula::Symbol;

/// Notifications for the presentation adapter, drained after each call into the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionSignal {
    StateChanged(SessionState),
    /// All slots were cleared ahead of a new question.
    BoardCleared,
    QuestionCreated { digits: [(usize, Symbol); 4], target: f32 },
    SlotChanged { index: usize, symbol: Symbol },
    /// A parsable expression was submitted.
    Evaluated { result: f32, diff: f32 },
}

/// Receives the final score exactly once when the session ends. Delivery is fire-and-forget.
pub trait ScoreSink {
    fn submit_score(&mut self, score: u32);
}

impl<F: FnMut(u32)> ScoreSink for F {
    fn submit_score(&mut self, score: u32) { self(score); }
}
