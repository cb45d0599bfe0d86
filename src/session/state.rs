use strum_macros::Display;

/// Lifecycle of a puzzle session.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display)]
pub enum SessionState {
    /// Idle before the delayed start fires.
    Stay,
    /// Countdown running, board interactable.
    OnGoing,
    /// Terminal.
    Over,
}

/// Inputs that can move the session between states.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display)]
pub enum SessionEvent {
    /// The configured start delay has elapsed.
    StartDelayElapsed,
    /// The countdown reached zero.
    ClockExpired,
}

impl SessionState {
    /// The single transition function. `None` means the event does not apply in this state.
    pub fn next(self, event: SessionEvent) -> Option<SessionState> {
        match (self, event) {
            (SessionState::Stay, SessionEvent::StartDelayElapsed) => Some(SessionState::OnGoing),
            (SessionState::OnGoing, SessionEvent::ClockExpired) => Some(SessionState::Over),
            (SessionState::Stay | SessionState::OnGoing | SessionState::Over, _) => None,
        }
    }

    pub fn is_interactable(self) -> bool { self == SessionState::OnGoing }

    pub fn is_terminal(self) -> bool { self == SessionState::Over }
}
