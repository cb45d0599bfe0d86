use super::{
    clock::SessionClock,
    game_data::GameData,
    signal::{ScoreSink, SessionSignal},
    state::{SessionEvent, SessionState},
};
use crate::config::SessionConfig;
use crate::formula::{BoardLayout, ExpressionBoard, PlacementError, Symbol};
use crate::question::{Question, QuestionSource};
use crate::scheduling::{EventHandle, EventQueue};
use crate::util::Vec2D;
use crate::util::helpers::secs_to_delta;
use crate::{event, info, score};

/// Outcome of a successful evaluation attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackReport {
    /// Value of the submitted expression.
    pub result: f32,
    /// Absolute distance to the question target.
    pub diff: f32,
    /// Countdown after the adjustment.
    pub time: f32,
}

/// Orchestrates one puzzle session: delayed start, countdown, evaluation attempts and the
/// single end-of-session score report.
///
/// The caller owns the machine and drives it with [`SessionStateMachine::tick`]; collaborators
/// receive state through [`SessionStateMachine::drain_signals`] and the read accessors.
pub struct SessionStateMachine<Q: QuestionSource> {
    state: SessionState,
    clock: SessionClock,
    game_data: GameData,
    board: ExpressionBoard,
    question: Option<Question>,
    questions: Q,
    timers: EventQueue<SessionEvent>,
    start_handle: Option<EventHandle>,
    attackable: bool,
    over_reported: bool,
    torn_down: bool,
    score_sink: Box<dyn ScoreSink>,
    signals: Vec<SessionSignal>,
}

impl<Q: QuestionSource> SessionStateMachine<Q> {
    /// Time awarded when the expression hits the target exactly.
    pub const EXACT_HIT_BONUS: f32 = 2.0;
    /// Seconds lost per unit of distance to the target.
    pub const MISS_PENALTY_FACTOR: f32 = 2.0;

    /// Starts a session in [`SessionState::Stay`] and arms the delayed start.
    pub fn new(config: &SessionConfig, questions: Q, score_sink: Box<dyn ScoreSink>) -> Self {
        let mut timers = EventQueue::new();
        let start_handle =
            timers.schedule_in(secs_to_delta(config.start_delay), SessionEvent::StartDelayElapsed);
        let mut game_data = GameData::default();
        game_data.reset();
        info!("Session created, starting in {}s with {}s on the clock", config.start_delay, config.init_time_limit);
        Self {
            state: SessionState::Stay,
            clock: SessionClock::new(config.init_time_limit),
            game_data,
            board: ExpressionBoard::new(),
            question: None,
            questions,
            timers,
            start_handle: Some(start_handle),
            attackable: false,
            over_reported: false,
            torn_down: false,
            score_sink,
            signals: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState { self.state }
    pub fn time(&self) -> f32 { self.clock.time() }
    pub fn is_attackable(&self) -> bool { self.attackable }
    pub fn board(&self) -> &ExpressionBoard { &self.board }
    pub fn question(&self) -> Option<&Question> { self.question.as_ref() }
    pub fn game_data(&self) -> &GameData { &self.game_data }
    pub fn is_torn_down(&self) -> bool { self.torn_down }

    /// Takes all signals queued since the last drain.
    pub fn drain_signals(&mut self) -> Vec<SessionSignal> { std::mem::take(&mut self.signals) }

    /// Advances the session by `dt` seconds of real time.
    ///
    /// The countdown is decremented before the expiry check; due timers fire afterwards.
    pub fn tick(&mut self, dt: f32) {
        if self.torn_down {
            return;
        }
        let step = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        match self.state {
            SessionState::OnGoing => {
                self.clock.decrement(step);
                if self.clock.is_expired() {
                    self.fire(SessionEvent::ClockExpired);
                }
            }
            SessionState::Stay | SessionState::Over => {}
        }
        for (_, _, timer_event) in self.timers.advance(secs_to_delta(step)) {
            self.fire(timer_event);
        }
    }

    /// Places a player tile. Only accepted while the session is running.
    ///
    /// # Errors
    /// `NotInteractable` outside [`SessionState::OnGoing`], otherwise the board's placement errors.
    pub fn place(&mut self, index: usize, symbol: Symbol) -> Result<(), PlacementError> {
        if self.torn_down || !self.state.is_interactable() {
            return Err(PlacementError::NotInteractable);
        }
        self.board.place(index, symbol)?;
        event!("Placed {symbol} on slot {index}: {}", self.board);
        self.signals.push(SessionSignal::SlotChanged { index, symbol });
        Ok(())
    }

    /// Places a tile released at `pos` on the open slot whose frame it snaps to.
    ///
    /// Returns the resolved slot index.
    ///
    /// # Errors
    /// `NotInteractable` outside [`SessionState::OnGoing`], `NoOpenSlot` when no empty free slot
    /// is within `radius`.
    pub fn drop_tile(
        &mut self,
        layout: &BoardLayout,
        pos: Vec2D<f32>,
        radius: f32,
        symbol: Symbol,
    ) -> Result<usize, PlacementError> {
        if self.torn_down || !self.state.is_interactable() {
            return Err(PlacementError::NotInteractable);
        }
        let index =
            layout.open_drop_target(&self.board, pos, radius).ok_or(PlacementError::NoOpenSlot)?;
        self.place(index, symbol)?;
        Ok(index)
    }

    /// Submits the current board.
    ///
    /// Returns `None` without touching any state when the session is not attackable or the
    /// board does not hold a parsable expression.
    #[allow(clippy::float_cmp)]
    pub fn attempt_evaluation(&mut self) -> Option<AttackReport> {
        if self.torn_down || !self.state.is_interactable() || !self.attackable {
            return None;
        }
        let target = self.question.as_ref()?.target();
        let Some(result) = self.board.evaluate() else {
            event!("Unparsable board: {}", self.board);
            return None;
        };

        self.attackable = false;
        let diff = (target - result).abs();
        if diff == 0.0 {
            self.clock.increment(Self::EXACT_HIT_BONUS);
        } else {
            self.clock.decrement(Self::MISS_PENALTY_FACTOR * diff);
        }
        self.game_data.record_defeat();
        self.signals.push(SessionSignal::Evaluated { result, diff });
        event!("Evaluated {result} against {target}, clock now {}", self.clock.time());
        self.create_question();
        self.attackable = true;

        if self.clock.is_expired() {
            self.fire(SessionEvent::ClockExpired);
        }
        Some(AttackReport { result, diff, time: self.clock.time() })
    }

    /// Cancels the pending delayed start and freezes the session. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        if let Some(handle) = self.start_handle.take() {
            self.timers.cancel(handle);
        }
        self.timers.clear();
        self.attackable = false;
        info!("Session torn down in state {}", self.state);
    }

    fn fire(&mut self, event: SessionEvent) {
        let Some(next) = self.state.next(event) else {
            return;
        };
        self.on_exit(self.state);
        info!("Session {} -> {next} on {event}", self.state);
        self.state = next;
        self.signals.push(SessionSignal::StateChanged(next));
        self.on_enter(next);
    }

    fn on_exit(&mut self, state: SessionState) {
        match state {
            SessionState::Stay => self.start_handle = None,
            SessionState::OnGoing => self.attackable = false,
            SessionState::Over => {}
        }
    }

    fn on_enter(&mut self, state: SessionState) {
        match state {
            SessionState::Stay => {}
            SessionState::OnGoing => {
                self.attackable = true;
                self.create_question();
            }
            SessionState::Over => {
                if self.over_reported {
                    return;
                }
                self.over_reported = true;
                let final_score = self.game_data.defeated_enemy_num();
                score!("Session over with {final_score} defeated");
                self.score_sink.submit_score(final_score);
            }
        }
    }

    fn create_question(&mut self) {
        let question = self.questions.generate();
        self.board.reset();
        self.signals.push(SessionSignal::BoardCleared);
        self.board.fill_digits(question.digits());
        self.signals.push(SessionSignal::QuestionCreated {
            digits: question.placements(),
            target: question.target(),
        });
        info!("New question {:?}, target {}", question.digits(), question.target());
        self.question = Some(question);
    }
}
