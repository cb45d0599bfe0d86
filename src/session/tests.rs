use super::{SessionClock, SessionSignal, SessionState, SessionStateMachine};
use crate::config::{GameConfig, SessionConfig};
use crate::formula::{ExpressionBoard, PlacementError, Symbol};
use crate::question::{Question, QuestionGenerator, QuestionSource, TargetPolicy};
use crate::util::Vec2D;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Hands out a fixed list of questions, repeating the last one.
struct Scripted(VecDeque<Question>);

impl QuestionSource for Scripted {
    fn generate(&mut self) -> Question {
        if self.0.len() > 1 { self.0.pop_front().unwrap() } else { self.0[0] }
    }
}

type Scores = Rc<RefCell<Vec<u32>>>;

fn machine(time: f32, questions: Vec<Question>) -> (SessionStateMachine<Scripted>, Scores) {
    let scores: Scores = Rc::default();
    let sink = Rc::clone(&scores);
    let config = SessionConfig { init_time_limit: time, start_delay: 1.0 };
    let session = SessionStateMachine::new(
        &config,
        Scripted(questions.into()),
        Box::new(move |score: u32| sink.borrow_mut().push(score)),
    );
    (session, scores)
}

fn started(time: f32, questions: Vec<Question>) -> (SessionStateMachine<Scripted>, Scores) {
    let (mut session, scores) = machine(time, questions);
    session.tick(1.0);
    assert_eq!(session.state(), SessionState::OnGoing);
    (session, scores)
}

/// Fills the three operator gaps between the digits.
fn place_ops(session: &mut SessionStateMachine<Scripted>, ops: [Symbol; 3]) {
    for (slot, op) in [3, 5, 8].into_iter().zip(ops) {
        session.place(slot, op).unwrap();
    }
}

#[test]
fn test_clock_clamps() {
    let mut clock = SessionClock::new(300.0);
    assert!((clock.time() - 255.0).abs() < f32::EPSILON);
    clock.decrement(1000.0);
    assert!(clock.time().abs() < f32::EPSILON);
    assert!(clock.is_expired());
    clock.increment(f32::INFINITY);
    assert!((clock.time() - 255.0).abs() < f32::EPSILON);
    clock.set(f32::NAN);
    assert!(clock.is_expired());
    for delta in [-1e9_f32, 3.5, 1e9, -0.25, 77.0] {
        clock.increment(delta);
        assert!((SessionClock::MIN..=SessionClock::MAX).contains(&clock.time()));
    }
}

#[test]
fn test_transition_function() {
    use super::SessionEvent::{ClockExpired, StartDelayElapsed};
    assert_eq!(SessionState::Stay.next(StartDelayElapsed), Some(SessionState::OnGoing));
    assert_eq!(SessionState::Stay.next(ClockExpired), None);
    assert_eq!(SessionState::OnGoing.next(ClockExpired), Some(SessionState::Over));
    assert_eq!(SessionState::OnGoing.next(StartDelayElapsed), None);
    assert_eq!(SessionState::Over.next(ClockExpired), None);
    assert_eq!(SessionState::Over.next(StartDelayElapsed), None);
}

#[test]
fn test_delayed_start() {
    let q = Question::new([1, 2, 3, 4], 10.0);
    let (mut session, _) = machine(30.0, vec![q]);
    assert_eq!(session.state(), SessionState::Stay);
    assert!(!session.is_attackable());
    assert_eq!(session.place(3, Symbol::Add), Err(PlacementError::NotInteractable));
    assert!(session.attempt_evaluation().is_none());

    session.tick(0.5);
    assert_eq!(session.state(), SessionState::Stay);
    assert!((session.time() - 30.0).abs() < f32::EPSILON);

    session.tick(0.5);
    assert_eq!(session.state(), SessionState::OnGoing);
    assert!(session.is_attackable());
    assert_eq!(session.question(), Some(&q));
    assert_eq!(session.board().get(2), Some(Symbol::N1));
    assert_eq!(session.board().get(9), Some(Symbol::N4));

    let signals = session.drain_signals();
    assert_eq!(
        signals,
        vec![
            SessionSignal::StateChanged(SessionState::OnGoing),
            SessionSignal::BoardCleared,
            SessionSignal::QuestionCreated { digits: q.placements(), target: 10.0 },
        ]
    );
    assert!(session.drain_signals().is_empty());

    session.tick(2.0);
    assert!((session.time() - 28.0).abs() < f32::EPSILON);
}

#[test]
fn test_exact_hit_adds_bonus() {
    let first = Question::new([1, 2, 3, 4], 10.0);
    let second = Question::new([5, 6, 7, 8], 3.0);
    let (mut session, _) = started(10.0, vec![first, second]);
    place_ops(&mut session, [Symbol::Add, Symbol::Add, Symbol::Add]);
    session.drain_signals();

    let report = session.attempt_evaluation().unwrap();
    assert!((report.result - 10.0).abs() < f32::EPSILON);
    assert!(report.diff.abs() < f32::EPSILON);
    assert!((session.time() - 12.0).abs() < f32::EPSILON);
    assert_eq!(session.game_data().defeated_enemy_num(), 1);
    assert!(session.is_attackable());

    assert_eq!(session.question(), Some(&second));
    let expected = ExpressionBoard::with_digits([5, 6, 7, 8]);
    assert_eq!(session.board(), &expected);

    let signals = session.drain_signals();
    assert!(matches!(signals[0], SessionSignal::Evaluated { .. }));
    assert_eq!(signals[1], SessionSignal::BoardCleared);
    assert!(matches!(signals[2], SessionSignal::QuestionCreated { target, .. } if (target - 3.0).abs() < f32::EPSILON));
}

#[test]
fn test_miss_penalty_ends_session_immediately() {
    // 1 + 2 + 3 + 4 = 10, five away from 15
    let q = Question::new([1, 2, 3, 4], 15.0);
    let (mut session, scores) = started(1.0, vec![q]);
    place_ops(&mut session, [Symbol::Add, Symbol::Add, Symbol::Add]);

    let report = session.attempt_evaluation().unwrap();
    assert!((report.diff - 5.0).abs() < f32::EPSILON);
    assert!(report.time.abs() < f32::EPSILON);
    assert_eq!(session.state(), SessionState::Over);
    assert!(!session.is_attackable());
    assert_eq!(*scores.borrow(), vec![1]);

    for _ in 0..10 {
        session.tick(1.0);
    }
    assert_eq!(*scores.borrow(), vec![1]);
    assert_eq!(session.place(0, Symbol::Open), Err(PlacementError::NotInteractable));
    assert!(session.attempt_evaluation().is_none());
}

#[test]
fn test_penalty_scales_with_distance() {
    // 1 × 2 + 3 × 4 = 14, one away from 13
    let q = Question::new([1, 2, 3, 4], 13.0);
    let (mut session, _) = started(20.0, vec![q]);
    place_ops(&mut session, [Symbol::Mul, Symbol::Add, Symbol::Mul]);
    let report = session.attempt_evaluation().unwrap();
    assert!((report.result - 14.0).abs() < f32::EPSILON);
    assert!((session.time() - 18.0).abs() < f32::EPSILON);
}

#[test]
fn test_unparsable_attempt_is_noop() {
    let q = Question::new([1, 0, 3, 4], 10.0);
    let (mut session, _) = started(20.0, vec![q]);
    session.place(3, Symbol::Div).unwrap();
    session.drain_signals();
    let board = *session.board();

    assert!(session.attempt_evaluation().is_none());
    assert_eq!(session.board(), &board);
    assert!((session.time() - 20.0).abs() < f32::EPSILON);
    assert_eq!(session.game_data().defeated_enemy_num(), 0);
    assert!(session.drain_signals().is_empty());

    // 1 ÷ 0 + 3 + 4 is complete but divides by zero
    session.place(5, Symbol::Add).unwrap();
    session.place(8, Symbol::Add).unwrap();
    assert!(session.attempt_evaluation().is_none());
    assert!((session.time() - 20.0).abs() < f32::EPSILON);
    assert_eq!(session.question(), Some(&q));
}

#[test]
fn test_countdown_reaches_over_once() {
    let q = Question::new([1, 2, 3, 4], 10.0);
    let (mut session, scores) = started(2.0, vec![q]);
    place_ops(&mut session, [Symbol::Add, Symbol::Add, Symbol::Add]);
    session.attempt_evaluation().unwrap();
    session.tick(1.5);
    assert_eq!(session.state(), SessionState::OnGoing);
    session.tick(5.0);
    assert_eq!(session.state(), SessionState::Over);
    assert!(session.time().abs() < f32::EPSILON);
    session.tick(1.0);
    session.tick(1.0);
    assert_eq!(*scores.borrow(), vec![1]);
    let over_signals = session
        .drain_signals()
        .into_iter()
        .filter(|s| *s == SessionSignal::StateChanged(SessionState::Over))
        .count();
    assert_eq!(over_signals, 1);
}

#[test]
fn test_placement_signals_and_errors() {
    let q = Question::new([1, 2, 3, 4], 10.0);
    let (mut session, _) = started(20.0, vec![q]);
    session.drain_signals();
    session.place(0, Symbol::Open).unwrap();
    assert_eq!(session.place(0, Symbol::Close), Err(PlacementError::SlotOccupied { index: 0 }));
    assert_eq!(session.place(4, Symbol::Close), Err(PlacementError::InvalidSlot { index: 4 }));
    assert_eq!(session.drain_signals(), vec![SessionSignal::SlotChanged { index: 0, symbol: Symbol::Open }]);
}

#[test]
fn test_drop_tile_snaps_to_open_slot() {
    let xs: Vec<String> = (0..12).map(|i| format!("{{ x = {}.0, y = 2.0 }}", i * 2)).collect();
    let text = format!("[board]\ndrop_radius = 0.6\nslot_positions = [{}]", xs.join(", "));
    let board = GameConfig::from_toml_str(&text).unwrap().board;
    let layout = board.layout();

    let q = Question::new([2, 3, 4, 5], 14.0);
    let (mut session, _) = machine(20.0, vec![q]);
    let near_slot_3 = Vec2D::new(6.3, 1.8);
    assert_eq!(
        session.drop_tile(&layout, near_slot_3, board.drop_radius, Symbol::Add),
        Err(PlacementError::NotInteractable)
    );
    session.tick(1.0);
    session.drain_signals();

    assert_eq!(session.drop_tile(&layout, near_slot_3, board.drop_radius, Symbol::Add), Ok(3));
    assert_eq!(session.board().get(3), Some(Symbol::Add));
    assert_eq!(session.drain_signals(), vec![SessionSignal::SlotChanged { index: 3, symbol: Symbol::Add }]);

    let occupied = session.drop_tile(&layout, Vec2D::new(6.0, 2.0), board.drop_radius, Symbol::Mul);
    let number_slot = session.drop_tile(&layout, Vec2D::new(4.0, 2.0), board.drop_radius, Symbol::Mul);
    let out_of_reach = session.drop_tile(&layout, Vec2D::new(7.0, 2.0), board.drop_radius, Symbol::Mul);
    for refused in [occupied, number_slot, out_of_reach] {
        assert_eq!(refused, Err(PlacementError::NoOpenSlot));
    }
    assert_eq!(session.board().get(3), Some(Symbol::Add));
    assert!(session.drain_signals().is_empty());
}

#[test]
fn test_teardown_cancels_pending_start() {
    let q = Question::new([1, 2, 3, 4], 10.0);
    let (mut session, scores) = machine(5.0, vec![q]);
    session.teardown();
    session.teardown();
    assert!(session.is_torn_down());
    session.tick(100.0);
    assert_eq!(session.state(), SessionState::Stay);
    assert!(session.question().is_none());
    assert!(session.drain_signals().is_empty());
    assert!(scores.borrow().is_empty());
}

#[test]
fn test_zero_start_delay_and_seeded_generator() {
    let config = SessionConfig { init_time_limit: 60.0, start_delay: 0.0 };
    let generator = QuestionGenerator::new(TargetPolicy::Combination, StdRng::seed_from_u64(5));
    let mut session = SessionStateMachine::new(&config, generator, Box::new(|_: u32| {}));
    session.tick(0.0);
    assert_eq!(session.state(), SessionState::OnGoing);
    let q = *session.question().unwrap();
    assert!(q.target().is_finite());
    for (slot, symbol) in q.placements() {
        assert_eq!(session.board().get(slot), Some(symbol));
    }
}
