use crate::formula::{ExpressionBoard, Symbol};
use crate::event;
use rand::Rng;
use serde::Deserialize;

/// Four digits for the number slots plus the value the player should reach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Question {
    digits: [u8; 4],
    target: f32,
}

impl Question {
    pub fn new(digits: [u8; 4], target: f32) -> Self { Self { digits, target } }
    pub fn digits(&self) -> [u8; 4] { self.digits }
    pub fn target(&self) -> f32 { self.target }

    /// Digits paired with the board slot each one occupies.
    pub fn placements(&self) -> [(usize, Symbol); 4] {
        std::array::from_fn(|i| (ExpressionBoard::NUMBER_SLOTS[i], Symbol::from_digit(self.digits[i])))
    }
}

/// How the target value is derived from (or alongside) the digits.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetPolicy {
    /// Random operators between the digits, evaluated in board order.
    #[default]
    Combination,
    /// An integer drawn uniformly from `[min, max]`.
    Uniform { min: i32, max: i32 },
}

/// Anything the session can draw its next question from.
pub trait QuestionSource {
    fn generate(&mut self) -> Question;
}

/// Produces questions from an injected random source.
#[derive(Debug, Clone)]
pub struct QuestionGenerator<R: Rng> {
    policy: TargetPolicy,
    rng: R,
}

impl<R: Rng> QuestionGenerator<R> {
    /// Free slots separating the four digits, one operator each.
    const GAP_SLOTS: [usize; 3] = [3, 5, 8];
    /// Operator draws before falling back to an all-addition target.
    const MAX_COMBINATION_ATTEMPTS: usize = 16;

    pub fn new(policy: TargetPolicy, rng: R) -> Self { Self { policy, rng } }

    /// Draws four independent digits and derives the target according to the policy.
    pub fn next_question(&mut self) -> Question {
        let digits: [u8; 4] = std::array::from_fn(|_| self.rng.random_range(0..=9));
        let target = match self.policy {
            TargetPolicy::Combination => self.combination_target(digits),
            TargetPolicy::Uniform { min, max } => self.uniform_target(min, max),
        };
        event!("Generated question {digits:?} -> {target}");
        Question::new(digits, target)
    }

    fn combination_target(&mut self, digits: [u8; 4]) -> f32 {
        for _ in 0..Self::MAX_COMBINATION_ATTEMPTS {
            let ops: [Symbol; 3] =
                std::array::from_fn(|_| Symbol::OPERATORS[self.rng.random_range(0..Symbol::OPERATORS.len())]);
            if let Some(target) = Self::evaluate_with(digits, ops) {
                return target;
            }
        }
        digits.iter().map(|d| f32::from(*d)).sum()
    }

    fn evaluate_with(digits: [u8; 4], ops: [Symbol; 3]) -> Option<f32> {
        let mut board = ExpressionBoard::with_digits(digits);
        for (slot, op) in Self::GAP_SLOTS.into_iter().zip(ops) {
            board.place(slot, op).ok()?;
        }
        board.evaluate()
    }

    #[allow(clippy::cast_precision_loss)]
    fn uniform_target(&mut self, min: i32, max: i32) -> f32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.rng.random_range(lo..=hi) as f32
    }
}

impl<R: Rng> QuestionSource for QuestionGenerator<R> {
    fn generate(&mut self) -> Question { self.next_question() }
}
