use super::{evaluator, symbol::Symbol};
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// Reasons a placement request is rejected. The board is left untouched in every case.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlacementError {
    /// The free slot already holds a tile.
    SlotOccupied { index: usize },
    /// The index is out of range, addresses a number slot, or the tile is a digit.
    InvalidSlot { index: usize },
    /// A released tile is not within reach of an empty free slot.
    NoOpenSlot,
    /// The session is not accepting input.
    NotInteractable,
}

impl Display for PlacementError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::SlotOccupied { index } => write!(f, "slot {index} is occupied"),
            PlacementError::InvalidSlot { index } => write!(f, "slot {index} is not a free slot"),
            PlacementError::NoOpenSlot => write!(f, "no open slot within reach"),
            PlacementError::NotInteractable => write!(f, "board is not interactable"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// The fixed twelve-slot expression grid.
///
/// Slots [`ExpressionBoard::NUMBER_SLOTS`] are written only by question setup, every other
/// slot is a free slot that accepts operators and parentheses from the player.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct ExpressionBoard {
    slots: [Symbol; ExpressionBoard::LEN],
}

impl ExpressionBoard {
    /// Number of slots on the board.
    pub const LEN: usize = 12;
    /// Slots reserved for the question digits, in generation order.
    pub const NUMBER_SLOTS: [usize; 4] = [2, 4, 7, 9];

    pub fn new() -> Self { Self::default() }

    /// Creates a board holding only the given digits in its number slots.
    pub fn with_digits(digits: [u8; 4]) -> Self {
        let mut board = Self::new();
        board.fill_digits(digits);
        board
    }

    pub fn is_number_slot(index: usize) -> bool { Self::NUMBER_SLOTS.contains(&index) }

    pub fn is_free_slot(index: usize) -> bool { index < Self::LEN && !Self::is_number_slot(index) }

    /// Iterator over all free slot indices in ascending order.
    pub fn free_slots() -> impl Iterator<Item = usize> {
        (0..Self::LEN).filter(|i| !Self::is_number_slot(*i))
    }

    /// Returns the symbol at `index`, or `None` if the index is out of range.
    pub fn get(&self, index: usize) -> Option<Symbol> { self.slots.get(index).copied() }

    pub fn slots(&self) -> &[Symbol; Self::LEN] { &self.slots }

    /// True when `index` is a free slot that currently holds no tile.
    pub fn is_open(&self, index: usize) -> bool {
        Self::is_free_slot(index) && self.slots[index].is_none()
    }

    /// Places a non-digit tile on an empty free slot.
    ///
    /// # Errors
    /// - `InvalidSlot` for out-of-range indices, number slots, or digit tiles.
    /// - `SlotOccupied` if the free slot already holds a tile.
    pub fn place(&mut self, index: usize, symbol: Symbol) -> Result<(), PlacementError> {
        if !Self::is_free_slot(index) || symbol.is_digit() {
            return Err(PlacementError::InvalidSlot { index });
        }
        if !self.slots[index].is_none() {
            return Err(PlacementError::SlotOccupied { index });
        }
        self.slots[index] = symbol;
        Ok(())
    }

    /// Clears every slot to `Symbol::None`.
    pub fn reset(&mut self) { self.slots = [Symbol::None; Self::LEN]; }

    /// Writes the question digits into the number slots in generation order.
    pub fn fill_digits(&mut self, digits: [u8; 4]) {
        for (slot, digit) in Self::NUMBER_SLOTS.into_iter().zip(digits) {
            self.slots[slot] = Symbol::from_digit(digit);
        }
    }

    /// The non-empty tiles in board order, i.e. the effective expression.
    pub fn tokens(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.slots.iter().copied().filter(|s| !s.is_none())
    }

    /// Evaluates the effective expression. `None` means the expression is unparsable.
    pub fn evaluate(&self) -> Option<f32> { evaluator::evaluate(self.tokens()) }
}

impl Display for ExpressionBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slots.iter().join(" "))
    }
}
