use crate::fatal;
use strum_macros::{Display, EnumIter, EnumString};

/// A single tile that can occupy a slot of the expression board.
///
/// `None` marks an empty slot and is skipped entirely during evaluation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Display, EnumIter, EnumString)]
pub enum Symbol {
    #[default]
    #[strum(to_string = "_", serialize = "none")]
    None,
    #[strum(to_string = "0")]
    N0,
    #[strum(to_string = "1")]
    N1,
    #[strum(to_string = "2")]
    N2,
    #[strum(to_string = "3")]
    N3,
    #[strum(to_string = "4")]
    N4,
    #[strum(to_string = "5")]
    N5,
    #[strum(to_string = "6")]
    N6,
    #[strum(to_string = "7")]
    N7,
    #[strum(to_string = "8")]
    N8,
    #[strum(to_string = "9")]
    N9,
    #[strum(to_string = "+", serialize = "plus")]
    Add,
    #[strum(to_string = "-", serialize = "−", serialize = "minus")]
    Sub,
    #[strum(to_string = "*", serialize = "×", serialize = "x", serialize = "times")]
    Mul,
    #[strum(to_string = "/", serialize = "÷", serialize = "div")]
    Div,
    #[strum(to_string = "(")]
    Open,
    #[strum(to_string = ")")]
    Close,
}

impl Symbol {
    /// All digit symbols in ascending order.
    pub const DIGITS: [Symbol; 10] = [
        Symbol::N0,
        Symbol::N1,
        Symbol::N2,
        Symbol::N3,
        Symbol::N4,
        Symbol::N5,
        Symbol::N6,
        Symbol::N7,
        Symbol::N8,
        Symbol::N9,
    ];

    /// The four binary operators.
    pub const OPERATORS: [Symbol; 4] = [Symbol::Add, Symbol::Sub, Symbol::Mul, Symbol::Div];

    /// Converts a digit value into its symbol.
    ///
    /// # Panics
    /// Values outside `0..=9` are a logic defect and abort via `fatal!`.
    pub fn from_digit(value: u8) -> Self {
        Self::DIGITS
            .get(usize::from(value))
            .copied()
            .unwrap_or_else(|| fatal!("Digit {value} has no symbol"))
    }

    /// Returns the numeric value for digit symbols.
    pub fn digit(self) -> Option<u8> {
        Self::DIGITS.iter().position(|d| *d == self).and_then(|i| u8::try_from(i).ok())
    }

    pub fn is_digit(self) -> bool { self.digit().is_some() }

    pub fn is_operator(self) -> bool { Self::OPERATORS.contains(&self) }

    pub fn is_paren(self) -> bool { matches!(self, Symbol::Open | Symbol::Close) }

    pub fn is_none(self) -> bool { self == Symbol::None }
}
