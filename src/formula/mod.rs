//! The expression board: tile symbols, the twelve-slot grid, its evaluator and the
//! frame layout used to map drag releases onto slots.

mod board;
mod evaluator;
mod layout;
mod symbol;


pub use board::{ExpressionBoard, PlacementError};
pub use evaluator::evaluate;
pub use layout::BoardLayout;
pub use symbol::Symbol;
