//! Background motion: rings of scroll elements whose activations are staggered by a
//! repeating cooperative timer, each element looping a short accelerate-and-grow animation.

mod element;
mod mover;
mod ring;

#[cfg(test)]
mod tests;

pub use element::{ElementProperty, ScrollElement};
pub use mover::{RingKind, SceneryMover};
pub use ring::ScrollRing;
