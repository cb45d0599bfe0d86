use num::{Float, Num};
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Mul};

/// A 2D vector generic over any numeric type.
///
/// Used for scenery element positions and velocities as well as board slot frames.
///
/// # Type Parameters
/// * `T` - The functionality for the vector depends on traits implemented by `T`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Deserialize)]
pub struct Vec2D<T> {
    /// The x-component of the vector.
    x: T,
    /// The y-component of the vector.
    y: T,
}

impl<T: Copy> Vec2D<T> {
    /// Creates a new vector with the given x and y components.
    pub const fn new(x: T, y: T) -> Self { Self { x, y } }

    /// Returns the x-component of the vector.
    pub const fn x(&self) -> T { self.x }

    /// Returns the y-component of the vector.
    pub const fn y(&self) -> T { self.y }
}

impl<T: Float> Vec2D<T> {
    /// Computes the magnitude (absolute value) of the vector.
    pub fn abs(&self) -> T { (self.x.powi(2) + self.y.powi(2)).sqrt() }

    /// Normalizes the vector to have a magnitude of 1.
    /// If the magnitude is zero, the original vector is returned unmodified.
    pub fn normalize(self) -> Self {
        let magnitude = self.abs();
        if magnitude.is_zero() {
            self
        } else {
            Self::new(self.x / magnitude, self.y / magnitude)
        }
    }

    /// Computes the Euclidean distance between the current vector and another vector.
    pub fn euclid_distance(&self, other: &Self) -> T {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl<T: Num> Add for Vec2D<T> {
    type Output = Vec2D<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Output { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl<T: Num + Copy> AddAssign for Vec2D<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
    }
}

impl<T: Num + Copy> Mul<T> for Vec2D<T> {
    type Output = Vec2D<T>;

    /// Implements the `*` operator for a `Vec2D` and a scalar.
    fn mul(self, rhs: T) -> Self::Output {
        Self::Output { x: self.x * rhs, y: self.y * rhs }
    }
}

impl<T: Display> Display for Vec2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
