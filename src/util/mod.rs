pub mod logger;
mod math;

pub use math::helpers;
pub use math::vec2d::Vec2D;
