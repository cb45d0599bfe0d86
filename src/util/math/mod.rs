pub mod helpers;
pub mod vec2d;
