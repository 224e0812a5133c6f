pub mod vec2;
pub mod curve;

pub use vec2::Vec2;
pub use curve::{QuadraticCurve, distance_to_segment};
