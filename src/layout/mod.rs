//! Growth tree layout
//!
//! Turns a learner's progress record into positioned scene nodes: rings
//! and skills along the trunk, branches fanning from the apex with their
//! leaves and fruit, and roots below the base.

pub mod cache;
pub mod engine;
pub mod palette;
pub mod params;

pub use cache::LayoutCache;
pub use engine::{compute_layout, compute_layout_with};
pub use palette::{color_for_growth, color_for_level, Color};
pub use params::{Canvas, FanAlignment, FanParams, LayoutParams};
