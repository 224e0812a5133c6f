use serde::{Deserialize, Serialize};
use crate::layout::palette::{color_for_level, Color};

/// Four-point mastery scale shared by roots, trunk skills and artifacts
///
/// Stored as the raw integer from the input so that out-of-range values
/// survive a round-trip; every accessor degrades instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(pub i32);

impl Level {
    pub const INITIATE: Level = Level(0);
    pub const PRACTICE: Level = Level(1);
    pub const TRANSFER: Level = Level(2);
    pub const MASTER: Level = Level(3);

    const LABELS: [&'static str; 4] = ["Initiate", "Practice", "Transfer", "Master"];

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Level forced into 0..=3
    pub fn clamped(&self) -> i32 {
        self.0.clamp(0, 3)
    }

    /// Display label; anything outside 0..=3 reads as "Initiate"
    pub fn label(&self) -> &'static str {
        usize::try_from(self.0)
            .ok()
            .and_then(|i| Self::LABELS.get(i))
            .copied()
            .unwrap_or(Self::LABELS[0])
    }

    pub fn color(&self) -> Color {
        color_for_level(self.0)
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Level(value)
    }
}
