use serde::{Deserialize, Serialize};

/// Brand color tokens used by the scene
///
/// Serialized as token names so a renderer can map them onto its own
/// theme; `hex()` gives the stock values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    Red,
    Yellow,
    Lime,
    Cyan,
    Orange,
    OrangeDark,
    Purple,
    Black,
    White,
}

impl Color {
    pub fn hex(&self) -> &'static str {
        match self {
            Color::Red => "#e91e25",
            Color::Yellow => "#fedc00",
            Color::Lime => "#9ecb3a",
            Color::Cyan => "#15bddb",
            Color::Orange => "#f05722",
            Color::OrangeDark => "#b8421a",
            Color::Purple => "#9a459a",
            Color::Black => "#000000",
            Color::White => "#ffffff",
        }
    }
}

/// Four-step level scale: red, yellow, lime, cyan.
/// Values below 0 take the level 0 color and values above 3 the level 3 color.
pub fn color_for_level(level: i32) -> Color {
    match level.clamp(0, 3) {
        0 => Color::Red,
        1 => Color::Yellow,
        2 => Color::Lime,
        _ => Color::Cyan,
    }
}

/// Ring color: growth bucketed in steps of 25 through the level scale
pub fn color_for_growth(growth: f64) -> Color {
    // `as` saturates and maps NaN to 0
    color_for_level((growth / 25.0).floor() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Color::Red)]
    #[case(1, Color::Yellow)]
    #[case(2, Color::Lime)]
    #[case(3, Color::Cyan)]
    fn test_level_scale(#[case] level: i32, #[case] expected: Color) {
        assert_eq!(color_for_level(level), expected);
    }

    #[test]
    fn test_out_of_range_levels_fall_back() {
        assert_eq!(color_for_level(-1), color_for_level(0));
        assert_eq!(color_for_level(i32::MIN), color_for_level(0));
        assert_eq!(color_for_level(4), color_for_level(3));
        assert_eq!(color_for_level(i32::MAX), color_for_level(3));
    }

    #[rstest]
    #[case(0.0, Color::Red)]
    #[case(24.9, Color::Red)]
    #[case(45.0, Color::Yellow)]
    #[case(68.0, Color::Lime)]
    #[case(72.0, Color::Lime)]
    #[case(75.0, Color::Cyan)]
    #[case(100.0, Color::Cyan)]
    #[case(250.0, Color::Cyan)]
    #[case(-10.0, Color::Red)]
    #[case(f64::NAN, Color::Red)]
    fn test_growth_buckets(#[case] growth: f64, #[case] expected: Color) {
        assert_eq!(color_for_growth(growth), expected);
    }

    #[test]
    fn test_color_token_serialization() {
        assert_eq!(serde_json::to_string(&Color::OrangeDark).unwrap(), "\"orange-dark\"");
    }
}
