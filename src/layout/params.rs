use serde::{Deserialize, Deserializer, Serialize};

/// Drawing surface size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}

/// How a fan of leaves or fruit is spread around the branch direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FanAlignment {
    /// Offset `(j - (k - 1) / 2) * step`: the fan is symmetric about the branch
    Centered,
    /// Offset `(j - k / 2) * step`: the legacy placement, skewed half a step
    /// toward negative angles
    Leading,
}

/// Fan of satellites (leaves or fruit) around a branch node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FanParams {
    /// Angular step between neighbours, in degrees
    pub angle_step: f64,
    /// Distance of the first satellite from the branch node
    pub base_distance: f64,
    /// Extra distance per satellite index
    pub distance_step: f64,
}

impl FanParams {
    pub const LEAF: Self = Self {
        angle_step: 15.0,
        base_distance: 80.0,
        distance_step: 25.0,
    };

    pub const FRUIT: Self = Self {
        angle_step: 20.0,
        base_distance: 100.0,
        distance_step: 30.0,
    };

    /// Angular offset of satellite `index` out of `count`
    pub fn angle_offset(&self, index: usize, count: usize, alignment: FanAlignment) -> f64 {
        let center = match alignment {
            FanAlignment::Centered => (count as f64 - 1.0) / 2.0,
            FanAlignment::Leading => count as f64 / 2.0,
        };
        (index as f64 - center) * self.angle_step
    }

    /// Distance of satellite `index` from the branch node
    pub fn distance(&self, index: usize) -> f64 {
        self.base_distance + self.distance_step * index as f64
    }
}

/// Fan fields as written in a params document; missing fields fall back to
/// the fan being overridden
#[derive(Deserialize)]
struct FanOverride {
    angle_step: Option<f64>,
    base_distance: Option<f64>,
    distance_step: Option<f64>,
}

impl FanOverride {
    fn apply(self, base: FanParams) -> FanParams {
        FanParams {
            angle_step: self.angle_step.unwrap_or(base.angle_step),
            base_distance: self.base_distance.unwrap_or(base.base_distance),
            distance_step: self.distance_step.unwrap_or(base.distance_step),
        }
    }
}

fn leaf_fan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FanParams, D::Error> {
    FanOverride::deserialize(deserializer).map(|o| o.apply(FanParams::LEAF))
}

fn fruit_fan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FanParams, D::Error> {
    FanOverride::deserialize(deserializer).map(|o| o.apply(FanParams::FRUIT))
}

/// Parameters controlling the growth tree geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Y of the trunk apex, where every branch starts
    pub trunk_top_y: f64,
    /// Gap between the trunk base and the bottom of the canvas
    pub trunk_base_margin: f64,
    pub trunk_width: f64,
    pub trunk_corner_radius: f64,

    /// Ring diameter added on top of the trunk width at 100% growth
    pub ring_growth_span: f64,
    /// Horizontal gap between a ring and its label
    pub ring_label_gap: f64,

    /// Distance from the trunk's left edge to the skill box's left edge
    pub skill_box_offset: f64,
    pub skill_box_width: f64,
    pub skill_box_height: f64,

    pub branch_base_length: f64,
    pub branch_length_per_artifact: f64,
    pub branch_length_per_outcome: f64,
    pub branch_node_radius: f64,
    /// Vertical distance from the branch node to its domain label
    pub branch_label_offset: f64,

    pub fan_alignment: FanAlignment,
    #[serde(deserialize_with = "leaf_fan")]
    pub leaf_fan: FanParams,
    pub leaf_radius_x: f64,
    pub leaf_radius_y: f64,
    #[serde(deserialize_with = "fruit_fan")]
    pub fruit_fan: FanParams,
    pub fruit_radius: f64,

    /// Vertical drop from the trunk base to the root curve's control point
    pub root_drop: f64,
    pub root_base_depth: f64,
    pub root_depth_per_level: f64,
    /// Horizontal shift of the root control point from its anchor
    pub root_control_dx: f64,
    /// Horizontal shift of the root tip from its anchor
    pub root_tip_dx: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            trunk_top_y: 200.0,
            trunk_base_margin: 100.0,
            trunk_width: 80.0,
            trunk_corner_radius: 5.0,

            ring_growth_span: 40.0,
            ring_label_gap: 10.0,

            skill_box_offset: 100.0,
            skill_box_width: 90.0,
            skill_box_height: 30.0,

            branch_base_length: 150.0,
            branch_length_per_artifact: 20.0,
            branch_length_per_outcome: 30.0,
            branch_node_radius: 40.0,
            branch_label_offset: 60.0,

            fan_alignment: FanAlignment::Centered,
            leaf_fan: FanParams::LEAF,
            leaf_radius_x: 25.0,
            leaf_radius_y: 15.0,
            fruit_fan: FanParams::FRUIT,
            fruit_radius: 20.0,

            root_drop: 50.0,
            root_base_depth: 30.0,
            root_depth_per_level: 10.0,
            root_control_dx: -20.0,
            root_tip_dx: -30.0,
        }
    }
}

impl LayoutParams {
    /// Parse from YAML; any field left out keeps its default
    pub fn from_yaml(yaml: &str) -> crate::error::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Trunk base Y for a given canvas
    pub fn trunk_base_y(&self, canvas: &Canvas) -> f64 {
        canvas.height - self.trunk_base_margin
    }

    /// Branch length from its evidence counts
    pub fn branch_length(&self, artifacts: usize, outcomes: usize) -> f64 {
        self.branch_base_length
            + self.branch_length_per_artifact * artifacts as f64
            + self.branch_length_per_outcome * outcomes as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas() {
        let canvas = Canvas::default();
        assert_eq!(canvas.width, 1200.0);
        assert_eq!(canvas.height, 800.0);
        assert_eq!(LayoutParams::default().trunk_base_y(&canvas), 700.0);
    }

    #[test]
    fn test_branch_length() {
        let params = LayoutParams::default();
        assert_eq!(params.branch_length(0, 0), 150.0);
        assert_eq!(params.branch_length(2, 1), 220.0);
        assert!(params.branch_length(3, 0) > params.branch_length(2, 0));
    }

    #[test]
    fn test_centered_fan_is_symmetric() {
        let fan = LayoutParams::default().leaf_fan;
        for count in [2usize, 4, 6] {
            let sum: f64 = (0..count)
                .map(|j| fan.angle_offset(j, count, FanAlignment::Centered))
                .sum();
            assert!(sum.abs() < 1e-9, "count {} sum {}", count, sum);
        }
    }

    #[test]
    fn test_leading_fan_matches_legacy_formula() {
        let fan = LayoutParams::default().leaf_fan;
        assert_eq!(fan.angle_offset(0, 2, FanAlignment::Leading), -15.0);
        assert_eq!(fan.angle_offset(1, 2, FanAlignment::Leading), 0.0);
        assert_eq!(fan.angle_offset(0, 1, FanAlignment::Leading), -7.5);
    }

    #[test]
    fn test_fan_distance() {
        let params = LayoutParams::default();
        assert_eq!(params.leaf_fan.distance(0), 80.0);
        assert_eq!(params.leaf_fan.distance(2), 130.0);
        assert_eq!(params.fruit_fan.distance(1), 130.0);
    }

    #[test]
    fn test_partial_yaml_override() {
        let params = LayoutParams::from_yaml("trunk_width: 120\nfan_alignment: leading\n").unwrap();
        assert_eq!(params.trunk_width, 120.0);
        assert_eq!(params.fan_alignment, FanAlignment::Leading);
        assert_eq!(params.trunk_top_y, 200.0);
    }

    #[test]
    fn test_partial_fan_override() {
        let params = LayoutParams::from_yaml("leaf_fan:\n  angle_step: 10\n").unwrap();
        assert_eq!(
            params.leaf_fan,
            FanParams { angle_step: 10.0, base_distance: 80.0, distance_step: 25.0 }
        );
        assert_eq!(params.fruit_fan, FanParams::FRUIT);

        let params = LayoutParams::from_yaml("fruit_fan: { distance_step: 40 }\n").unwrap();
        assert_eq!(
            params.fruit_fan,
            FanParams { angle_step: 20.0, base_distance: 100.0, distance_step: 40.0 }
        );
        assert_eq!(params.leaf_fan, FanParams::LEAF);
    }
}
