use tracing::debug;
use crate::data::{Artifact, Branch, GrowthTreeData, Outcome, Ring, Root, TrunkSkill};
use crate::math::{QuadraticCurve, Vec2};
use crate::scene::{BranchNode, FruitNode, LeafNode, RingNode, RootNode, SceneGraph, SkillNode, TrunkNode};
use super::palette::color_for_growth;
use super::params::{Canvas, LayoutParams};

/// Baseline offsets of the two text lines under skills and roots
const SKILL_LABEL_BASELINE: f64 = 5.0;
const SKILL_LEVEL_BASELINE: f64 = 18.0;
const ROOT_LABEL_BASELINE: f64 = 15.0;
const ROOT_LEVEL_BASELINE: f64 = 27.0;

/// Lay out a growth tree with the stock parameters
pub fn compute_layout(data: &GrowthTreeData, canvas: Canvas) -> SceneGraph {
    compute_layout_with(data, canvas, &LayoutParams::default())
}

/// Lay out a growth tree.
///
/// Total and deterministic: the same snapshot, canvas and parameters always
/// give an identical scene graph, and empty collections give empty node lists.
pub fn compute_layout_with(data: &GrowthTreeData, canvas: Canvas, params: &LayoutParams) -> SceneGraph {
    let frame = TrunkFrame::new(canvas, params);

    let rings = data
        .rings
        .iter()
        .enumerate()
        .map(|(i, ring)| place_ring(&frame, params, ring, i, data.rings.len()))
        .collect();

    let skills = data
        .trunk
        .iter()
        .enumerate()
        .map(|(i, skill)| place_skill(&frame, params, skill, i, data.trunk.len()))
        .collect();

    let branches = data
        .branches
        .iter()
        .map(|branch| place_branch(&frame, params, branch))
        .collect();

    let roots = data
        .roots
        .iter()
        .enumerate()
        .map(|(i, root)| place_root(&frame, params, root, i, data.roots.len()))
        .collect();

    let scene = SceneGraph {
        canvas,
        apex: frame.apex(),
        trunk: TrunkNode {
            origin: Vec2::new(frame.left(), frame.top_y),
            width: frame.width,
            height: frame.base_y - frame.top_y,
            corner_radius: params.trunk_corner_radius,
        },
        rings,
        skills,
        branches,
        roots,
    };

    debug!(
        width = canvas.width,
        height = canvas.height,
        rings = scene.rings.len(),
        skills = scene.skills.len(),
        branches = scene.branches.len(),
        leaves = scene.leaf_count(),
        fruit = scene.fruit_count(),
        roots = scene.roots.len(),
        "computed growth tree layout"
    );

    scene
}

/// Trunk geometry shared by every placement step
struct TrunkFrame {
    center_x: f64,
    top_y: f64,
    base_y: f64,
    width: f64,
}

impl TrunkFrame {
    fn new(canvas: Canvas, params: &LayoutParams) -> Self {
        Self {
            center_x: canvas.width / 2.0,
            top_y: params.trunk_top_y,
            base_y: params.trunk_base_y(&canvas),
            width: params.trunk_width,
        }
    }

    fn apex(&self) -> Vec2 {
        Vec2::new(self.center_x, self.top_y)
    }

    fn left(&self) -> f64 {
        self.center_x - self.width / 2.0
    }

    fn height(&self) -> f64 {
        self.base_y - self.top_y
    }
}

/// Ring 0 sits at the trunk base; later terms climb toward the top
fn place_ring(frame: &TrunkFrame, params: &LayoutParams, ring: &Ring, index: usize, count: usize) -> RingNode {
    let y = frame.top_y + frame.height() * (1.0 - index as f64 / count as f64);
    let growth = if ring.growth.is_nan() { 0.0 } else { ring.growth.clamp(0.0, 100.0) };
    let radius = (frame.width + growth / 100.0 * params.ring_growth_span) / 2.0;

    RingNode {
        term: ring.term.clone(),
        year: ring.year,
        growth: ring.growth,
        center: Vec2::new(frame.center_x, y),
        radius,
        color: color_for_growth(ring.growth),
        label_anchor: Vec2::new(frame.center_x + radius + params.ring_label_gap, y),
    }
}

/// `count` skills split the trunk height into `count + 1` gaps, so no label
/// lands on the top or the base
fn place_skill(
    frame: &TrunkFrame,
    params: &LayoutParams,
    skill: &TrunkSkill,
    index: usize,
    count: usize,
) -> SkillNode {
    let y = frame.top_y + frame.height() / (count as f64 + 1.0) * (index as f64 + 1.0);
    let box_x = frame.left() - params.skill_box_offset;
    let text_x = box_x + params.skill_box_width / 2.0;

    SkillNode {
        id: skill.id.clone(),
        label: skill.label.clone(),
        level: skill.level,
        y,
        box_origin: Vec2::new(box_x, y - params.skill_box_height / 2.0),
        box_width: params.skill_box_width,
        box_height: params.skill_box_height,
        color: skill.level.color(),
        label_anchor: Vec2::new(text_x, y + SKILL_LABEL_BASELINE),
        level_anchor: Vec2::new(text_x, y + SKILL_LEVEL_BASELINE),
    }
}

/// Branch length grows with its evidence, so richer domains reach further
fn place_branch(frame: &TrunkFrame, params: &LayoutParams, branch: &Branch) -> BranchNode {
    let apex = frame.apex();
    let length = params.branch_length(branch.artifacts.len(), branch.outcomes.len());
    let position = apex.polar_offset(branch.angle, length);

    let leaves = branch
        .artifacts
        .iter()
        .enumerate()
        .map(|(j, artifact)| place_leaf(params, branch, position, artifact, j))
        .collect();

    let fruit = branch
        .outcomes
        .iter()
        .enumerate()
        .map(|(j, outcome)| place_fruit(params, branch, position, outcome, j))
        .collect();

    BranchNode {
        id: branch.id.clone(),
        domain: branch.domain.clone(),
        angle: branch.angle,
        length,
        start: apex,
        position,
        node_radius: params.branch_node_radius,
        label_anchor: Vec2::new(position.x, position.y + params.branch_label_offset),
        icon: branch.icon(),
        leaves,
        fruit,
    }
}

fn place_leaf(params: &LayoutParams, branch: &Branch, node: Vec2, artifact: &Artifact, index: usize) -> LeafNode {
    let fan = &params.leaf_fan;
    let angle_offset = fan.angle_offset(index, branch.artifacts.len(), params.fan_alignment);
    let angle = branch.angle + angle_offset;
    let distance = fan.distance(index);

    LeafNode {
        id: artifact.id.clone(),
        week: artifact.week,
        level: artifact.level,
        angle,
        angle_offset,
        distance,
        center: node.polar_offset(angle, distance),
        radius_x: params.leaf_radius_x,
        radius_y: params.leaf_radius_y,
        color: artifact.level.color(),
    }
}

/// Same fan as leaves but wider and further out, so fruit clears the leaves
fn place_fruit(params: &LayoutParams, branch: &Branch, node: Vec2, outcome: &Outcome, index: usize) -> FruitNode {
    let fan = &params.fruit_fan;
    let angle_offset = fan.angle_offset(index, branch.outcomes.len(), params.fan_alignment);
    let angle = branch.angle + angle_offset;
    let distance = fan.distance(index);

    FruitNode {
        id: outcome.id.clone(),
        kind: outcome.kind,
        angle,
        angle_offset,
        distance,
        center: node.polar_offset(angle, distance),
        radius: params.fruit_radius,
        icon: outcome.kind.icon(),
    }
}

/// Roots hang from evenly spaced anchors across the trunk base; higher
/// levels reach deeper
fn place_root(frame: &TrunkFrame, params: &LayoutParams, root: &Root, index: usize, count: usize) -> RootNode {
    let x = frame.left() + frame.width / (count as f64 + 1.0) * (index as f64 + 1.0);
    let control_y = frame.base_y + params.root_drop;
    let depth = params.root_base_depth + params.root_depth_per_level * root.level.clamped() as f64;
    let tip = Vec2::new(x + params.root_tip_dx, control_y + depth);

    RootNode {
        id: root.id.clone(),
        label: root.label.clone(),
        level: root.level,
        curve: QuadraticCurve::new(
            Vec2::new(x, frame.base_y),
            Vec2::new(x + params.root_control_dx, control_y),
            tip,
        ),
        depth,
        color: root.level.color(),
        label_anchor: Vec2::new(tip.x, tip.y + ROOT_LABEL_BASELINE),
        level_anchor: Vec2::new(tip.x, tip.y + ROOT_LEVEL_BASELINE),
    }
}
