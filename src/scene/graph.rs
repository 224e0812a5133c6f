use serde::Serialize;
use crate::data::{EntityKind, Level, OutcomeKind};
use crate::layout::palette::Color;
use crate::layout::params::Canvas;
use crate::math::{QuadraticCurve, Vec2};
use super::primitives::{ElementRef, Primitive, Rotation, Shape, Style, TextStyle};

/// Term ring drawn around the trunk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingNode {
    pub term: String,
    pub year: i32,
    pub growth: f64,
    pub center: Vec2,
    /// Display radius, not a hit-test radius
    pub radius: f64,
    pub color: Color,
    pub label_anchor: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrunkNode {
    pub origin: Vec2,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

/// Durable skill label box to the left of the trunk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillNode {
    pub id: String,
    pub label: String,
    pub level: Level,
    /// Vertical position along the trunk
    pub y: f64,
    pub box_origin: Vec2,
    pub box_width: f64,
    pub box_height: f64,
    pub color: Color,
    pub label_anchor: Vec2,
    pub level_anchor: Vec2,
}

/// Artifact leaf
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafNode {
    pub id: String,
    pub week: u32,
    pub level: Level,
    /// Absolute direction from the branch node, degrees
    pub angle: f64,
    /// Offset from the branch angle, degrees
    pub angle_offset: f64,
    pub distance: f64,
    pub center: Vec2,
    pub radius_x: f64,
    pub radius_y: f64,
    pub color: Color,
}

/// Outcome fruit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FruitNode {
    pub id: String,
    pub kind: OutcomeKind,
    pub angle: f64,
    pub angle_offset: f64,
    pub distance: f64,
    pub center: Vec2,
    pub radius: f64,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchNode {
    pub id: String,
    pub domain: String,
    pub angle: f64,
    pub length: f64,
    /// Always the trunk apex
    pub start: Vec2,
    /// Domain node center
    pub position: Vec2,
    pub node_radius: f64,
    pub label_anchor: Vec2,
    pub icon: &'static str,
    pub leaves: Vec<LeafNode>,
    pub fruit: Vec<FruitNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootNode {
    pub id: String,
    pub label: String,
    pub level: Level,
    pub curve: QuadraticCurve,
    pub depth: f64,
    pub color: Color,
    pub label_anchor: Vec2,
    pub level_anchor: Vec2,
}

/// Positioned growth tree, ready to paint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneGraph {
    pub canvas: Canvas,
    pub apex: Vec2,
    pub trunk: TrunkNode,
    pub rings: Vec<RingNode>,
    pub skills: Vec<SkillNode>,
    pub branches: Vec<BranchNode>,
    pub roots: Vec<RootNode>,
}

impl SceneGraph {
    pub fn leaf_count(&self) -> usize {
        self.branches.iter().map(|b| b.leaves.len()).sum()
    }

    pub fn fruit_count(&self) -> usize {
        self.branches.iter().map(|b| b.fruit.len()).sum()
    }

    pub fn leaves(&self) -> impl Iterator<Item = &LeafNode> {
        self.branches.iter().flat_map(|b| b.leaves.iter())
    }

    pub fn fruit(&self) -> impl Iterator<Item = &FruitNode> {
        self.branches.iter().flat_map(|b| b.fruit.iter())
    }

    /// Every primitive in paint order: rings, trunk, skills, branches with
    /// their leaves and fruit, then roots. `hovered_branch` only changes
    /// styling, never geometry.
    pub fn shapes(&self, hovered_branch: Option<&str>) -> Vec<Shape> {
        let mut shapes = Vec::new();

        for ring in &self.rings {
            shapes.extend(ring.primitives().into_iter().map(Shape::decoration));
        }

        shapes.push(Shape::decoration(self.trunk.primitive()));

        for skill in &self.skills {
            let element = ElementRef::new(EntityKind::Skill, &skill.id);
            shapes.extend(skill.primitives().into_iter().map(|p| Shape::clickable(&element, p)));
        }

        for branch in &self.branches {
            let hovered = hovered_branch == Some(branch.id.as_str());
            let element = ElementRef::new(EntityKind::Branch, &branch.id);
            shapes.push(Shape::decoration(branch.line(hovered)));
            shapes.extend(branch.node_primitives(hovered).into_iter().map(|p| Shape::clickable(&element, p)));

            for leaf in &branch.leaves {
                let element = ElementRef::new(EntityKind::Artifact, &leaf.id);
                shapes.extend(leaf.primitives().into_iter().map(|p| Shape::clickable(&element, p)));
            }
            for fruit in &branch.fruit {
                let element = ElementRef::new(EntityKind::Outcome, &fruit.id);
                shapes.extend(fruit.primitives().into_iter().map(|p| Shape::clickable(&element, p)));
            }
        }

        for root in &self.roots {
            let element = ElementRef::new(EntityKind::Root, &root.id);
            shapes.extend(root.primitives().into_iter().map(|p| Shape::clickable(&element, p)));
        }

        shapes
    }
}

impl RingNode {
    pub fn label(&self) -> String {
        format!("{} {} ({}%)", self.term, self.year, self.growth)
    }

    pub fn primitives(&self) -> Vec<Primitive> {
        vec![
            Primitive::Circle {
                center: self.center,
                radius: self.radius,
                style: Style::stroked(self.color, 2.0).with_opacity(0.6),
            },
            Primitive::Text {
                anchor: self.label_anchor,
                text: self.label(),
                style: TextStyle::new(12.0, Color::Black).monospace(),
                rotation: None,
            },
        ]
    }
}

impl TrunkNode {
    pub fn primitive(&self) -> Primitive {
        Primitive::Rect {
            origin: self.origin,
            width: self.width,
            height: self.height,
            corner_radius: self.corner_radius,
            style: Style::filled(Color::OrangeDark).with_stroke(Color::Orange, 3.0),
        }
    }
}

impl SkillNode {
    pub fn primitives(&self) -> Vec<Primitive> {
        vec![
            Primitive::Rect {
                origin: self.box_origin,
                width: self.box_width,
                height: self.box_height,
                corner_radius: 4.0,
                style: Style::filled(self.color).with_fill_opacity(0.8),
            },
            Primitive::Text {
                anchor: self.label_anchor,
                text: self.label.clone(),
                style: TextStyle::new(11.0, Color::White).centered().bold(),
                rotation: None,
            },
            Primitive::Text {
                anchor: self.level_anchor,
                text: self.level.label().to_string(),
                style: TextStyle::new(9.0, Color::White).centered(),
                rotation: None,
            },
        ]
    }
}

impl BranchNode {
    pub fn line(&self, hovered: bool) -> Primitive {
        Primitive::Line {
            from: self.start,
            to: self.position,
            style: Style::stroked(Color::Orange, 4.0).with_opacity(if hovered { 1.0 } else { 0.6 }),
        }
    }

    pub fn node_primitives(&self, hovered: bool) -> Vec<Primitive> {
        let fill = if hovered { Color::Cyan } else { Color::Lime };
        vec![
            Primitive::Circle {
                center: self.position,
                radius: self.node_radius,
                style: Style::filled(fill)
                    .with_fill_opacity(0.9)
                    .with_stroke(Color::Black, 2.0),
            },
            Primitive::Icon {
                center: self.position,
                size: 24.0,
                name: self.icon.to_string(),
                color: Color::White,
            },
            Primitive::Text {
                anchor: self.label_anchor,
                text: self.domain.clone(),
                style: TextStyle::new(12.0, Color::Black).centered().bold(),
                rotation: None,
            },
        ]
    }
}

impl LeafNode {
    pub fn primitives(&self) -> Vec<Primitive> {
        let rotation = Rotation {
            degrees: self.angle,
            pivot: self.center,
        };
        vec![
            Primitive::Ellipse {
                center: self.center,
                radius_x: self.radius_x,
                radius_y: self.radius_y,
                rotation: self.angle,
                style: Style::filled(self.color)
                    .with_fill_opacity(0.7)
                    .with_stroke(Color::Black, 1.5),
            },
            Primitive::Text {
                anchor: Vec2::new(self.center.x, self.center.y + 4.0),
                text: format!("W{}", self.week),
                style: TextStyle::new(10.0, Color::White).centered().bold(),
                rotation: Some(rotation),
            },
        ]
    }
}

impl FruitNode {
    pub fn primitives(&self) -> Vec<Primitive> {
        vec![
            Primitive::Circle {
                center: self.center,
                radius: self.radius,
                style: Style::filled(Color::Purple).with_stroke(Color::Yellow, 2.0),
            },
            Primitive::Icon {
                center: self.center,
                size: 16.0,
                name: self.icon.to_string(),
                color: Color::White,
            },
        ]
    }
}

impl RootNode {
    pub fn primitives(&self) -> Vec<Primitive> {
        vec![
            Primitive::Path {
                curve: self.curve,
                style: Style::stroked(self.color, 3.0).with_opacity(0.7),
            },
            Primitive::Text {
                anchor: self.label_anchor,
                text: self.label.clone(),
                style: TextStyle::new(10.0, self.color).bold(),
                rotation: None,
            },
            Primitive::Text {
                anchor: self.level_anchor,
                text: self.level.label().to_string(),
                style: TextStyle::new(8.0, Color::Black),
                rotation: None,
            },
        ]
    }
}
