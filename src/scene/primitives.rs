use serde::{Deserialize, Serialize};
use crate::data::EntityKind;
use crate::layout::palette::Color;
use crate::math::{distance_to_segment, QuadraticCurve, Vec2};

/// Fill and stroke for a primitive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub fill: Option<Color>,
    pub fill_opacity: f64,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl Style {
    pub fn filled(fill: Color) -> Self {
        Self {
            fill: Some(fill),
            fill_opacity: 1.0,
            stroke: None,
            stroke_width: 0.0,
            opacity: 1.0,
        }
    }

    pub fn stroked(stroke: Color, width: f64) -> Self {
        Self {
            fill: None,
            fill_opacity: 1.0,
            stroke: Some(stroke),
            stroke_width: width,
            opacity: 1.0,
        }
    }

    pub fn with_stroke(mut self, stroke: Color, width: f64) -> Self {
        self.stroke = Some(stroke);
        self.stroke_width = width;
        self
    }

    pub fn with_fill_opacity(mut self, fill_opacity: f64) -> Self {
        self.fill_opacity = fill_opacity;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Start,
    Middle,
    End,
}

/// Rotation in degrees about a pivot point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub degrees: f64,
    pub pivot: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f64,
    pub color: Color,
    pub align: TextAlign,
    pub bold: bool,
    pub monospace: bool,
}

impl TextStyle {
    pub fn new(size: f64, color: Color) -> Self {
        Self {
            size,
            color,
            align: TextAlign::Start,
            bold: false,
            monospace: false,
        }
    }

    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Middle;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn monospace(mut self) -> Self {
        self.monospace = true;
        self
    }
}

/// Drawable vocabulary of the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Primitive {
    Circle {
        center: Vec2,
        radius: f64,
        style: Style,
    },
    /// Ellipse whose x radius is turned by `rotation` degrees about its center
    Ellipse {
        center: Vec2,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        style: Style,
    },
    Rect {
        origin: Vec2,
        width: f64,
        height: f64,
        corner_radius: f64,
        style: Style,
    },
    Line {
        from: Vec2,
        to: Vec2,
        style: Style,
    },
    Path {
        curve: QuadraticCurve,
        style: Style,
    },
    /// `anchor` is on the text baseline
    Text {
        anchor: Vec2,
        text: String,
        style: TextStyle,
        rotation: Option<Rotation>,
    },
    /// Named glyph from the host's icon set, drawn in a `size` square
    Icon {
        center: Vec2,
        size: f64,
        name: String,
        color: Color,
    },
}

/// Rough glyph advance as a fraction of font size
const GLYPH_WIDTH: f64 = 0.6;
/// Samples used to approximate curves when hit-testing
const CURVE_SAMPLES: usize = 24;

impl Primitive {
    /// Whether `point` falls on this primitive. Strokes-only shapes accept
    /// points within `tolerance` of the stroke.
    pub fn contains(&self, point: Vec2, tolerance: f64) -> bool {
        match self {
            Primitive::Circle { center, radius, .. } => point.distance(center) <= *radius,
            Primitive::Ellipse { center, radius_x, radius_y, rotation, .. } => {
                if *radius_x <= 0.0 || *radius_y <= 0.0 {
                    return false;
                }
                let local = (point - *center).rotate_degrees(-rotation);
                (local.x / radius_x).powi(2) + (local.y / radius_y).powi(2) <= 1.0
            }
            Primitive::Rect { origin, width, height, .. } => {
                point.x >= origin.x
                    && point.x <= origin.x + width
                    && point.y >= origin.y
                    && point.y <= origin.y + height
            }
            Primitive::Line { from, to, style } => {
                distance_to_segment(point, *from, *to) <= (style.stroke_width / 2.0).max(tolerance)
            }
            Primitive::Path { curve, style } => {
                curve.distance_to(point, CURVE_SAMPLES) <= (style.stroke_width / 2.0).max(tolerance)
            }
            Primitive::Text { anchor, text, style, rotation } => {
                let local = match rotation {
                    Some(r) => (point - r.pivot).rotate_degrees(-r.degrees) + r.pivot,
                    None => point,
                };
                let width = text.chars().count() as f64 * style.size * GLYPH_WIDTH;
                let left = match style.align {
                    TextAlign::Start => anchor.x,
                    TextAlign::Middle => anchor.x - width / 2.0,
                    TextAlign::End => anchor.x - width,
                };
                local.x >= left
                    && local.x <= left + width
                    && local.y >= anchor.y - style.size
                    && local.y <= anchor.y + style.size * 0.25
            }
            Primitive::Icon { center, size, .. } => {
                (point.x - center.x).abs() <= size / 2.0 && (point.y - center.y).abs() <= size / 2.0
            }
        }
    }
}

/// Domain entity a clickable shape stands for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementRef {
    pub kind: EntityKind,
    pub id: String,
}

impl ElementRef {
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }
}

/// A primitive in paint order, optionally bound to the entity it depicts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub element: Option<ElementRef>,
    pub primitive: Primitive,
}

impl Shape {
    pub fn decoration(primitive: Primitive) -> Self {
        Self { element: None, primitive }
    }

    pub fn clickable(element: &ElementRef, primitive: Primitive) -> Self {
        Self {
            element: Some(element.clone()),
            primitive,
        }
    }
}
