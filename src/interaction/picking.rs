use crate::math::Vec2;
use crate::layout::Canvas;
use crate::scene::{ElementRef, SceneGraph, Shape};

/// Information about a pointer hit on a scene element
#[derive(Debug, Clone, PartialEq)]
pub struct HitInfo {
    pub element: ElementRef,
    /// Distance from the pointer to the hit shape's reference point
    pub distance: f64,
}

/// Point picking for selecting scene elements
pub struct ScenePicker {
    /// Clickable shapes in paint order
    shapes: Vec<Shape>,
    /// Slack around thin strokes (roots, text baselines), in canvas units
    pub tolerance: f64,
}

impl Default for ScenePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenePicker {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            tolerance: 4.0,
        }
    }

    /// Picker over a freshly laid out scene
    pub fn for_scene(scene: &SceneGraph) -> Self {
        let mut picker = Self::new();
        picker.set_scene(scene);
        picker
    }

    /// Replace the pickable shapes; decorations are dropped
    pub fn set_scene(&mut self, scene: &SceneGraph) {
        self.shapes = scene
            .shapes(None)
            .into_iter()
            .filter(|s| s.element.is_some())
            .collect();
    }

    /// Topmost element under `point`, or `None` for empty canvas
    pub fn pick(&self, point: Vec2) -> Option<HitInfo> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.primitive.contains(point, self.tolerance))
            .and_then(|s| {
                let element = s.element.clone()?;
                Some(HitInfo {
                    distance: point.distance(&reference_point(s)),
                    element,
                })
            })
    }

    /// Convert canvas-element pixel coordinates to scene coordinates when
    /// the canvas is displayed at a different size than its view box
    pub fn screen_to_scene(
        &self,
        screen_x: f64,
        screen_y: f64,
        display_width: f64,
        display_height: f64,
        canvas: Canvas,
    ) -> Vec2 {
        if display_width <= 0.0 || display_height <= 0.0 {
            return Vec2::new(screen_x, screen_y);
        }
        Vec2::new(
            screen_x * canvas.width / display_width,
            screen_y * canvas.height / display_height,
        )
    }

}

fn reference_point(shape: &Shape) -> Vec2 {
    use crate::scene::Primitive;

    match &shape.primitive {
        Primitive::Circle { center, .. }
        | Primitive::Ellipse { center, .. }
        | Primitive::Icon { center, .. } => *center,
        Primitive::Rect { origin, width, height, .. } => {
            Vec2::new(origin.x + width / 2.0, origin.y + height / 2.0)
        }
        Primitive::Line { from, to, .. } => from.lerp(to, 0.5),
        Primitive::Path { curve, .. } => curve.evaluate(0.5),
        Primitive::Text { anchor, .. } => *anchor,
    }
}
