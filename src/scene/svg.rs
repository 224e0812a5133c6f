//! SVG serialization of a scene graph
//!
//! Icons are emitted as `<use href="#icon-NAME">` references; the host
//! page supplies the matching `<symbol>` sprites.

use std::fmt::{self, Write};
use super::graph::SceneGraph;
use super::primitives::{ElementRef, Primitive, Shape, Style, TextAlign};

/// Presentation state that does not affect layout
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgOptions {
    pub hovered_branch: Option<String>,
    /// Extra class on the root `<svg>` element
    pub class: Option<String>,
}

/// Render the scene as a standalone SVG document
pub fn render_svg(scene: &SceneGraph, options: &SvgOptions) -> String {
    SvgDocument { scene, options }.to_string()
}

pub struct SvgDocument<'a> {
    pub scene: &'a SceneGraph,
    pub options: &'a SvgOptions,
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let canvas = self.scene.canvas;
        write!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}""#,
            w = canvas.width,
            h = canvas.height
        )?;
        if let Some(class) = &self.options.class {
            write!(f, r#" class="{}""#, escape_xml(class))?;
        }
        f.write_str(">")?;

        let shapes = self.scene.shapes(self.options.hovered_branch.as_deref());
        let mut open: Option<&ElementRef> = None;

        for shape in &shapes {
            if shape.element.as_ref() != open {
                if open.is_some() {
                    f.write_str("</g>")?;
                }
                if let Some(element) = &shape.element {
                    write!(
                        f,
                        r#"<g data-kind="{}" data-id="{}" style="cursor:pointer">"#,
                        element.kind,
                        escape_xml(&element.id)
                    )?;
                }
                open = shape.element.as_ref();
            }
            write_shape(f, shape)?;
        }
        if open.is_some() {
            f.write_str("</g>")?;
        }

        f.write_str("</svg>")
    }
}

fn write_shape(f: &mut impl Write, shape: &Shape) -> fmt::Result {
    match &shape.primitive {
        Primitive::Circle { center, radius, style } => {
            write!(f, r#"<circle cx="{}" cy="{}" r="{}""#, center.x, center.y, radius)?;
            write_style(f, style)?;
            f.write_str("/>")
        }
        Primitive::Ellipse { center, radius_x, radius_y, rotation, style } => {
            write!(
                f,
                r#"<ellipse cx="{cx}" cy="{cy}" rx="{}" ry="{}" transform="rotate({} {cx} {cy})""#,
                radius_x,
                radius_y,
                rotation,
                cx = center.x,
                cy = center.y
            )?;
            write_style(f, style)?;
            f.write_str("/>")
        }
        Primitive::Rect { origin, width, height, corner_radius, style } => {
            write!(
                f,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}""#,
                origin.x, origin.y, width, height, corner_radius
            )?;
            write_style(f, style)?;
            f.write_str("/>")
        }
        Primitive::Line { from, to, style } => {
            write!(f, r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#, from.x, from.y, to.x, to.y)?;
            write_style(f, style)?;
            f.write_str("/>")
        }
        Primitive::Path { curve, style } => {
            write!(f, r#"<path d="{}""#, curve.to_path_data())?;
            write_style(f, style)?;
            f.write_str("/>")
        }
        Primitive::Text { anchor, text, style, rotation } => {
            write!(
                f,
                r#"<text x="{}" y="{}" font-size="{}" fill="{}""#,
                anchor.x,
                anchor.y,
                style.size,
                style.color.hex()
            )?;
            match style.align {
                TextAlign::Start => {}
                TextAlign::Middle => f.write_str(r#" text-anchor="middle""#)?,
                TextAlign::End => f.write_str(r#" text-anchor="end""#)?,
            }
            if style.bold {
                f.write_str(r#" font-weight="bold""#)?;
            }
            if style.monospace {
                f.write_str(r#" font-family="monospace""#)?;
            }
            if let Some(r) = rotation {
                write!(f, r#" transform="rotate({} {} {})""#, r.degrees, r.pivot.x, r.pivot.y)?;
            }
            write!(f, ">{}</text>", escape_xml(text))
        }
        Primitive::Icon { center, size, name, color } => write!(
            f,
            r##"<use href="#icon-{}" x="{}" y="{}" width="{s}" height="{s}" color="{}"/>"##,
            escape_xml(name),
            center.x - size / 2.0,
            center.y - size / 2.0,
            color.hex(),
            s = size
        ),
    }
}

fn write_style(f: &mut impl Write, style: &Style) -> fmt::Result {
    match style.fill {
        Some(fill) => write!(f, r#" fill="{}""#, fill.hex())?,
        None => f.write_str(r#" fill="none""#)?,
    }
    if style.fill_opacity < 1.0 {
        write!(f, r#" fill-opacity="{}""#, style.fill_opacity)?;
    }
    if let Some(stroke) = style.stroke {
        write!(f, r#" stroke="{}" stroke-width="{}""#, stroke.hex(), style.stroke_width)?;
    }
    if style.opacity < 1.0 {
        write!(f, r#" opacity="{}""#, style.opacity)?;
    }
    Ok(())
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
