pub mod graph;
pub mod primitives;
pub mod svg;

pub use graph::{BranchNode, FruitNode, LeafNode, RingNode, RootNode, SceneGraph, SkillNode, TrunkNode};
pub use primitives::{ElementRef, Primitive, Rotation, Shape, Style, TextAlign, TextStyle};
pub use svg::{render_svg, SvgDocument, SvgOptions};
