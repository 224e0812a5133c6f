use tracing::trace;
use crate::data::{Branch, GrowthTreeData, Ring};
use crate::scene::SceneGraph;
use super::engine::compute_layout_with;
use super::params::{Canvas, LayoutParams};

struct CachedLayout {
    data: GrowthTreeData,
    canvas: Canvas,
    params: LayoutParams,
    scene: SceneGraph,
}

impl CachedLayout {
    fn matches(&self, data: &GrowthTreeData, canvas: Canvas, params: &LayoutParams) -> bool {
        self.canvas == canvas && self.params == *params && same_snapshot(&self.data, data)
    }
}

/// Snapshot equality with floats compared by bit pattern, so a NaN ring
/// growth or branch angle still matches itself
fn same_snapshot(a: &GrowthTreeData, b: &GrowthTreeData) -> bool {
    a.roots == b.roots
        && a.trunk == b.trunk
        && a.rings.len() == b.rings.len()
        && a.rings.iter().zip(&b.rings).all(|(x, y)| same_ring(x, y))
        && a.branches.len() == b.branches.len()
        && a.branches.iter().zip(&b.branches).all(|(x, y)| same_branch(x, y))
}

fn same_ring(a: &Ring, b: &Ring) -> bool {
    a.term == b.term && a.year == b.year && a.growth.to_bits() == b.growth.to_bits()
}

fn same_branch(a: &Branch, b: &Branch) -> bool {
    a.id == b.id
        && a.domain == b.domain
        && a.angle.to_bits() == b.angle.to_bits()
        && a.artifacts == b.artifacts
        && a.outcomes == b.outcomes
}

/// Memoizes the most recent layout.
///
/// Layout is pure, so an input equal to the previous one reuses the
/// previous scene graph.
#[derive(Default)]
pub struct LayoutCache {
    last: Option<CachedLayout>,
    hits: u64,
    misses: u64,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, data: &GrowthTreeData, canvas: Canvas, params: &LayoutParams) -> &SceneGraph {
        if self.last.as_ref().is_some_and(|c| c.matches(data, canvas, params)) {
            self.hits += 1;
            trace!(hits = self.hits, "layout cache hit");
        } else {
            self.misses += 1;
            self.last = None;
        }

        let cached = self.last.get_or_insert_with(|| CachedLayout {
            data: data.clone(),
            canvas,
            params: params.clone(),
            scene: compute_layout_with(data, canvas, params),
        });
        &cached.scene
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
