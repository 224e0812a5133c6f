use tracing::debug;
use wasm_bindgen::prelude::*;

pub mod data;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod math;
pub mod scene;

pub use data::{GrowthTreeData, Level};
pub use error::DataError;
pub use interaction::{resolve_selection, Detail, ScenePicker, Selection, SelectionIndex};
pub use layout::{compute_layout, compute_layout_with, Canvas, LayoutCache, LayoutParams};
pub use scene::{render_svg, SceneGraph, SvgOptions};

use math::Vec2;
use scene::ElementRef;
use data::EntityKind;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Growth tree view state exposed to JavaScript
#[wasm_bindgen]
pub struct GrowthTreeView {
    data: GrowthTreeData,
    /// Id lookup built once per loaded snapshot
    index: SelectionIndex,
    params: LayoutParams,
    canvas: Canvas,
    cache: LayoutCache,
    picker: ScenePicker,
    selection: Selection,
    hovered_branch: Option<String>,
}

#[wasm_bindgen]
impl GrowthTreeView {
    /// Create an empty view for a canvas of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> GrowthTreeView {
        let mut view = Self {
            data: GrowthTreeData::default(),
            index: SelectionIndex::default(),
            params: LayoutParams::default(),
            canvas: Canvas::new(width, height),
            cache: LayoutCache::new(),
            picker: ScenePicker::new(),
            selection: Selection::Closed,
            hovered_branch: None,
        };
        view.refresh();
        view
    }

    /// Load learner data from a YAML document
    #[wasm_bindgen]
    pub fn load_yaml(&mut self, yaml: &str) -> Result<(), JsValue> {
        let data = GrowthTreeData::from_yaml(yaml).map_err(to_js)?;
        self.load(data);
        Ok(())
    }

    /// Load learner data from a JSON document
    #[wasm_bindgen]
    pub fn load_json(&mut self, json: &str) -> Result<(), JsValue> {
        let data = GrowthTreeData::from_json(json).map_err(to_js)?;
        self.load(data);
        Ok(())
    }

    /// Load the built-in demo learner
    #[wasm_bindgen]
    pub fn load_sample(&mut self) {
        self.load(GrowthTreeData::sample());
    }

    /// Override layout constants from a YAML document; missing keys keep
    /// their defaults
    #[wasm_bindgen]
    pub fn set_params_yaml(&mut self, yaml: &str) -> Result<(), JsValue> {
        self.params = LayoutParams::from_yaml(yaml).map_err(to_js)?;
        self.refresh();
        Ok(())
    }

    /// Resize the canvas
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f64, height: f64) {
        self.canvas = Canvas::new(width, height);
        self.refresh();
    }

    /// Current scene graph as JSON
    #[wasm_bindgen]
    pub fn scene_json(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(self.scene())
            .map_err(|e| to_js(DataError::from(e)))
    }

    /// Current scene as an SVG document, with hover highlighting applied
    #[wasm_bindgen]
    pub fn render_svg(&mut self) -> String {
        let options = SvgOptions {
            hovered_branch: self.hovered_branch.clone(),
            class: Some("growth-tree".to_string()),
        };
        render_svg(self.scene(), &options)
    }

    /// Replace the contents of `element` with the rendered SVG
    #[wasm_bindgen]
    pub fn mount(&mut self, element: &web_sys::Element) {
        element.set_inner_html(&self.render_svg());
    }

    /// Handle a click in scene coordinates. Opens the detail panel on the
    /// clicked element and returns its id; clicks on empty canvas return
    /// `None` and leave the selection unchanged.
    #[wasm_bindgen]
    pub fn on_click(&mut self, x: f64, y: f64) -> Option<String> {
        let element = self.element_at(x, y)?;
        self.select(element.id.clone());
        Some(element.id)
    }

    /// Handle mouse move for branch hover. Returns the hovered branch id.
    #[wasm_bindgen]
    pub fn on_mouse_move(&mut self, x: f64, y: f64) -> Option<String> {
        self.hovered_branch = self
            .element_at(x, y)
            .filter(|e| e.kind == EntityKind::Branch)
            .map(|e| e.id);
        self.hovered_branch.clone()
    }

    /// Convert a pointer position on a canvas displayed at
    /// `display_width` x `display_height` into scene coordinates
    #[wasm_bindgen]
    pub fn screen_to_scene(&self, x: f64, y: f64, display_width: f64, display_height: f64) -> Vec<f64> {
        let point = self
            .picker
            .screen_to_scene(x, y, display_width, display_height, self.canvas);
        vec![point.x, point.y]
    }

    #[wasm_bindgen]
    pub fn hover_branch(&mut self, id: Option<String>) {
        self.hovered_branch = id;
    }

    #[wasm_bindgen]
    pub fn hovered_branch(&self) -> Option<String> {
        self.hovered_branch.clone()
    }

    /// Open the detail panel on `id`
    #[wasm_bindgen]
    pub fn select(&mut self, id: String) {
        self.selection = std::mem::take(&mut self.selection).select(id);
    }

    /// Close the detail panel
    #[wasm_bindgen]
    pub fn close(&mut self) {
        self.selection = std::mem::take(&mut self.selection).close();
    }

    #[wasm_bindgen]
    pub fn selected_id(&self) -> Option<String> {
        self.selection.selected_id().map(str::to_string)
    }

    /// Detail for the current selection as JSON, or `None` when the panel is
    /// closed or the id is unknown
    #[wasm_bindgen]
    pub fn selected_detail_json(&self) -> Option<String> {
        let detail = self.detail()?;
        serde_json::to_string(&detail).ok()
    }
}

impl GrowthTreeView {
    /// Replace the loaded snapshot. The selection is kept as a plain id and
    /// resolves against the new data.
    pub fn load(&mut self, data: GrowthTreeData) {
        self.index = SelectionIndex::build(&data);
        debug!(
            entities = data.len(),
            ids = self.index.len(),
            shadowed = self.index.shadowed().len(),
            "loading growth tree"
        );
        self.data = data;
        self.refresh();
    }

    pub fn data(&self) -> &GrowthTreeData {
        &self.data
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Laid out scene for the current data, canvas and params
    pub fn scene(&mut self) -> &SceneGraph {
        self.cache.get_or_compute(&self.data, self.canvas, &self.params)
    }

    pub fn detail(&self) -> Option<Detail> {
        let id = self.selection.selected_id()?;
        self.index.resolve(&self.data, id)
    }

    pub fn layout_cache(&self) -> &LayoutCache {
        &self.cache
    }

    fn element_at(&self, x: f64, y: f64) -> Option<ElementRef> {
        self.picker.pick(Vec2::new(x, y)).map(|hit| hit.element)
    }

    fn refresh(&mut self) {
        let scene = self.cache.get_or_compute(&self.data, self.canvas, &self.params);
        self.picker.set_scene(scene);
    }
}

fn to_js(err: DataError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> GrowthTreeView {
        let mut view = GrowthTreeView::new(1200.0, 800.0);
        view.load_sample();
        view
    }

    #[test]
    fn test_new_view_is_empty() {
        let mut view = GrowthTreeView::new(1200.0, 800.0);
        assert!(view.data().is_empty());
        assert_eq!(view.selected_id(), None);
        assert_eq!(view.scene().branches.len(), 0);
        assert_eq!(view.on_click(600.0, 50.0), None);
    }

    #[test]
    fn test_click_branch_opens_detail() {
        let mut view = sample_view();
        let water = view.scene().branches[3].position;
        let id = view.on_click(water.x + 30.0, water.y);
        assert_eq!(id.as_deref(), Some("water"));
        assert_eq!(view.selected_id().as_deref(), Some("water"));

        let detail = view.detail().unwrap();
        assert_eq!(detail.kind(), EntityKind::Branch);
        let json = view.selected_detail_json().unwrap();
        assert!(json.contains(r#""kind":"branch""#));
        assert!(json.contains(r#""artifacts":[]"#));
    }

    #[test]
    fn test_click_empty_keeps_selection() {
        let mut view = sample_view();
        view.select("o1".to_string());
        assert_eq!(view.on_click(5.0, 5.0), None);
        assert_eq!(view.selected_id().as_deref(), Some("o1"));
        view.close();
        assert_eq!(view.selected_id(), None);
        assert_eq!(view.selected_detail_json(), None);
    }

    #[test]
    fn test_unknown_selection_resolves_to_none() {
        let mut view = sample_view();
        view.select("nope".to_string());
        assert!(view.selection().is_open());
        assert_eq!(view.detail(), None);
    }

    #[test]
    fn test_hover_only_tracks_branches() {
        let mut view = sample_view();
        let robotics = view.scene().branches[1].position;
        assert_eq!(view.on_mouse_move(robotics.x, robotics.y).as_deref(), Some("robotics"));
        assert!(view.render_svg().contains("#15bddb"));

        let skill = view.scene().skills[0].clone();
        assert_eq!(view.on_mouse_move(skill.box_origin.x + 2.0, skill.y), None);
        assert_eq!(view.hovered_branch(), None);
    }

    #[test]
    fn test_load_yaml_and_json() {
        let mut view = GrowthTreeView::new(1200.0, 800.0);
        let json = serde_json::to_string(&GrowthTreeData::sample()).unwrap();
        view.load_json(&json).unwrap();
        assert_eq!(view.data(), &GrowthTreeData::sample());

        let yaml = serde_yaml::to_string(&GrowthTreeData::sample()).unwrap();
        let mut other = GrowthTreeView::new(1200.0, 800.0);
        other.load_yaml(&yaml).unwrap();
        assert_eq!(other.scene(), view.scene());
    }

    #[test]
    fn test_scene_is_cached_between_renders() {
        let mut view = sample_view();
        let first = view.render_svg();
        let second = view.render_svg();
        assert_eq!(first, second);
        // load_sample lays out once, both renders hit
        assert_eq!(view.layout_cache().misses(), 2);
        assert!(view.layout_cache().hits() >= 2);
    }

    #[test]
    fn test_resize_relays_out() {
        let mut view = sample_view();
        view.resize(1000.0, 600.0);
        let scene = view.scene();
        assert_eq!(scene.apex.x, 500.0);
        assert!(view.scene_json().unwrap().contains(r#""width":1000.0"#));
    }

    #[test]
    fn test_screen_to_scene() {
        let view = GrowthTreeView::new(1200.0, 800.0);
        assert_eq!(view.screen_to_scene(300.0, 200.0, 600.0, 400.0), vec![600.0, 400.0]);
        assert_eq!(view.screen_to_scene(3.0, 4.0, 0.0, 400.0), vec![3.0, 4.0]);
    }
}
