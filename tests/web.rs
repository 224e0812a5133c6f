#![cfg(target_arch = "wasm32")]

use growth_tree::GrowthTreeView;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_mount_renders_svg() {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap();

    let mut view = GrowthTreeView::new(1200.0, 800.0);
    view.load_sample();
    view.mount(&host);

    let html = host.inner_html();
    assert!(html.starts_with("<svg"));
    assert_eq!(host.query_selector_all("g[data-kind]").unwrap().length(), 21);
}

#[wasm_bindgen_test]
fn test_bad_yaml_is_reported() {
    let mut view = GrowthTreeView::new(1200.0, 800.0);
    let err = view.load_yaml("branches: [").unwrap_err();
    assert!(err.as_string().unwrap().starts_with("YAML parse error"));
}

#[wasm_bindgen_test]
fn test_click_selects_fruit() {
    let mut view = GrowthTreeView::new(1200.0, 800.0);
    view.load_sample();
    let fruit = view.scene().fruit().next().unwrap().center;
    assert_eq!(view.on_click(fruit.x, fruit.y).as_deref(), Some("o1"));
    let json = view.selected_detail_json().unwrap();
    assert!(json.contains(r#""kind":"outcome""#));
    assert!(json.contains(r#""type":"credential""#));
}
