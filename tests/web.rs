//! Browser tests for the DOM widget: `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use floating_tags_engine::TagsWidget;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn container(width: u32, height: u32) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let el: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    el.style()
        .set_property("width", &format!("{}px", width))
        .unwrap();
    el.style()
        .set_property("height", &format!("{}px", height))
        .unwrap();
    el.style().set_property("position", "relative").unwrap();
    document.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn mount_creates_one_element_per_tag_and_unmount_removes_them() {
    let host = container(800, 400);
    let widget = TagsWidget::new(host.clone(), None, None, 3).unwrap();
    assert_eq!(host.child_element_count(), 10);

    widget.start().unwrap();
    assert!(widget.running());
    widget.stop();
    assert!(!widget.running());

    drop(widget);
    assert_eq!(host.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn zero_sized_container_defers_until_resize() {
    let host = container(0, 0);
    let widget = TagsWidget::new(host.clone(), None, None, 3).unwrap();
    widget.start().unwrap();
    assert!(!widget.running());
    assert_eq!(host.child_element_count(), 0);

    host.style().set_property("width", "600px").unwrap();
    host.style().set_property("height", "300px").unwrap();
    assert!(widget.resize().unwrap());
    assert!(widget.running());
    assert_eq!(host.child_element_count(), 10);
}

#[wasm_bindgen_test]
fn relabel_rebuilds_elements() {
    let host = container(800, 400);
    let widget = TagsWidget::new(host.clone(), None, None, 3).unwrap();
    widget
        .set_tags(r##"[{"text": "Vue", "color": "#8B5CF6", "textColor": "#FFFFFF"}]"##.to_string())
        .unwrap();
    assert_eq!(host.child_element_count(), 1);
    assert_eq!(host.text_content().unwrap(), "Vue");
}
