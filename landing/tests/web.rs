//! DOM-backed checks, run with `wasm-pack test --headless --chrome -- --no-default-features --features csr`.

#![cfg(target_arch = "wasm32")]

use smartbudget_landing::browser::DocumentSections;
use smartbudget_landing::state::{SectionLocator, navigate_to_section};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn add_section(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("section").unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
}

#[wasm_bindgen_test]
fn finds_sections_present_in_document() {
    add_section("features");

    assert!(DocumentSections.scroll_into_view("features"));
    assert!(!DocumentSections.scroll_into_view("pricing"));
}

#[wasm_bindgen_test]
fn navigation_against_real_dom() {
    add_section("download");

    assert!(!navigate_to_section(true, &DocumentSections, "download"));
    assert!(navigate_to_section(true, &DocumentSections, "testimonials"));
}
