//! Browser smoke tests for the DOM layer. Run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use web_sys::{Document, Element};

use diffhide::dom::rows;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn make_row(document: &Document, path: &str) -> Element {
    let row = document.create_element("li").unwrap();
    row.set_attribute("class", "js-tree-node").unwrap();
    row.set_attribute("data-tree-entry-type", "file").unwrap();
    let span = document.create_element("span").unwrap();
    span.set_attribute("data-filterable-item-text", "").unwrap();
    span.set_text_content(Some(path));
    row.append_child(&span).unwrap();
    row
}

fn make_tree(document: &Document) -> Element {
    let wrapper = document.create_element("div").unwrap();
    let tree = document.create_element("ul").unwrap();
    wrapper.append_child(&tree).unwrap();
    document.body().unwrap().append_child(&wrapper).unwrap();
    tree
}

#[wasm_bindgen_test]
fn holding_area_is_created_once() {
    let document = document();
    let tree = make_tree(&document);
    let first = rows::ensure_holding_area(&document, &tree).unwrap();
    let second = rows::ensure_holding_area(&document, &tree).unwrap();
    assert!(first.is_same_node(Some(second.as_ref())));
    first.parent_element().unwrap().remove();
}

#[wasm_bindgen_test]
fn controls_attach_exactly_once_per_row() {
    let document = document();
    let tree = make_tree(&document);
    let row = make_row(&document, "src/lib.rs");
    tree.append_child(&row).unwrap();

    rows::ensure_control(&document, &row);
    rows::ensure_control(&document, &row);
    let buttons = row.query_selector_all("button").unwrap();
    assert_eq!(buttons.length(), 1);
    tree.parent_element().unwrap().remove();
}

#[wasm_bindgen_test]
fn unhide_reinserts_in_path_order() {
    let document = document();
    let tree = make_tree(&document);
    for path in ["a.txt", "m.txt", "z.txt"] {
        tree.append_child(&make_row(&document, path)).unwrap();
    }
    let row = make_row(&document, "b.txt");
    rows::insert_sorted(&tree, &row, "b.txt");

    let paths: Vec<String> = rows::file_rows_in(&tree)
        .into_iter()
        .map(|r| r.path)
        .collect();
    assert_eq!(paths, vec!["a.txt", "b.txt", "m.txt", "z.txt"]);
    tree.parent_element().unwrap().remove();
}
