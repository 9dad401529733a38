//! Browser tests: `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use djchat::App;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_app() -> web_sys::HtmlElement {
    window()
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some("/"))
        .unwrap();

    let document = document();
    let root = document
        .create_element("div")
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>();
    document.body().unwrap().append_child(&root).unwrap();
    mount_to(root.clone(), App).forget();
    root
}

#[wasm_bindgen_test]
fn renders_title_link_to_root() {
    let root = mount_app();
    let link = root.query_selector("header a").unwrap().unwrap();
    assert_eq!(link.get_attribute("href").as_deref(), Some("/"));
    assert!(link.text_content().unwrap().contains("Django Chat"));
    root.remove();
}

#[wasm_bindgen_test]
fn drawer_lists_hundred_entries_while_closed() {
    let root = mount_app();
    let entries = root
        .query_selector_all("nav[aria-label='navigation drawer'] p")
        .unwrap();
    assert_eq!(entries.length(), 100);
    assert_eq!(entries.item(0).unwrap().text_content().as_deref(), Some("1"));
    assert_eq!(entries.item(99).unwrap().text_content().as_deref(), Some("100"));

    let drawer = root
        .query_selector("nav[aria-label='navigation drawer']")
        .unwrap()
        .unwrap()
        .parent_element()
        .unwrap();
    assert_eq!(drawer.get_attribute("aria-hidden").as_deref(), Some("true"));
    root.remove();
}

#[wasm_bindgen_test]
fn drawer_is_not_nested_in_header() {
    let root = mount_app();
    assert!(root.query_selector("header").unwrap().is_some());
    let nav = root
        .query_selector("nav[aria-label='navigation drawer']")
        .unwrap()
        .unwrap();
    assert!(nav.closest("header").unwrap().is_none());
    assert!(root
        .query_selector("header nav[aria-label='navigation drawer']")
        .unwrap()
        .is_none());
    root.remove();
}

#[wasm_bindgen_test]
fn theme_stylesheet_is_injected() {
    let root = mount_app();
    let styles = root.query_selector_all("style").unwrap();
    let css: String = (0..styles.length())
        .filter_map(|i| styles.item(i))
        .filter_map(|node| node.text_content())
        .collect();
    assert!(css.contains(":root { --djchat-app-bar-height: 50px; }"));
    assert!(css.contains(".djchat-typography-h6"));
    root.remove();
}
