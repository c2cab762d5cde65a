//! Browser-only smoke checks, run with `wasm-pack test --headless`.
#![cfg(target_arch = "wasm32")]

use northbank_web::context::toast::ToastProviderProps;
use northbank_web::context::ToastProvider;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn toast_overlay_mounts_above_the_tree() {
    yew::Renderer::<ToastProvider>::with_props(ToastProviderProps {
        children: Default::default(),
    })
    .render();
    let document = web_sys::window().unwrap().document().unwrap();
    assert!(document
        .query_selector(".toast-stack")
        .unwrap()
        .is_some());
}
