#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod context;
pub mod pages;
pub mod routes;
pub mod state;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("northbank portal starting against {}", northbank_api::config::api_url());
    yew::Renderer::<app::App>::new().render();
}
