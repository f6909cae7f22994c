use wasm_bindgen::prelude::wasm_bindgen;
use yew::Renderer;

pub mod api;
pub mod components;
pub mod format;
pub mod hooks;
pub mod state;

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    Renderer::<components::App>::new().render();
}
