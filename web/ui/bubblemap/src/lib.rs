mod app;
mod components;
mod config;
mod state;

use cfg_if::cfg_if;
use wasm_bindgen::prelude::*;

use akash_holders::Variant;

pub use app::App;
pub use state::BubbleMapState;

cfg_if! {
    if #[cfg(feature = "develop")] {
        fn init_log() {
            wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
            console_error_panic_hook::set_once();
        }
    } else {
        fn init_log() {}
    }
}

#[wasm_bindgen(start)]
pub fn main_js() {
    init_log();
    log::debug!("bubblemap::wasm_started");
}

/// Mount the map into the element with `element_id`, or `<body>` when it
/// does not exist. `live` selects the fetching variant with a refresh button.
#[wasm_bindgen]
pub fn mount_bubble_map(element_id: &str, live: bool) {
    let variant = if live { Variant::Live } else { Variant::Static };
    let state = BubbleMapState::new(variant, config::CONFIG.clone());
    let app = App::new(state.clone());

    let parent = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(element_id));

    match parent {
        Some(parent) => {
            dominator::append_dom(&parent, App::render(app));
        },
        None => {
            log::warn!("bubblemap::mount::element_not_found::{}::using_body", element_id);
            dominator::append_dom(&dominator::body(), App::render(app));
        },
    }

    state.refresh();
}

/// Current view model as JSON, for host pages that draw their own chrome
#[wasm_bindgen]
pub fn sample_bubble_map_json() -> Result<String, JsValue> {
    let state = BubbleMapState::new(Variant::Static, config::CONFIG.clone());
    let view = state.view();
    serde_json::to_string(&view).map_err(|e| JsValue::from_str(&e.to_string()))
}
