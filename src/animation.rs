//! Scroll Animation Bridge
//!
//! Bindings to the page's AOS (Animate On Scroll) library. The library is
//! optional; every call tolerates it being absent.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;

const ANIMATION_DURATION_MS: u32 = 800;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = AOS, js_name = init)]
    fn aos_init(options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = AOS, js_name = refresh)]
    fn aos_refresh() -> Result<(), JsValue>;
}

pub fn init() {
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &options,
        &JsValue::from_str("duration"),
        &JsValue::from(ANIMATION_DURATION_MS),
    );
    if let Err(err) = aos_init(&options) {
        log::debug!("[ANIM] AOS not available: {:?}", err);
    }
}

/// Re-scan the grid once the freshly rendered cards are in the DOM
pub fn refresh_after_render() {
    spawn_local(async {
        TimeoutFuture::new(0).await;
        if let Err(err) = aos_refresh() {
            log::debug!("[ANIM] AOS refresh skipped: {:?}", err);
        }
    });
}
