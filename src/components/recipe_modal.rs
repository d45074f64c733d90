//! Recipe Modal Component
//!
//! Shows a dish name and its raw instructions. Instructions are inserted as
//! text, never parsed as HTML.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::{use_browser_context, BrowserContext};
use crate::controller;
use crate::store::BrowserStateStoreFields;

/// Close on Escape anywhere in the document
fn bind_escape_to_close(ctx: BrowserContext) {
    use wasm_bindgen::closure::Closure;

    let on_keydown =
        Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Escape" && ctx.store.modal().get_untracked().is_some() {
                controller::close_modal(ctx);
            }
        });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let listener: &js_sys::Function = on_keydown.as_ref().unchecked_ref();
        if let Err(err) = doc.add_event_listener_with_callback("keydown", listener) {
            log::debug!("[MODAL] Escape binding failed: {:?}", err);
        }
    }
    on_keydown.forget();
}

#[component]
pub fn RecipeModal() -> impl IntoView {
    let ctx = use_browser_context();
    let store = ctx.store;

    bind_escape_to_close(ctx);

    let title = move || store.modal().get().map(|m| m.title).unwrap_or_default();
    let body = move || store.modal().get().map(|m| m.body).unwrap_or_default();

    view! {
        <div
            id="recipeModal"
            class=move || if store.modal().get().is_some() { "modal" } else { "modal hidden" }
            on:click=move |_| controller::close_modal(ctx)
        >
            <div class="modal-box" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" on:click=move |_| controller::close_modal(ctx)>
                    "×"
                </button>
                <h2 id="modalTitle">{title}</h2>
                <p id="modalContent" class="modal-content">{body}</p>
            </div>
        </div>
    }
}
