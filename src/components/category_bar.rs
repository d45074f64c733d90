//! Category Bar Component
//!
//! "All" plus one button per category map entry. Exactly one button is
//! active at a time, derived from the store.

use leptos::prelude::*;
use mealdb::{categories, ALL_CATEGORY};

use crate::context::use_browser_context;
use crate::controller;
use crate::store::BrowserStateStoreFields;

#[component]
pub fn CategoryBar() -> impl IntoView {
    let ctx = use_browser_context();

    let buttons = std::iter::once((ALL_CATEGORY, "All"))
        .chain(categories::labels().map(|label| (label, label)));

    view! {
        <div class="category-bar">
            {buttons.map(|(category, caption)| {
                let is_active = move || ctx.store.active_category().get() == category;
                view! {
                    <button
                        class=move || if is_active() { "cat-btn active" } else { "cat-btn" }
                        data-category=category
                        on:click=move |_| controller::select_category(ctx, category)
                    >
                        {caption}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
