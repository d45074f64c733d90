//! Search Bar Component

use leptos::prelude::*;

use crate::context::use_browser_context;
use crate::controller;

/// Free-text search; submits on button click or Enter
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_browser_context();
    let (term, set_term) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        controller::submit_search(ctx, &term.get_untracked());
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                id="searchInput"
                type="text"
                placeholder="Search recipes..."
                prop:value=move || term.get()
                on:input=move |ev| set_term.set(event_target_value(&ev))
            />
            <button id="searchBtn" type="submit">"Search"</button>
        </form>
    }
}
