//! Recipe Browser App
//!
//! Builds the store and API config, provides them as context, kicks off the
//! initial load and lays out search, category filter, grid and modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CategoryBar, DishGrid, RecipeModal, SearchBar};
use crate::config;
use crate::context::BrowserContext;
use crate::controller;
use crate::store::BrowserState;

#[component]
pub fn App() -> impl IntoView {
    let ctx = BrowserContext::new(Store::new(BrowserState::new()), config::load_from_document());

    // Provide context to all children
    provide_context(ctx);

    // Initial load on mount
    Effect::new(move |_| controller::load_all(ctx));

    view! {
        <div class="recipe-browser">
            <header class="hero">
                <h1>"Recipe Browser"</h1>
                <SearchBar />
            </header>

            <CategoryBar />

            <main>
                <DishGrid />
            </main>

            <RecipeModal />
        </div>
    }
}
