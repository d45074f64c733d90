//! Dish Grid Component
//!
//! Renders the displayed list. The whole grid is rebuilt whenever the list
//! is replaced, so the DOM always mirrors the store.

use leptos::prelude::*;
use mealdb::DishSummary;

use crate::animation;
use crate::components::{CardContent, DishCard};
use crate::context::use_browser_context;
use crate::store::BrowserStateStoreFields;

pub const NO_RESULTS_TEXT: &str = "No recipes found.";

/// What the grid shows for a given list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridLayout {
    /// The "no results" placeholder, no cards
    Empty,
    /// One card per dish, in list order
    Cards(Vec<CardContent>),
}

impl GridLayout {
    pub fn of(dishes: &[DishSummary]) -> Self {
        if dishes.is_empty() {
            Self::Empty
        } else {
            Self::Cards(dishes.iter().map(CardContent::from).collect())
        }
    }
}

#[component]
pub fn DishGrid() -> impl IntoView {
    let store = use_browser_context().store;

    // Re-scan animations after every non-empty render
    Effect::new(move |_| {
        if !store.displayed().read().is_empty() {
            animation::refresh_after_render();
        }
    });

    view! {
        <div
            id="results"
            class="results-grid"
            aria-busy=move || if store.loading().get() { "true" } else { "false" }
        >
            {move || {
                let layout = GridLayout::of(&store.displayed().read());
                match layout {
                    GridLayout::Empty => view! {
                        <p class="no-results">{NO_RESULTS_TEXT}</p>
                    }.into_any(),
                    GridLayout::Cards(cards) => cards
                        .into_iter()
                        .map(|card| view! { <DishCard card=card /> })
                        .collect_view()
                        .into_any(),
                }
            }}
        </div>
    }
}
