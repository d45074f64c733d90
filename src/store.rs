//! Browser State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use mealdb::{DishDetail, DishSummary, ALL_CATEGORY};
use reactive_stores::Store;

use crate::sequence::{RequestSequence, Ticket};

/// Text shown in the detail modal
#[derive(Debug, Clone, PartialEq)]
pub struct ModalContent {
    pub title: String,
    pub body: String,
}

impl From<DishDetail> for ModalContent {
    fn from(detail: DishDetail) -> Self {
        Self {
            title: detail.name,
            body: detail.instructions,
        }
    }
}

/// Page-session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BrowserState {
    /// Dishes gathered by the initial load (the "all" view)
    pub all_dishes: Vec<DishSummary>,
    /// Dishes currently backing the grid
    pub displayed: Vec<DishSummary>,
    /// Category button currently marked active
    pub active_category: String,
    /// A grid fetch is outstanding
    pub loading: bool,
    /// Open modal, if any
    pub modal: Option<ModalContent>,
    /// Tickets for grid fetches
    pub sequence: RequestSequence,
    /// Ticket of the latest "all" re-render
    pub cached_view: Option<Ticket>,
    /// Tickets for detail fetches
    pub detail_sequence: RequestSequence,
}

impl BrowserState {
    pub fn new() -> Self {
        Self {
            active_category: ALL_CATEGORY.to_string(),
            ..Default::default()
        }
    }
}

pub type AppStore = Store<BrowserState>;

// ========================
// Store Helper Functions
// ========================

/// Start a grid fetch; supersedes any fetch still in flight
pub fn begin_request(store: &AppStore) -> Ticket {
    let ticket = store.sequence().write().begin();
    store.loading().set(true);
    ticket
}

/// Replace the displayed list if `ticket` is still the latest.
/// Returns whether the results were applied.
pub fn apply_results(store: &AppStore, ticket: Ticket, dishes: Vec<DishSummary>) -> bool {
    if !store.sequence().get_untracked().is_current(ticket) {
        log::debug!("[STORE] dropping {} dishes from superseded request", dishes.len());
        return false;
    }
    store.displayed().set(dishes);
    store.loading().set(false);
    true
}

/// Finish a failed fetch without touching the grid
pub fn abandon_request(store: &AppStore, ticket: Ticket) {
    if store.sequence().get_untracked().is_current(ticket) {
        store.loading().set(false);
    }
}

/// Re-render the initial-load list; no network involved
pub fn show_cached(store: &AppStore) {
    let ticket = begin_request(store);
    store.cached_view().set(Some(ticket));
    let cached = store.all_dishes().get_untracked();
    apply_results(store, ticket, cached);
}

/// Store the initial-load list and display it. If the user switched to the
/// "all" view while the load was running, the list is applied under that
/// view's ticket instead of being dropped.
pub fn finish_initial_load(store: &AppStore, ticket: Ticket, dishes: Vec<DishSummary>) -> bool {
    store.all_dishes().set(dishes.clone());
    if store.sequence().get_untracked().is_current(ticket) {
        return apply_results(store, ticket, dishes);
    }
    match store.cached_view().get_untracked() {
        Some(cached) => apply_results(store, cached, dishes),
        None => false,
    }
}
