//! Interaction Controller
//!
//! Maps user actions (page load, category click, search, view, close) onto
//! data access calls and store updates. Network errors are logged and leave
//! the current view untouched.

use leptos::prelude::*;
use leptos::task::spawn_local;
use mealdb::{categories, ALL_CATEGORY};

use crate::context::BrowserContext;
use crate::store::{self, BrowserStateStoreFields, ModalContent};

/// What a search submission should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchIntent {
    /// Blank input: show the cached initial-load list
    ShowAll,
    /// Query the service with the trimmed term
    Query(String),
}

impl SearchIntent {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" => Self::ShowAll,
            term => Self::Query(term.to_string()),
        }
    }
}

/// Initial load: a sample from every category, concatenated in map order
pub fn load_all(ctx: BrowserContext) {
    let store = ctx.store;
    let client = ctx.client();
    let ticket = store::begin_request(&store);

    spawn_local(async move {
        let mut dishes = Vec::new();
        for label in categories::labels() {
            match client.fetch_category(label, js_sys::Math::random).await {
                Ok(batch) => dishes.extend(batch),
                Err(err) => {
                    log::error!("[LOAD] category {} failed: {}", label, err);
                    store::abandon_request(&store, ticket);
                    return;
                }
            }
        }

        log::info!(
            "[LOAD] {} dishes across {} categories",
            dishes.len(),
            categories::CATEGORY_MAP.len()
        );
        store::finish_initial_load(&store, ticket, dishes);
    });
}

/// Category button activation
pub fn select_category(ctx: BrowserContext, category: &str) {
    let store = ctx.store;
    store.active_category().set(category.to_string());

    if category == ALL_CATEGORY {
        store::show_cached(&store);
        return;
    }

    let client = ctx.client();
    let label = category.to_string();
    let ticket = store::begin_request(&store);

    spawn_local(async move {
        match client.fetch_category(&label, js_sys::Math::random).await {
            Ok(dishes) => {
                log::info!("[FILTER] {} -> {} dishes", label, dishes.len());
                store::apply_results(&store, ticket, dishes);
            }
            Err(err) => {
                log::error!("[FILTER] {} failed: {}", label, err);
                store::abandon_request(&store, ticket);
            }
        }
    });
}

/// Search submission (button or Enter)
pub fn submit_search(ctx: BrowserContext, raw: &str) {
    let store = ctx.store;

    let term = match SearchIntent::parse(raw) {
        SearchIntent::ShowAll => {
            store::show_cached(&store);
            return;
        }
        SearchIntent::Query(term) => term,
    };

    let client = ctx.client();
    let ticket = store::begin_request(&store);

    spawn_local(async move {
        match client.search(&term).await {
            Ok(dishes) => {
                log::info!("[SEARCH] {:?} -> {} dishes", term, dishes.len());
                store::apply_results(&store, ticket, dishes);
            }
            Err(err) => {
                log::error!("[SEARCH] {:?} failed: {}", term, err);
                store::abandon_request(&store, ticket);
            }
        }
    });
}

/// "View" on a card: fetch the full record and open the modal
pub fn open_recipe(ctx: BrowserContext, id: String) {
    let store = ctx.store;
    let client = ctx.client();
    let ticket = store.detail_sequence().write().begin();

    spawn_local(async move {
        match client.fetch_recipe(&id).await {
            Ok(Some(detail)) => {
                if store.detail_sequence().get_untracked().is_current(ticket) {
                    store.modal().set(Some(ModalContent::from(detail)));
                }
            }
            Ok(None) => log::warn!("[DETAIL] no recipe with id {}", id),
            Err(err) => log::error!("[DETAIL] {} failed: {}", id, err),
        }
    });
}

pub fn close_modal(ctx: BrowserContext) {
    ctx.store.modal().set(None);
}
