//! Browser Context
//!
//! Handles the components need, provided once by `App` via the Leptos
//! Context API instead of living in module-level globals.

use leptos::prelude::*;
use mealdb::{ApiConfig, MealDbClient};

use crate::store::AppStore;

#[derive(Clone, Copy)]
pub struct BrowserContext {
    pub store: AppStore,
    config: StoredValue<ApiConfig>,
}

impl BrowserContext {
    pub fn new(store: AppStore, config: ApiConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    /// Client for use inside a spawned task
    pub fn client(&self) -> MealDbClient {
        MealDbClient::new(self.config.get_value())
    }
}

pub fn use_browser_context() -> BrowserContext {
    expect_context::<BrowserContext>()
}
