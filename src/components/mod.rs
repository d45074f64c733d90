//! UI Components
//!
//! Leptos components for the recipe browser.

mod category_bar;
mod dish_card;
mod dish_grid;
mod recipe_modal;
mod search_bar;

pub use category_bar::CategoryBar;
pub use dish_card::{CardContent, DishCard};
pub use dish_grid::DishGrid;
pub use recipe_modal::RecipeModal;
pub use search_bar::SearchBar;
