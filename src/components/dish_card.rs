//! Dish Card Component
//!
//! One grid card: thumbnail, name, "View" and favorite controls.

use leptos::prelude::*;
use mealdb::DishSummary;

use crate::context::use_browser_context;
use crate::controller;

const GLYPH_UNLIKED: &str = "❤";
const GLYPH_LIKED: &str = "💖";

/// Cosmetic liked/unliked flag, lives and dies with the card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FavoriteState {
    liked: bool,
}

impl FavoriteState {
    pub fn toggle(&mut self) {
        self.liked = !self.liked;
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    pub fn glyph(&self) -> &'static str {
        if self.is_liked() {
            GLYPH_LIKED
        } else {
            GLYPH_UNLIKED
        }
    }

    pub fn class(&self) -> &'static str {
        if self.is_liked() {
            "btn favorite liked"
        } else {
            "btn favorite"
        }
    }
}

/// Everything a card displays, taken from one dish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    /// Id passed to the detail lookup by "View"
    pub id: String,
    /// `h3` text
    pub title: String,
    /// `img` src
    pub thumbnail: String,
    /// `img` alt
    pub alt: String,
}

impl From<&DishSummary> for CardContent {
    fn from(dish: &DishSummary) -> Self {
        Self {
            id: dish.id.clone(),
            title: dish.name.clone(),
            thumbnail: dish.thumbnail.clone(),
            alt: dish.name.clone(),
        }
    }
}

#[component]
pub fn DishCard(card: CardContent) -> impl IntoView {
    let ctx = use_browser_context();
    let (favorite, set_favorite) = signal(FavoriteState::default());

    let CardContent { id, title, thumbnail, alt } = card;

    view! {
        <div class="card" data-aos="fade-up">
            <img src=thumbnail class="thumb" alt=alt />
            <div class="card-body">
                <h3>{title}</h3>
                <div class="card-actions">
                    <button
                        class="btn view"
                        on:click=move |_| controller::open_recipe(ctx, id.clone())
                    >
                        "View"
                    </button>
                    <button
                        class=move || favorite.get().class()
                        on:click=move |_| set_favorite.update(|f| f.toggle())
                    >
                        {move || favorite.get().glyph()}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_starts_unliked() {
        let fav = FavoriteState::default();
        assert!(!fav.is_liked());
        assert_eq!(fav.glyph(), GLYPH_UNLIKED);
        assert_eq!(fav.class(), "btn favorite");
    }

    #[test]
    fn test_toggle_swaps_glyph_and_class() {
        let mut fav = FavoriteState::default();
        fav.toggle();
        assert!(fav.is_liked());
        assert_eq!(fav.glyph(), GLYPH_LIKED);
        assert_eq!(fav.class(), "btn favorite liked");
    }

    #[test]
    fn test_card_content_from_dish() {
        let dish = DishSummary {
            id: "52772".to_string(),
            name: "Teriyaki Chicken Casserole".to_string(),
            thumbnail: "https://img/52772.jpg".to_string(),
        };
        let card = CardContent::from(&dish);
        assert_eq!(card.id, "52772");
        assert_eq!(card.title, "Teriyaki Chicken Casserole");
        assert_eq!(card.alt, "Teriyaki Chicken Casserole");
        assert_eq!(card.thumbnail, "https://img/52772.jpg");
    }

    #[test]
    fn test_double_toggle_restores_original() {
        let mut fav = FavoriteState::default();
        let original = fav.glyph();
        fav.toggle();
        fav.toggle();
        assert_eq!(fav.glyph(), original);
        assert_eq!(fav, FavoriteState::default());
    }
}
