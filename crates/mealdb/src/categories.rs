//! Category Map
//!
//! Static translation between the category buttons shown in the UI and the
//! category names the recipe service understands.

/// Pseudo-category that shows the cached initial-load list
pub const ALL_CATEGORY: &str = "all";

/// Display label -> API category, in display order
pub const CATEGORY_MAP: &[(&str, &str)] = &[
    ("Special", "Miscellaneous"),
    ("Curries", "Beef"),
    ("BBQ", "Chicken"),
    ("Rice", "Seafood"),
    ("Breads", "Side"),
    ("Desserts", "Dessert"),
    ("Snacks", "Starter"),
];

/// Resolve a display label, falling back to the label itself when unmapped
pub fn resolve_category(label: &str) -> &str {
    CATEGORY_MAP
        .iter()
        .find(|(display, _)| *display == label)
        .map(|(_, api)| *api)
        .unwrap_or(label)
}

/// Display labels in map order
pub fn labels() -> impl Iterator<Item = &'static str> {
    CATEGORY_MAP.iter().map(|(display, _)| *display)
}
