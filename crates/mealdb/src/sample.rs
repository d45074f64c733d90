//! Random sampling of category results

/// Shuffle `items` in place (Fisher-Yates) and keep at most `limit` of them.
///
/// `rng` must yield values in `[0, 1)`; out-of-range values are clamped so a
/// misbehaving source can never index out of bounds.
pub fn shuffle_truncate<T>(
    mut items: Vec<T>,
    limit: usize,
    mut rng: impl FnMut() -> f64,
) -> Vec<T> {
    for i in (1..items.len()).rev() {
        let j = ((rng() * (i + 1) as f64) as usize).min(i);
        items.swap(i, j);
    }
    items.truncate(limit);
    items
}
