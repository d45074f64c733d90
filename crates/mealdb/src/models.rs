//! Dish records
//!
//! Field names follow the recipe service's JSON (`idMeal`, `strMeal`, ...).

use serde::{Deserialize, Deserializer};

/// Minimal record used for grid display
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct DishSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: String,
}

/// Full record used for the detail modal
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DishDetail {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strInstructions", default, deserialize_with = "null_as_empty")]
    pub instructions: String,
}

/// Top-level response shape shared by all three endpoints
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct MealsEnvelope<T> {
    #[serde(default)]
    pub meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    /// Absent, null and empty `meals` all mean "no entries"
    pub fn into_entries(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
