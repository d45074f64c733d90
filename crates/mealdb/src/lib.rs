//! TheMealDB Data Access
//!
//! Everything the recipe browser needs from the remote recipe service:
//! - category map (display label -> API vocabulary)
//! - endpoint URL construction
//! - response decoding into dish records
//! - shuffle-and-truncate sampling
//! - HTTP transport and the client operations built on it

pub mod categories;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod sample;

pub use categories::{resolve_category, ALL_CATEGORY, CATEGORY_MAP};
pub use client::{HttpTransport, MealDbClient, Transport};
pub use endpoints::ApiConfig;
pub use error::ApiError;
pub use models::{DishDetail, DishSummary};
