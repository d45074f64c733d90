//! Recipe Service Client
//!
//! The three data access operations, generic over a [`Transport`] so they can
//! run against the real service (reqwest) or a canned one in tests.

use serde::de::DeserializeOwned;

use crate::categories::resolve_category;
use crate::endpoints::{self, ApiConfig};
use crate::error::ApiError;
use crate::models::{DishDetail, DishSummary, MealsEnvelope};
use crate::sample::shuffle_truncate;

/// Fetches a URL and returns the response body
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<String, ApiError>;
}

/// reqwest-backed transport (browser fetch on wasm32)
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, ApiError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

#[derive(Debug, Clone)]
pub struct MealDbClient<T = HttpTransport> {
    transport: T,
    config: ApiConfig,
}

impl MealDbClient<HttpTransport> {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_transport(HttpTransport::default(), config)
    }
}

impl<T: Transport> MealDbClient<T> {
    pub fn with_transport(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    /// Random sample (at most `sample_size`) of a category's dishes.
    /// `label` goes through the category map first; unmapped labels are sent as-is.
    pub async fn fetch_category(
        &self,
        label: &str,
        rng: impl FnMut() -> f64,
    ) -> Result<Vec<DishSummary>, ApiError> {
        let api_category = resolve_category(label);
        let url = endpoints::filter_url(&self.config, api_category);
        let dishes: Vec<DishSummary> = self.get_entries(&url).await?;
        log::debug!("[API] filter {} -> {} dishes", api_category, dishes.len());
        Ok(shuffle_truncate(dishes, self.config.sample_size, rng))
    }

    /// Full record for one dish, `None` when the service has no such id
    pub async fn fetch_recipe(&self, id: &str) -> Result<Option<DishDetail>, ApiError> {
        let url = endpoints::lookup_url(&self.config, id);
        let detail = self.get_entries::<DishDetail>(&url).await?.into_iter().next();
        if detail.is_none() {
            log::debug!("[API] lookup {} -> not found", id);
        }
        Ok(detail)
    }

    /// Free-text search; no matches is an empty list
    pub async fn search(&self, term: &str) -> Result<Vec<DishSummary>, ApiError> {
        let url = endpoints::search_url(&self.config, term);
        let dishes: Vec<DishSummary> = self.get_entries(&url).await?;
        log::debug!("[API] search {:?} -> {} dishes", term, dishes.len());
        Ok(dishes)
    }

    async fn get_entries<R: DeserializeOwned>(&self, url: &str) -> Result<Vec<R>, ApiError> {
        let body = self.transport.get(url).await?;
        let envelope: MealsEnvelope<R> = serde_json::from_str(&body)?;
        Ok(envelope.into_entries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Serves canned bodies by URL and records every request
    #[derive(Clone, Default)]
    struct FakeTransport {
        bodies: Rc<HashMap<String, String>>,
        requests: Rc<RefCell<Vec<String>>>,
    }

    impl FakeTransport {
        fn with(bodies: &[(&str, &str)]) -> Self {
            let bodies = bodies
                .iter()
                .map(|(url, body)| (url.to_string(), body.to_string()))
                .collect();
            Self { bodies: Rc::new(bodies), requests: Rc::default() }
        }

        fn requested(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl Transport for FakeTransport {
        async fn get(&self, url: &str) -> Result<String, ApiError> {
            self.requests.borrow_mut().push(url.to_string());
            Ok(self
                .bodies
                .get(url)
                .cloned()
                .unwrap_or_else(|| r#"{"meals":null}"#.to_string()))
        }
    }

    const BASE: &str = "https://www.themealdb.com/api/json/v1/1";

    fn meals_json(ids: &[u32]) -> String {
        let meals: Vec<String> = ids
            .iter()
            .map(|id| {
                format!(
                    concat!(
                        r#"{{"idMeal":"{id}","strMeal":"Dish {id}","#,
                        r#""strMealThumb":"https://img/{id}.jpg"}}"#
                    ),
                    id = id
                )
            })
            .collect();
        format!(r#"{{"meals":[{}]}}"#, meals.join(","))
    }

    fn client(transport: &FakeTransport) -> MealDbClient<FakeTransport> {
        MealDbClient::with_transport(transport.clone(), ApiConfig::default())
    }

    #[test]
    fn test_fetch_category_uses_mapped_name() {
        let url = format!("{BASE}/filter.php?c=Beef");
        let body = meals_json(&[1, 2]);
        let transport = FakeTransport::with(&[(url.as_str(), body.as_str())]);

        let dishes = block_on(client(&transport).fetch_category("Curries", || 0.3)).unwrap();

        assert_eq!(transport.requested(), vec![url]);
        assert_eq!(dishes.len(), 2);
    }

    #[test]
    fn test_fetch_category_samples_at_most_four_from_response() {
        let url = format!("{BASE}/filter.php?c=Dessert");
        let body = meals_json(&[10, 11, 12, 13, 14, 15, 16, 17]);
        let transport = FakeTransport::with(&[(url.as_str(), body.as_str())]);

        let mut tick = 0.0;
        let dishes = block_on(client(&transport).fetch_category("Desserts", || {
            tick = (tick + 0.37) % 1.0;
            tick
        }))
        .unwrap();

        assert_eq!(dishes.len(), 4);
        for dish in &dishes {
            let id: u32 = dish.id.parse().unwrap();
            assert!((10..=17).contains(&id));
            assert_eq!(dish.name, format!("Dish {id}"));
        }
    }

    #[test]
    fn test_fetch_category_unmapped_label_and_missing_field() {
        let transport = FakeTransport::default();
        let dishes = block_on(client(&transport).fetch_category("Vegan", || 0.0)).unwrap();
        assert!(dishes.is_empty());
        assert_eq!(transport.requested(), vec![format!("{BASE}/filter.php?c=Vegan")]);
    }

    #[test]
    fn test_fetch_recipe_found() {
        let url = format!("{BASE}/lookup.php?i=52772");
        let body = r#"{"meals":[{"idMeal":"52772","strMeal":"Teriyaki Chicken Casserole",
            "strInstructions":"Preheat oven to 350.\r\nCombine soy sauce."}]}"#;
        let transport = FakeTransport::with(&[(url.as_str(), body)]);

        let detail = block_on(client(&transport).fetch_recipe("52772")).unwrap().unwrap();

        assert_eq!(detail.id, "52772");
        assert_eq!(detail.name, "Teriyaki Chicken Casserole");
        assert!(detail.instructions.starts_with("Preheat oven"));
    }

    #[test]
    fn test_fetch_recipe_not_found_is_none() {
        let transport = FakeTransport::default();
        let detail = block_on(client(&transport).fetch_recipe("0")).unwrap();
        assert!(detail.is_none());
    }

    #[test]
    fn test_search_returns_all_matches() {
        let url = format!("{BASE}/search.php?s=chicken");
        let body = meals_json(&[1, 2, 3]);
        let transport = FakeTransport::with(&[(url.as_str(), body.as_str())]);

        let dishes = block_on(client(&transport).search("chicken")).unwrap();
        let ids: Vec<_> = dishes.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_search_absent_meals_is_empty() {
        let url = format!("{BASE}/search.php?s=zzz");
        let transport = FakeTransport::with(&[(url.as_str(), "{}")]);
        assert!(block_on(client(&transport).search("zzz")).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let url = format!("{BASE}/search.php?s=bad");
        let transport = FakeTransport::with(&[(url.as_str(), "<html>oops</html>")]);
        let err = block_on(client(&transport).search("bad")).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
