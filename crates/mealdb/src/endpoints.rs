//! Endpoint URLs
//!
//! Builds the three GET endpoints of the recipe service from an [`ApiConfig`].

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";
pub const DEFAULT_SAMPLE_SIZE: usize = 4;

/// Characters left untouched in query values
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Remote service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Max dishes sampled per category
    pub sample_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    fn endpoint(&self, script: &str, key: &str, value: &str) -> String {
        format!(
            "{}/{}?{}={}",
            self.base_url.trim_end_matches('/'),
            script,
            key,
            utf8_percent_encode(value, QUERY_VALUE)
        )
    }
}

/// Filter-by-category endpoint (expects the API vocabulary, not the display label)
pub fn filter_url(config: &ApiConfig, api_category: &str) -> String {
    config.endpoint("filter.php", "c", api_category)
}

/// Lookup-by-id endpoint
pub fn lookup_url(config: &ApiConfig, id: &str) -> String {
    config.endpoint("lookup.php", "i", id)
}

/// Free-text search endpoint
pub fn search_url(config: &ApiConfig, term: &str) -> String {
    config.endpoint("search.php", "s", term)
}
