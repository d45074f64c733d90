//! Page Configuration
//!
//! The host page may override API settings with meta tags:
//!
//! ```html
//! <meta name="recipe-api-base" content="https://www.themealdb.com/api/json/v1/1">
//! <meta name="recipe-sample-size" content="4">
//! ```

use mealdb::ApiConfig;

const BASE_URL_META: &str = "recipe-api-base";
const SAMPLE_SIZE_META: &str = "recipe-sample-size";

/// Read overrides from the current document, defaults otherwise
pub fn load_from_document() -> ApiConfig {
    resolve(meta_content(BASE_URL_META), meta_content(SAMPLE_SIZE_META))
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    meta.get_attribute("content")
}

/// Apply raw override values on top of the defaults
pub fn resolve(base_url: Option<String>, sample_size: Option<String>) -> ApiConfig {
    let mut config = ApiConfig::default();

    if let Some(base) = base_url.map(|b| b.trim().to_string()).filter(|b| !b.is_empty()) {
        config = config.with_base_url(base);
    }

    if let Some(raw) = sample_size {
        match raw.trim().parse::<usize>() {
            Ok(size) if size > 0 => config = config.with_sample_size(size),
            _ => log::warn!("[CONFIG] ignoring invalid {} {:?}", SAMPLE_SIZE_META, raw),
        }
    }

    log::debug!("[CONFIG] api base {}, sample size {}", config.base_url, config.sample_size);
    config
}
