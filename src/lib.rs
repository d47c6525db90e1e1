//! Extracts structured recipe data from recipe web pages.
//!
//! Pages expose recipes three incompatible ways: JSON-LD blocks, microdata
//! attributes, or plain prose with no markup at all. [`pipeline::extract`]
//! cascades over all three strategies and returns normalized
//! [`model::RecipeRecord`]s; [`fetch_recipes`] wraps it with a page fetch
//! for callers starting from a URL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod scrape;

use log::debug;
use reqwest::header::{HeaderMap, USER_AGENT};
use scraper::Html;

use crate::config::Settings;
use crate::error::GrabError;
use crate::model::RecipeRecord;

pub use crate::normalize::NormalizeOptions;
pub use crate::pipeline::extract;

/// Fetch a page and run the extraction pipeline over it.
///
/// An `Ok(vec![])` means the page had no recognizable recipe; only the
/// fetch itself can fail.
pub fn fetch_recipes(url: &str, settings: &Settings) -> Result<Vec<RecipeRecord>, GrabError> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(GrabError::InvalidUrl(url.to_string()));
    }

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, settings.user_agent.parse()?);

    let body = reqwest::blocking::Client::new()
        .get(url)
        .headers(headers)
        .send()?
        .text()?;

    let document = Html::parse_document(&body);
    let records = pipeline::extract(&document, url, &settings.normalize_options());
    debug!("extracted {} record(s) from {url}", records.len());

    Ok(records)
}
