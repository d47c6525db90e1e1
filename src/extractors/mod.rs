use scraper::Html;

use crate::model::RecipeRecord;

mod heuristic;
mod json_ld;
mod microdata;

pub use heuristic::HeuristicExtractor;
pub use json_ld::LinkedDataExtractor;
pub use microdata::MicrodataExtractor;

/// Everything a strategy is allowed to see: the parsed page and the URL it
/// came from. No strategy reaches outside this.
pub struct ParsingContext<'a> {
    pub document: &'a Html,
    pub url: &'a str,
}

/// One extraction strategy. Strategies never fail: a page the strategy
/// cannot interpret yields an empty vec and the pipeline moves on.
pub trait Extractor {
    fn extract(&self, context: &ParsingContext<'_>) -> Vec<RecipeRecord>;
}
