//! Heuristic DOM scraping: line scorers, section location, and the
//! depth-first list harvest used when a page carries no machine-readable
//! recipe markup (and to backfill JSON-LD nodes missing a list).

pub mod harvest;
pub mod score;
pub mod section;

pub use harvest::harvest_list;
pub use score::{score_for_ingredients, score_for_instructions, QUALIFY_THRESHOLD};
pub use section::find_section;

use scraper::Html;

/// Locate the named section and harvest qualifying lines from it, falling
/// back to the whole document when no section matches. `section_pattern` is
/// a `|`-separated list of alternative section names.
pub fn find_list_in_section(
    document: &Html,
    section_pattern: &str,
    score: fn(&str) -> u32,
) -> Vec<String> {
    match find_section(document, section_pattern) {
        Some(section) => harvest_list(*section, score),
        None => harvest_list(*document.root_element(), score),
    }
}
