//! Finds the element heading a named section ("Ingredients",
//! "Directions|Instructions") so the harvester can start close to the list
//! instead of scanning the whole page.

use log::debug;
use scraper::{ElementRef, Html, Selector};

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Pick the best element whose text matches `pattern` (a `|`-separated list
/// of section names, matched case-insensitively). Headings score +2; an
/// element with a descendant list scores +5. Ties go to the earliest match
/// in document order. `body` is deliberately not a candidate: on a real
/// page it contains every section name and every list, so it would tie the
/// actual container at 5 and steal the tie by document order.
/// `None` means the caller should fall back to the document root.
pub fn find_section<'a>(document: &'a Html, pattern: &str) -> Option<ElementRef<'a>> {
    let candidates =
        Selector::parse("h1, h2, h3, h4, h5, h6, p, div, section, article").unwrap();
    let list = Selector::parse("ol, ul").unwrap();
    let names: Vec<String> = pattern.split('|').map(str::to_lowercase).collect();

    let mut best: Option<(ElementRef<'a>, u32)> = None;
    for element in document.select(&candidates) {
        let text = element.text().collect::<String>().to_lowercase();
        if !names.iter().any(|name| text.contains(name)) {
            continue;
        }

        let mut score = 0;
        if HEADING_TAGS.contains(&element.value().name()) {
            score += 2;
        }
        if element.select(&list).next().is_some() {
            score += 5;
        }

        // strict > keeps the earliest element on ties
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((element, score));
        }
    }

    if best.is_none() {
        debug!("no section matched {:?}, falling back to document root", pattern);
    }
    best.map(|(element, _)| element)
}
