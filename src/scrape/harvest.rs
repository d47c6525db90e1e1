//! Depth-first list harvest with a latch: descend until one text node
//! qualifies under the scoring function, then sweep the rest of that
//! node's container without re-scoring. Once the first list item is found,
//! the remaining items of the same list rarely need individual scoring,
//! and the prose noise before the list has already been filtered out.
//!
//! Termination boundary: after the latch fires, the sibling sweep climbs
//! one level at a time until it first collects text (the rest of the
//! `<ul>` after its first qualifying `<li>`) or reaches a `<ul>`/`<ol>`;
//! that level is the latched container, and every level above it stops.

use ego_tree::NodeRef;
use scraper::Node;

use super::score::QUALIFY_THRESHOLD;

/// Subtrees whose text is never recipe prose. Without this, the
/// whole-document fallback can latch onto JSON-LD payload text.
const OPAQUE_TAGS: &[&str] = &["script", "style", "noscript", "template", "head"];

enum Latch {
    NotFound,
    Found { swept: bool },
}

/// Walk `root` and return qualifying text in document order. An empty
/// result is a normal outcome, not an error.
pub fn harvest_list(root: NodeRef<'_, Node>, score: fn(&str) -> u32) -> Vec<String> {
    let mut found = Vec::new();
    latch_walk(root, score, &mut found);
    found
}

fn latch_walk(node: NodeRef<'_, Node>, score: fn(&str) -> u32, found: &mut Vec<String>) -> Latch {
    if let Some(text) = node.value().as_text() {
        let line = text.trim();
        if !line.is_empty() && score(line) > QUALIFY_THRESHOLD {
            found.push(line.to_string());
            return Latch::Found { swept: false };
        }
        return Latch::NotFound;
    }

    if is_opaque(node) {
        return Latch::NotFound;
    }

    for child in node.children() {
        if let Latch::Found { mut swept } = latch_walk(child, score, found) {
            if !swept {
                let before = found.len();
                for sibling in child.next_siblings() {
                    collect_text(sibling, found);
                }
                // a list element is always the container boundary, even
                // when the latch fired on its last item and the sweep
                // had nothing left to collect
                swept = found.len() > before || is_list_element(node);
            }
            return Latch::Found { swept };
        }
    }
    Latch::NotFound
}

fn is_list_element(node: NodeRef<'_, Node>) -> bool {
    node.value()
        .as_element()
        .is_some_and(|el| matches!(el.name(), "ul" | "ol"))
}

fn collect_text(node: NodeRef<'_, Node>, found: &mut Vec<String>) {
    if let Some(text) = node.value().as_text() {
        let line = text.trim();
        if !line.is_empty() {
            found.push(line.to_string());
        }
        return;
    }
    if is_opaque(node) {
        return;
    }
    for child in node.children() {
        collect_text(child, found);
    }
}

fn is_opaque(node: NodeRef<'_, Node>) -> bool {
    node.value()
        .as_element()
        .is_some_and(|el| OPAQUE_TAGS.contains(&el.name()))
}
