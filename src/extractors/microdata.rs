use ego_tree::NodeRef;
use log::debug;
use scraper::{ElementRef, Node, Selector};
use serde_json::{Map, Value};

use super::{Extractor, ParsingContext};
use crate::model::RecipeRecord;

/// Walks `itemscope`/`itemprop` markup into nested records.
/// <https://html.spec.whatwg.org/multipage/microdata.html#microdata>
pub struct MicrodataExtractor;

const RECIPE_ITEMTYPES: &[&str] = &["http://schema.org/Recipe", "https://schema.org/Recipe"];

impl Extractor for MicrodataExtractor {
    fn extract(&self, context: &ParsingContext<'_>) -> Vec<RecipeRecord> {
        let selector = Selector::parse("[itemscope][itemtype]").unwrap();
        let mut records = Vec::new();

        for element in context.document.select(&selector) {
            let itemtype = element.value().attr("itemtype").unwrap_or("").trim();
            if !RECIPE_ITEMTYPES.contains(&itemtype) {
                continue;
            }

            let mut node = walk_item_scope(element);
            // injected last so markup can never override them
            node.insert("@type".to_string(), Value::String("Recipe".to_string()));
            node.insert("url".to_string(), Value::String(context.url.to_string()));

            match serde_json::from_value::<RecipeRecord>(Value::Object(node)) {
                Ok(record) => records.push(record),
                Err(err) => debug!("skipping microdata item with unusable shape: {err}"),
            }
        }

        records
    }
}

/// Collect the properties belonging to one itemscope. Nested scopes become
/// nested objects; their properties do not leak into the parent.
fn walk_item_scope(scope: ElementRef<'_>) -> Map<String, Value> {
    let mut data = Map::new();
    for child in scope.children() {
        collect_props(child, &mut data);
    }
    data
}

fn collect_props(node: NodeRef<'_, Node>, data: &mut Map<String, Value>) {
    let Some(element) = ElementRef::wrap(node) else {
        return;
    };
    let is_scope = element.value().attr("itemscope").is_some();

    if let Some(prop) = element.value().attr("itemprop") {
        // legacy pages still write itemprop="ingredients"
        let name = if prop == "ingredients" {
            "recipeIngredient"
        } else {
            prop
        };
        let value = if is_scope {
            Value::Object(walk_item_scope(element))
        } else {
            Value::String(element.text().collect::<String>().trim().to_string())
        };
        push_prop(data, name, value);
    }

    if is_scope {
        // everything below belongs to the nested item
        return;
    }
    for child in element.children() {
        collect_props(child, data);
    }
}

/// Repeated properties promote the existing value to a list and append.
fn push_prop(data: &mut Map<String, Value>, name: &str, value: Value) {
    match data.get_mut(name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            data.insert(name.to_string(), value);
        }
    }
}
