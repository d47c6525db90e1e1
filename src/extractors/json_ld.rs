use log::{debug, warn};
use scraper::Selector;
use serde_json::{Map, Value};

use super::{Extractor, ParsingContext};
use crate::model::{IngredientsField, InstructionStep, InstructionsField, RecipeRecord};
use crate::scrape::{find_list_in_section, score_for_ingredients, score_for_instructions};

/// Resolves `<script type="application/ld+json">` blocks into recipe
/// records. Unfortunately, some schemas are arrays, some not; some sit in
/// `@graph`, some not. Everything gets flattened into one list of
/// Recipe-typed nodes before deserializing.
pub struct LinkedDataExtractor;

/// `@graph` lists nested deeper than this are dropped. Real pages nest one
/// or two levels; anything past this bound is malformed or hostile.
const MAX_GRAPH_DEPTH: usize = 16;

impl Extractor for LinkedDataExtractor {
    fn extract(&self, context: &ParsingContext<'_>) -> Vec<RecipeRecord> {
        let selector = Selector::parse("script[type='application/ld+json']").unwrap();
        let mut records = Vec::new();

        for script in context.document.select(&selector) {
            let payload = script.inner_html();
            let json: Value = match serde_json::from_str(payload.trim()) {
                Ok(json) => json,
                Err(err) => {
                    // one bad block never aborts the pipeline
                    debug!("skipping unparseable ld+json block: {err}");
                    continue;
                }
            };

            let mut nodes = Vec::new();
            flatten_schemas(json, 0, &mut nodes);

            for node in nodes {
                let mut record: RecipeRecord = match serde_json::from_value(node) {
                    Ok(record) => record,
                    Err(err) => {
                        debug!("skipping recipe node with unusable shape: {err}");
                        continue;
                    }
                };
                backfill_missing_lists(&mut record, context);
                record.url = Some(context.url.to_string());
                records.push(record);
            }
        }

        records
    }
}

/// Flatten arrays and `@graph` nesting into bare nodes, keeping only those
/// whose `@type` includes "Recipe".
fn flatten_schemas(value: Value, depth: usize, nodes: &mut Vec<Value>) {
    if depth > MAX_GRAPH_DEPTH {
        warn!("@graph nesting exceeds {MAX_GRAPH_DEPTH} levels, dropping subtree");
        return;
    }
    match value {
        Value::Array(items) => {
            for item in items {
                flatten_schemas(item, depth + 1, nodes);
            }
        }
        Value::Object(mut map) => match map.remove("@graph") {
            // a node carrying a graph is replaced by the graph's members
            Some(Value::Array(graph)) => {
                for item in graph {
                    flatten_schemas(item, depth + 1, nodes);
                }
            }
            other => {
                if let Some(graph) = other {
                    map.insert("@graph".to_string(), graph);
                }
                if type_includes_recipe(&map) {
                    nodes.push(Value::Object(map));
                }
            }
        },
        _ => {}
    }
}

fn type_includes_recipe(node: &Map<String, Value>) -> bool {
    match node.get("@type") {
        Some(Value::String(name)) => name.eq_ignore_ascii_case("Recipe"),
        Some(Value::Array(names)) => names
            .iter()
            .any(|n| n.as_str().is_some_and(|n| n.eq_ignore_ascii_case("Recipe"))),
        _ => false,
    }
}

/// JSON-LD recipes in the wild are frequently missing one of the two lists;
/// harvest it out of the page instead of giving up on the node.
fn backfill_missing_lists(record: &mut RecipeRecord, context: &ParsingContext<'_>) {
    // a non-empty scalar counts as present; the normalizer wraps it later
    let has_ingredients = match &record.recipe_ingredient {
        Some(IngredientsField::One(line)) => !line.is_empty(),
        Some(IngredientsField::Many(list)) => !list.is_empty(),
        _ => false,
    };
    if !has_ingredients {
        debug!("recipe node missing ingredient list, harvesting from the page");
        let list = find_list_in_section(context.document, "Ingredients", score_for_ingredients);
        record.recipe_ingredient = Some(IngredientsField::Many(list));
    }

    let has_instructions = match &record.recipe_instructions {
        Some(InstructionsField::Text(text)) => !text.is_empty(),
        Some(InstructionsField::Steps(steps)) => !steps.is_empty(),
        _ => false,
    };
    if !has_instructions {
        debug!("recipe node missing instruction list, harvesting from the page");
        let list = find_list_in_section(
            context.document,
            "Directions|Instructions",
            score_for_instructions,
        );
        record.recipe_instructions = Some(InstructionsField::Steps(
            list.into_iter().map(InstructionStep::Text).collect(),
        ));
    }
}
