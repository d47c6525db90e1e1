use log::debug;
use scraper::{Html, Selector};
use serde_json::Map;

use super::{Extractor, ParsingContext};
use crate::model::{
    AuthorField, ImageField, IngredientsField, InstructionStep, InstructionsField, Person,
    RecipeRecord, TypeField,
};
use crate::scrape::{find_list_in_section, score_for_ingredients, score_for_instructions};

/// Last-resort strategy for pages with no machine-readable markup at all:
/// scrape the two lists out of the DOM by scoring text, and pull
/// name/author/image from the page metadata. Always tags its record
/// "Recipe" itself.
pub struct HeuristicExtractor;

impl Extractor for HeuristicExtractor {
    fn extract(&self, context: &ParsingContext<'_>) -> Vec<RecipeRecord> {
        let document = context.document;

        let ingredients = find_list_in_section(document, "Ingredients", score_for_ingredients);
        let instructions =
            find_list_in_section(document, "Directions|Instructions", score_for_instructions);

        if ingredients.is_empty() && instructions.is_empty() {
            debug!("dom scrape found neither ingredients nor instructions");
            return Vec::new();
        }

        let record = RecipeRecord {
            schema_type: Some(TypeField::One("Recipe".to_string())),
            name: element_text(document, "title"),
            description: None,
            image: meta_content(document, "meta[property='og:image']").map(ImageField::Url),
            url: Some(context.url.to_string()),
            author: meta_content(document, "meta[name='author']")
                .map(|name| AuthorField::Person(Person::named(name))),
            recipe_ingredient: Some(IngredientsField::Many(ingredients)),
            recipe_instructions: Some(InstructionsField::Steps(
                instructions.into_iter().map(InstructionStep::Text).collect(),
            )),
            date_published: None,
            extra: Map::new(),
        };

        vec![record]
    }
}

fn element_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(str::to_string)
        .filter(|content| !content.is_empty())
}
