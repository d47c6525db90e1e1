//! Canonicalizes records regardless of which strategy produced them:
//! `image` collapses to one URL string, `recipeIngredient` is always a
//! list, and (opt-in) every string field is HTML-entity decoded. The
//! unescape pass builds a new record instead of mutating in place, so a
//! parsed node shared between strategies can never be aliased into a
//! half-decoded state.

use html_escape::decode_html_entities;
use serde_json::Value;

use crate::model::{
    AuthorField, ImageEntry, ImageField, ImageObject, IngredientsField, InstructionStep,
    InstructionsField, Person, RecipeRecord, StepObject, TypeField,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Decode HTML entities in every string field. Off by default; the
    /// caller's settings decide, not this layer.
    pub unescape_html: bool,
}

pub fn normalize_record(mut record: RecipeRecord, options: &NormalizeOptions) -> RecipeRecord {
    record.image = record.image.map(normalize_image);
    record.recipe_ingredient = record.recipe_ingredient.map(|field| match field {
        IngredientsField::One(line) => IngredientsField::Many(vec![line]),
        other => other,
    });
    if options.unescape_html {
        record = unescape_record(record);
    }
    record
}

/// Collapse every known image shape to a single URL string. Shapes we do
/// not recognize ride through untouched.
fn normalize_image(image: ImageField) -> ImageField {
    match image {
        ImageField::Url(url) => ImageField::Url(url),
        ImageField::Many(entries) => match entries.into_iter().next() {
            Some(ImageEntry::Url(url)) => ImageField::Url(url),
            Some(ImageEntry::Object(object)) => ImageField::Url(object.url),
            None => ImageField::Many(Vec::new()),
        },
        // schema.org does not list ImageObject as a top-level shape, but
        // some big sites use it anyway
        ImageField::Object(object) => ImageField::Url(object.url),
        ImageField::Other(value) => ImageField::Other(value),
    }
}

fn unescape(text: String) -> String {
    decode_html_entities(&text).into_owned()
}

fn unescape_record(record: RecipeRecord) -> RecipeRecord {
    RecipeRecord {
        schema_type: record.schema_type.map(unescape_type),
        name: record.name.map(unescape),
        description: record.description.map(unescape),
        image: record.image.map(unescape_image),
        url: record.url.map(unescape),
        author: record.author.map(unescape_author),
        recipe_ingredient: record.recipe_ingredient.map(unescape_ingredients),
        recipe_instructions: record.recipe_instructions.map(unescape_instructions),
        date_published: record.date_published.map(unescape),
        extra: record
            .extra
            .into_iter()
            .map(|(key, value)| (key, unescape_value(value)))
            .collect(),
    }
}

fn unescape_type(field: TypeField) -> TypeField {
    match field {
        TypeField::One(name) => TypeField::One(unescape(name)),
        TypeField::Many(names) => TypeField::Many(names.into_iter().map(unescape).collect()),
        TypeField::Other(value) => TypeField::Other(unescape_value(value)),
    }
}

fn unescape_image(field: ImageField) -> ImageField {
    match field {
        ImageField::Url(url) => ImageField::Url(unescape(url)),
        ImageField::Many(entries) => ImageField::Many(
            entries
                .into_iter()
                .map(|entry| match entry {
                    ImageEntry::Url(url) => ImageEntry::Url(unescape(url)),
                    ImageEntry::Object(object) => ImageEntry::Object(unescape_image_object(object)),
                })
                .collect(),
        ),
        ImageField::Object(object) => ImageField::Object(unescape_image_object(object)),
        ImageField::Other(value) => ImageField::Other(unescape_value(value)),
    }
}

fn unescape_image_object(object: ImageObject) -> ImageObject {
    ImageObject {
        url: unescape(object.url),
        extra: object
            .extra
            .into_iter()
            .map(|(key, value)| (key, unescape_value(value)))
            .collect(),
    }
}

fn unescape_author(field: AuthorField) -> AuthorField {
    match field {
        AuthorField::Name(name) => AuthorField::Name(unescape(name)),
        AuthorField::Many(authors) => {
            AuthorField::Many(authors.into_iter().map(unescape_author).collect())
        }
        AuthorField::Person(person) => AuthorField::Person(unescape_person(person)),
        AuthorField::Other(value) => AuthorField::Other(unescape_value(value)),
    }
}

fn unescape_person(person: Person) -> Person {
    Person {
        person_type: person.person_type,
        name: person.name.map(unescape),
        extra: person
            .extra
            .into_iter()
            .map(|(key, value)| (key, unescape_value(value)))
            .collect(),
    }
}

fn unescape_ingredients(field: IngredientsField) -> IngredientsField {
    match field {
        IngredientsField::One(line) => IngredientsField::One(unescape(line)),
        IngredientsField::Many(lines) => {
            IngredientsField::Many(lines.into_iter().map(unescape).collect())
        }
        IngredientsField::Other(value) => IngredientsField::Other(unescape_value(value)),
    }
}

fn unescape_instructions(field: InstructionsField) -> InstructionsField {
    match field {
        InstructionsField::Text(text) => InstructionsField::Text(unescape(text)),
        InstructionsField::Steps(steps) => {
            InstructionsField::Steps(steps.into_iter().map(unescape_step).collect())
        }
        InstructionsField::Other(value) => InstructionsField::Other(unescape_value(value)),
    }
}

fn unescape_step(step: InstructionStep) -> InstructionStep {
    match step {
        InstructionStep::Text(text) => InstructionStep::Text(unescape(text)),
        InstructionStep::Step(object) => InstructionStep::Step(StepObject {
            step_type: object.step_type,
            name: object.name.map(unescape),
            text: object.text.map(unescape),
            item_list_element: object
                .item_list_element
                .map(|steps| steps.into_iter().map(unescape_step).collect()),
            extra: object
                .extra
                .into_iter()
                .map(|(key, value)| (key, unescape_value(value)))
                .collect(),
        }),
    }
}

fn unescape_value(value: Value) -> Value {
    match value {
        Value::String(text) => Value::String(unescape(text)),
        Value::Array(items) => Value::Array(items.into_iter().map(unescape_value).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, unescape_value(value)))
                .collect(),
        ),
        other => other,
    }
}
