use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The canonical record every extraction strategy produces.
///
/// Fields that vary wildly in the wild (`@type`, `image`, `author`,
/// `recipeIngredient`, `recipeInstructions`) are modelled as untagged unions
/// covering each observed shape, with a `Value` catch-all so an unexpected
/// shape rides along instead of failing the whole node. Keys we do not
/// project are kept in `extra` so templates can still reach them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecipeRecord {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<TypeField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageField>,

    /// Always the caller-supplied page URL; never trusted from the markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorField>,

    #[serde(
        rename = "recipeIngredient",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub recipe_ingredient: Option<IngredientsField>,

    #[serde(
        rename = "recipeInstructions",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub recipe_instructions: Option<InstructionsField>,

    /// Left unparsed; upstream formats are locale-variable.
    #[serde(
        rename = "datePublished",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub date_published: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RecipeRecord {
    pub fn ingredient_count(&self) -> usize {
        match &self.recipe_ingredient {
            Some(IngredientsField::One(_)) => 1,
            Some(IngredientsField::Many(list)) => list.len(),
            _ => 0,
        }
    }

    pub fn instruction_count(&self) -> usize {
        match &self.recipe_instructions {
            Some(InstructionsField::Text(_)) => 1,
            Some(InstructionsField::Steps(steps)) => steps.len(),
            _ => 0,
        }
    }
}

/// `@type` as it appears in the wild: a scalar or a list of type names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeField {
    One(String),
    Many(Vec<String>),
    Other(Value),
}

impl TypeField {
    pub fn includes_recipe(&self) -> bool {
        match self {
            TypeField::One(name) => name.eq_ignore_ascii_case("Recipe"),
            TypeField::Many(names) => names.iter().any(|n| n.eq_ignore_ascii_case("Recipe")),
            TypeField::Other(_) => false,
        }
    }
}

/// Image shapes seen on real pages: a bare URL, an array of URLs or image
/// objects, or a single image object. Normalization collapses all of these
/// to `Url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageField {
    Url(String),
    Many(Vec<ImageEntry>),
    Object(ImageObject),
    Other(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageEntry {
    Url(String),
    Object(ImageObject),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageObject {
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorField {
    Name(String),
    Many(Vec<AuthorField>),
    Person(Person),
    Other(Value),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub person_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Person {
    pub fn named(name: impl Into<String>) -> Self {
        Person {
            person_type: Some("Person".to_string()),
            name: Some(name.into()),
            extra: Map::new(),
        }
    }
}

/// `recipeIngredient` is sometimes a bare string; normalization always
/// leaves it as `Many`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientsField {
    One(String),
    Many(Vec<String>),
    Other(Value),
}

/// `recipeInstructions`: a single prose blob, or a list of plain strings
/// and/or step objects. Both list shapes survive the pipeline untouched;
/// only collaborators flatten them for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InstructionsField {
    Text(String),
    Steps(Vec<InstructionStep>),
    Other(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InstructionStep {
    Text(String),
    Step(StepObject),
}

/// A `HowToStep`, or a `HowToSection` when `item_list_element` carries
/// sub-steps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StepObject {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub step_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(
        rename = "itemListElement",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub item_list_element: Option<Vec<InstructionStep>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
