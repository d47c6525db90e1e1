//! Pure text classifiers for "looks like an ingredient line" and "looks
//! like an instruction line". The tables and threshold are empirical,
//! tuned against fixture pages; they live here as constants so retuning
//! happens in one place.

/// A line joins a harvested list only when its score strictly exceeds this.
pub const QUALIFY_THRESHOLD: u32 = 2;

/// Whole-word units of measure, matched case-insensitively.
pub const UNIT_WORDS: &[&str] = &[
    "cup",
    "cups",
    "pound",
    "pounds",
    "lb",
    "lbs",
    "oz",
    "teaspoon",
    "teaspoons",
    "tsp",
    "tablespoon",
    "tablespoons",
    "tbsp",
];

/// Single-word pantry staples; "olive oil" is handled as a token pair.
pub const COMMON_INGREDIENT_WORDS: &[&str] = &[
    "salt", "butter", "sugar", "flour", "egg", "eggs", "milk", "water",
];

/// Imperative verbs that open or pepper instruction steps.
pub const INSTRUCTION_VERBS: &[&str] = &[
    "chop", "sprinkle", "mix", "heat", "cook", "stir", "boil", "remove", "cover", "combine",
    "preheat", "slice", "dice", "season",
];

const VULGAR_FRACTIONS: &[char] = &[
    '¼', '½', '¾', '⅐', '⅑', '⅒', '⅓', '⅔', '⅕', '⅖', '⅗', '⅘', '⅙', '⅚', '⅛', '⅜', '⅝', '⅞',
];

/// Score a line for ingredient-ness. "1 tablespoon water" scores high;
/// a paragraph of prose does not.
pub fn score_for_ingredients(text: &str) -> u32 {
    let mut score = 0;
    if text.chars().count() < 100 {
        score += 1;
    }
    if text
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || VULGAR_FRACTIONS.contains(&c))
    {
        score += 1;
    }
    let tokens = lower_tokens(text);
    if tokens.iter().any(|t| UNIT_WORDS.contains(&t.as_str())) {
        score += 2;
    }
    if tokens
        .iter()
        .any(|t| COMMON_INGREDIENT_WORDS.contains(&t.as_str()))
        || tokens
            .windows(2)
            .any(|pair| pair[0] == "olive" && pair[1] == "oil")
    {
        score += 1;
    }
    score
}

/// Score a line for instruction-ness: sentence-length prose that starts
/// like a step and contains a cooking verb.
pub fn score_for_instructions(text: &str) -> u32 {
    let mut score = 0;
    let len = text.chars().count();
    if (80..300).contains(&len) {
        score += 1;
    }
    if starts_with_step_marker(text) {
        score += 1;
    }
    if text.chars().next().is_some_and(|c| c.is_uppercase()) {
        score += 1;
    }
    if text.ends_with(['.', '!', '?']) {
        score += 1;
    }
    if lower_tokens(text)
        .iter()
        .any(|t| INSTRUCTION_VERBS.contains(&t.as_str()))
    {
        score += 2;
    }
    score
}

/// "1." / "12." enumerators and common bullet glyphs.
fn starts_with_step_marker(text: &str) -> bool {
    if text.starts_with(['•', '-', '*']) {
        return true;
    }
    let digits = text.chars().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && text[digits..].starts_with('.')
}

fn lower_tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}
