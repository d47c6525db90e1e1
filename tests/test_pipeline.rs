use recipe_grabber::model::{
    AuthorField, ImageField, IngredientsField, InstructionStep, InstructionsField,
};
use recipe_grabber::{extract, NormalizeOptions};
use scraper::Html;

const URL: &str = "https://example.com/recipe";

fn run(html: &str) -> Vec<recipe_grabber::model::RecipeRecord> {
    let document = Html::parse_document(html);
    extract(&document, URL, &NormalizeOptions::default())
}

#[test]
fn complete_linked_data_wins_without_touching_other_strategies() {
    let html = r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Totally Different Page Title</title>
            <script type="application/ld+json">
            {
                "@context": "https://schema.org/",
                "@type": "Recipe",
                "name": "Street Tacos",
                "description": "Weeknight tacos",
                "image": ["https://example.com/tacos.jpg"],
                "datePublished": "2021-03-14",
                "author": {"@type": "Person", "name": "R. Cook"},
                "recipeIngredient": [
                    "Tortillas (preferably white corn)",
                    "1 pound carne asada"
                ],
                "recipeInstructions": [
                    {"@type": "HowToStep", "text": "Warm the tortillas."},
                    {"@type": "HowToStep", "text": "Fill and serve."}
                ]
            }
            </script>
        </head>
        <body>
            <div itemscope itemtype="http://schema.org/Recipe">
                <span itemprop="name">Decoy Microdata Recipe</span>
            </div>
        </body>
        </html>
    "#;

    let records = run(html);
    assert_eq!(records.len(), 1);
    let record = &records[0];

    assert_eq!(record.name.as_deref(), Some("Street Tacos"));
    match record.recipe_ingredient.as_ref().unwrap() {
        IngredientsField::Many(list) => {
            assert_eq!(list[0], "Tortillas (preferably white corn)");
        }
        other => panic!("expected ingredient list, got {:?}", other),
    }
    // image array normalized to a scalar url
    assert_eq!(
        record.image,
        Some(ImageField::Url("https://example.com/tacos.jpg".to_string()))
    );
    // url comes from the caller, the date is passed through untouched
    assert_eq!(record.url.as_deref(), Some(URL));
    assert_eq!(record.date_published.as_deref(), Some("2021-03-14"));
    // the name proves microdata and dom scraping never ran
    assert_ne!(record.name.as_deref(), Some("Decoy Microdata Recipe"));
}

#[test]
fn partial_linked_data_is_backfilled_from_the_page() {
    let html = r#"
        <html>
        <head>
            <script type="application/ld+json">
            {
                "@type": "Recipe",
                "name": "Holiday Ham",
                "recipeInstructions": ["Roast the ham until warmed through."]
            }
            </script>
        </head>
        <body>
            <div class="ingredients-block">
                <h2>Ingredients</h2>
                <ul>
                    <li>1 fully cooked spiral cut ham, about 8 pounds</li>
                    <li>1 cup brown sugar</li>
                </ul>
            </div>
        </body>
        </html>
    "#;

    let records = run(html);
    assert_eq!(records.len(), 1);
    match records[0].recipe_ingredient.as_ref().unwrap() {
        IngredientsField::Many(list) => {
            assert_eq!(list[0], "1 fully cooked spiral cut ham, about 8 pounds");
        }
        other => panic!("expected ingredient list, got {:?}", other),
    }
}

#[test]
fn sectioned_instructions_keep_their_nested_steps() {
    let html = r#"
        <html><head>
            <script type="application/ld+json">
            {
                "@type": "Recipe",
                "name": "Layer Cake",
                "recipeIngredient": ["3 cups flour"],
                "recipeInstructions": [
                    {
                        "@type": "HowToSection",
                        "name": "Batter",
                        "itemListElement": [
                            {"@type": "HowToStep", "text": "Whisk the dry ingredients."},
                            {"@type": "HowToStep", "text": "Fold in the butter."}
                        ]
                    },
                    {"@type": "HowToStep", "text": "Bake at 350ºF."}
                ]
            }
            </script>
        </head><body></body></html>
    "#;

    let records = run(html);
    match records[0].recipe_instructions.as_ref().unwrap() {
        InstructionsField::Steps(steps) => {
            assert_eq!(steps.len(), 2);
            match &steps[0] {
                InstructionStep::Step(section) => {
                    assert_eq!(section.name.as_deref(), Some("Batter"));
                    let sub = section.item_list_element.as_ref().unwrap();
                    assert_eq!(sub.len(), 2);
                }
                other => panic!("expected section, got {:?}", other),
            }
        }
        other => panic!("expected steps, got {:?}", other),
    }
}

#[test]
fn microdata_page_produces_a_record_when_linked_data_is_absent() {
    let html = r#"
        <html><body>
            <article itemscope itemtype="http://schema.org/Recipe">
                <h1 itemprop="name">Microdata Meatballs</h1>
                <li itemprop="ingredients">1 pound ground beef</li>
                <li itemprop="ingredients">1 large egg, beaten</li>
            </article>
        </body></html>
    "#;

    let records = run(html);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name.as_deref(), Some("Microdata Meatballs"));
    assert_eq!(records[0].url.as_deref(), Some(URL));
    match records[0].recipe_ingredient.as_ref().unwrap() {
        IngredientsField::Many(list) => assert_eq!(list.len(), 2),
        other => panic!("expected list, got {:?}", other),
    }
}

#[test]
fn bare_page_falls_back_to_the_dom_scrape() {
    let html = r#"
        <html>
        <head>
            <title>Boudin Pastry Bites</title>
            <meta name="author" content="Alex Landry">
            <meta property="og:image" content="https://example.com/boudin.jpg">
        </head>
        <body>
            <div>
                <h2>Ingredients</h2>
                <ul>
                    <li>½ cup red pepper jelly, such as Tabasco</li>
                    <li>1 tablespoon water</li>
                </ul>
            </div>
            <div>
                <h2>Directions</h2>
                <ol>
                    <li>Preheat the oven to 350ºF.</li>
                    <li>Bake until golden brown, then cool slightly before serving.</li>
                </ol>
            </div>
        </body>
        </html>
    "#;

    let records = run(html);
    assert_eq!(records.len(), 1);
    let record = &records[0];

    assert_eq!(record.name.as_deref(), Some("Boudin Pastry Bites"));
    assert_eq!(
        record.image,
        Some(ImageField::Url("https://example.com/boudin.jpg".to_string()))
    );
    match record.author.as_ref().unwrap() {
        AuthorField::Person(person) => assert_eq!(person.name.as_deref(), Some("Alex Landry")),
        other => panic!("expected person, got {:?}", other),
    }
    assert_eq!(record.ingredient_count(), 2);
    assert_eq!(record.instruction_count(), 2);
}

#[test]
fn multiple_recipes_on_one_page_all_come_back() {
    let html = r#"
        <html><head>
            <script type="application/ld+json">
            [
                {
                    "@type": "Recipe",
                    "name": "First",
                    "recipeIngredient": ["1 cup rice"],
                    "recipeInstructions": ["Steam the rice."]
                },
                {
                    "@type": "Recipe",
                    "name": "Second",
                    "recipeIngredient": ["2 cups beans"],
                    "recipeInstructions": ["Simmer the beans."]
                }
            ]
            </script>
        </head><body></body></html>
    "#;

    let records = run(html);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name.as_deref(), Some("First"));
    assert_eq!(records[1].name.as_deref(), Some("Second"));
}

#[test]
fn unescape_setting_decodes_every_string() {
    let html = r#"
        <html><head>
            <script type="application/ld+json">
            {
                "@type": "Recipe",
                "name": "Mac &amp; Cheese",
                "recipeIngredient": ["1 lb macaroni", "salt &amp; pepper"],
                "recipeInstructions": ["Boil &amp; drain the macaroni."]
            }
            </script>
        </head><body></body></html>
    "#;

    let document = Html::parse_document(html);
    let records = extract(&document, URL, &NormalizeOptions { unescape_html: true });
    assert_eq!(records[0].name.as_deref(), Some("Mac & Cheese"));
    match records[0].recipe_ingredient.as_ref().unwrap() {
        IngredientsField::Many(list) => assert_eq!(list[1], "salt & pepper"),
        other => panic!("expected list, got {:?}", other),
    }
}
