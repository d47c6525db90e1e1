use log::debug;
use scraper::Html;

use crate::extractors::{
    Extractor, HeuristicExtractor, LinkedDataExtractor, MicrodataExtractor, ParsingContext,
};
use crate::model::RecipeRecord;
use crate::normalize::{normalize_record, NormalizeOptions};

/// Run the strategies in priority order over one parsed document and
/// return the first non-empty result set, normalized. Strategies are never
/// merged; the first productive one wins entirely. An empty vec means "no
/// recipe found" and is an expected outcome, not a failure.
pub fn extract(document: &Html, url: &str, options: &NormalizeOptions) -> Vec<RecipeRecord> {
    let context = ParsingContext { document, url };
    let strategies: [(&str, &dyn Extractor); 3] = [
        ("ld+json", &LinkedDataExtractor),
        ("microdata", &MicrodataExtractor),
        ("dom scrape", &HeuristicExtractor),
    ];

    for (name, strategy) in strategies {
        let records = strategy.extract(&context);
        if !records.is_empty() {
            debug!("{name} strategy produced {} record(s)", records.len());
            return records
                .into_iter()
                .map(|record| normalize_record(record, options))
                .collect();
        }
        debug!("{name} strategy produced nothing, trying the next");
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ImageField, IngredientsField};

    const OPTIONS: NormalizeOptions = NormalizeOptions {
        unescape_html: false,
    };

    #[test]
    fn linked_data_wins_over_microdata_on_the_same_page() {
        let html = r#"
            <html>
            <head>
                <script type="application/ld+json">
                {
                    "@type": "Recipe",
                    "name": "From JSON-LD",
                    "image": [{"url": "https://example.com/a.jpg"}],
                    "recipeIngredient": "1 fully cooked spiral cut ham, about 8 pounds",
                    "recipeInstructions": ["Roast the ham until warmed through."]
                }
                </script>
            </head>
            <body>
                <div itemscope itemtype="http://schema.org/Recipe">
                    <span itemprop="name">From Microdata</span>
                </div>
            </body>
            </html>
        "#;
        let document = Html::parse_document(html);
        let records = extract(&document, "https://example.com/ham", &OPTIONS);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_deref(), Some("From JSON-LD"));
        // normalization ran on the winning records
        assert_eq!(
            records[0].image,
            Some(ImageField::Url("https://example.com/a.jpg".to_string()))
        );
        assert_eq!(
            records[0].recipe_ingredient,
            Some(IngredientsField::Many(vec![
                "1 fully cooked spiral cut ham, about 8 pounds".to_string()
            ]))
        );
    }

    #[test]
    fn falls_through_to_microdata_then_heuristic() {
        let microdata_page = r#"
            <html><body>
                <div itemscope itemtype="http://schema.org/Recipe">
                    <span itemprop="name">Microdata Wins</span>
                </div>
            </body></html>
        "#;
        let document = Html::parse_document(microdata_page);
        let records = extract(&document, "https://example.com/md", &OPTIONS);
        assert_eq!(records[0].name.as_deref(), Some("Microdata Wins"));

        let plain_page = r#"
            <html>
            <head><title>Plain Page Pie</title></head>
            <body>
                <div>
                    <h2>Ingredients</h2>
                    <ul><li>2 cups flour</li><li>1 cup sugar</li></ul>
                </div>
            </body>
            </html>
        "#;
        let document = Html::parse_document(plain_page);
        let records = extract(&document, "https://example.com/plain", &OPTIONS);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_deref(), Some("Plain Page Pie"));
    }

    #[test]
    fn page_with_nothing_yields_an_empty_list() {
        let document = Html::parse_document(
            "<html><head><title>Blog</title></head><body><p>Thoughts on bread.</p></body></html>",
        );
        assert!(extract(&document, "https://example.com/blog", &OPTIONS).is_empty());
    }
}
