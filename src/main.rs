use std::env;

use recipe_grabber::config::Settings;
use recipe_grabber::fetch_recipes;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let url = args.get(1).ok_or("Please provide a URL as an argument")?;

    let settings = Settings::load()?;
    let recipes = fetch_recipes(url, &settings)?;

    if recipes.is_empty() {
        eprintln!("No recipe found on this page.");
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&recipes)?);
    Ok(())
}
