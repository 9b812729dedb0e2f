//! Text rendering for the display regions

use crate::error::{FetchError, RemixError};
use crate::recipe::Recipe;

pub const LOADING_RANDOM: &str = "Loading...";
pub const LOADING_SAVED: &str = "Loading saved recipe...";
pub const RANDOM_FAILED: &str = "Sorry, couldn't load a recipe.";
pub const SAVED_NOT_FOUND: &str = "Sorry, we couldn't find that recipe.";
pub const SAVED_FAILED: &str = "Error loading saved recipe.";
pub const REMIX_LOADING: &str =
    "Crafting a delicious twist just for you...\nHang tight while our culinary magic happens!";

/// Full recipe card for the recipe region
pub fn render_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();
    out.push_str(&recipe.name);
    out.push('\n');

    let origin: Vec<&str> = [recipe.category.as_deref(), recipe.area.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !origin.is_empty() {
        out.push_str(&origin.join(" · "));
        out.push('\n');
    }

    if let Some(image) = &recipe.image_url {
        out.push_str(&format!("Image: {}\n", image));
    }

    out.push_str("\nIngredients:\n");
    for line in ingredient_lines(recipe) {
        out.push_str(&format!("  • {}\n", line));
    }

    out.push_str("\nInstructions:\n");
    out.push_str(&normalize_newlines(&recipe.instructions));
    out.push('\n');

    if !recipe.tags.is_empty() {
        out.push_str(&format!("\nTags: {}\n", recipe.tags.join(", ")));
    }
    if let Some(source) = &recipe.source_url {
        out.push_str(&format!("Source: {}\n", source));
    }
    if let Some(video) = &recipe.video_url {
        out.push_str(&format!("Video: {}\n", video));
    }

    out.push_str("\n[save] to keep this recipe");
    out
}

pub fn ingredient_lines(recipe: &Recipe) -> Vec<String> {
    recipe.ingredients.iter().map(|i| i.line()).collect()
}

/// Numbered list of saved names, or `None` when the region should be hidden
pub fn render_favorites(names: &[String]) -> Option<String> {
    if names.is_empty() {
        return None;
    }

    let lines: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:>2}. {}", i + 1, name))
        .collect();
    Some(lines.join("\n"))
}

pub fn fetch_random_failure(_error: &FetchError) -> &'static str {
    RANDOM_FAILED
}

pub fn fetch_saved_failure(error: &FetchError) -> &'static str {
    match error {
        FetchError::NotFound(_) => SAVED_NOT_FOUND,
        FetchError::Network(_) => SAVED_FAILED,
    }
}

pub fn remix_failure(error: &RemixError) -> String {
    let hint = match error {
        RemixError::MalformedResponse(_) => "Please try again in a moment.",
        RemixError::Network(_) => "Please check your connection and try again.",
        RemixError::Unconfigured(_) => {
            return "Remixing is unavailable: no API key is configured.\n\
                    Set RECIPE_REMIX_API_KEY or add api_key under [remix] in the config file."
                .to_string()
        }
    };
    format!("Oops! Something went wrong while creating your remix.\n{}", hint)
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Ingredient;

    fn casserole() -> Recipe {
        Recipe {
            name: "Teriyaki Chicken Casserole".to_string(),
            image_url: Some("https://example.test/casserole.jpg".to_string()),
            instructions: "Preheat oven to 350F.\r\nCombine sauce.\r\nBake 35 minutes.".to_string(),
            ingredients: vec![
                Ingredient {
                    name: "soy sauce".to_string(),
                    measure: Some("3/4 cup".to_string()),
                },
                Ingredient {
                    name: "Salt".to_string(),
                    measure: None,
                },
            ],
            category: Some("Chicken".to_string()),
            area: Some("Japanese".to_string()),
            tags: vec!["Meat".to_string(), "Casserole".to_string()],
            source_url: None,
            video_url: Some("https://www.youtube.com/watch?v=4aZr5hZXP_s".to_string()),
        }
    }

    #[test]
    fn test_render_recipe_card() {
        let card = render_recipe(&casserole());

        assert!(card.starts_with("Teriyaki Chicken Casserole\nChicken · Japanese\n"));
        assert!(card.contains("Image: https://example.test/casserole.jpg\n"));
        assert!(card.contains("  • 3/4 cup soy sauce\n"));
        assert!(card.contains("  • Salt\n"));
        assert!(card.contains("Preheat oven to 350F.\nCombine sauce.\nBake 35 minutes.\n"));
        assert!(!card.contains('\r'));
        assert!(card.contains("Tags: Meat, Casserole\n"));
        assert!(card.contains("Video: https://www.youtube.com/watch?v=4aZr5hZXP_s\n"));
        assert!(!card.contains("Source:"));
    }

    #[test]
    fn test_render_favorites() {
        assert_eq!(render_favorites(&[]), None);
        let names = vec!["Laksa".to_string(), "Poutine".to_string()];
        assert_eq!(
            render_favorites(&names).unwrap(),
            " 1. Laksa\n 2. Poutine"
        );
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            fetch_saved_failure(&FetchError::NotFound("x".into())),
            SAVED_NOT_FOUND
        );
        assert_eq!(
            fetch_saved_failure(&FetchError::Network("x".into())),
            SAVED_FAILED
        );
        assert_eq!(
            fetch_random_failure(&FetchError::NotFound("x".into())),
            RANDOM_FAILED
        );

        let malformed = remix_failure(&RemixError::MalformedResponse("x".into()));
        assert!(malformed.contains("try again in a moment"));
        let network = remix_failure(&RemixError::Network("x".into()));
        assert!(network.contains("check your connection"));
    }
}
