//! Prompt construction for recipe remixes

use crate::recipe::Recipe;

pub const SYSTEM_PROMPT: &str = "You are a creative chef assistant.";

/// System and user messages for one remix request
#[derive(Debug, Clone, PartialEq)]
pub struct RemixPrompt {
    pub system: String,
    pub user: String,
}

impl RemixPrompt {
    /// Embed the theme and the full recipe as JSON in a single user message
    pub fn build(recipe: &Recipe, theme: &str) -> Self {
        let recipe_json = serde_json::to_string(recipe).unwrap_or_else(|_| recipe.name.clone());

        let mut user = String::new();
        user.push_str("You are a creative chef! Given this recipe (in JSON) and the remix theme, ");
        user.push_str("create a short, fun, doable remix. ");
        user.push_str("Highlight any changed ingredients or instructions.\n\n");
        user.push_str(&format!("Remix Theme: {}\n", theme.trim()));
        user.push_str(&format!("Recipe JSON: {}", recipe_json));

        Self {
            system: SYSTEM_PROMPT.to_string(),
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Ingredient;

    #[test]
    fn test_prompt_embeds_theme_and_recipe() {
        let recipe = Recipe {
            name: "Shakshuka".to_string(),
            image_url: None,
            instructions: "Simmer tomatoes, crack eggs.".to_string(),
            ingredients: vec![Ingredient {
                name: "Eggs".to_string(),
                measure: Some("4".to_string()),
            }],
            category: Some("Vegetarian".to_string()),
            area: None,
            tags: Vec::new(),
            source_url: None,
            video_url: None,
        };

        let prompt = RemixPrompt::build(&recipe, "  campfire  ");
        assert_eq!(prompt.system, SYSTEM_PROMPT);
        assert!(prompt.user.contains("Remix Theme: campfire\n"));
        assert!(prompt.user.contains(r#""name":"Shakshuka""#));
        assert!(prompt.user.contains(r#"{"name":"Eggs","measure":"4"}"#));
        assert!(!prompt.user.contains("image_url"));
    }
}
