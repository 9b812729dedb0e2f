//! Recipe records normalized from the provider's meal objects

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of numbered ingredient/measure field pairs in a meal object.
///
/// This is a detail of the provider's flat schema (`strIngredient1` ..
/// `strIngredient20`), not a limit of the application. A provider exposing
/// a structured ingredient list should be mapped directly instead.
pub const INGREDIENT_SLOTS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure: Option<String>,
}

impl Ingredient {
    /// Display line: the measure followed by the ingredient, or just the
    /// ingredient when no measure is given
    pub fn line(&self) -> String {
        match &self.measure {
            Some(measure) => format!("{} {}", measure, self.name),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub instructions: String,
    pub ingredients: Vec<Ingredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl Recipe {
    /// Build a recipe from one provider meal object.
    ///
    /// Returns `None` when the object has no usable `strMeal`, since the name
    /// is the recipe's identity. The name is kept exactly as the provider
    /// sent it so saved names match later lookups.
    pub fn from_meal(meal: &Map<String, Value>) -> Option<Self> {
        let name = meal
            .get("strMeal")?
            .as_str()
            .filter(|s| !s.trim().is_empty())?
            .to_string();

        Some(Self {
            name,
            image_url: text_field(meal, "strMealThumb"),
            instructions: meal
                .get("strInstructions")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            ingredients: extract_ingredients(meal),
            category: text_field(meal, "strCategory"),
            area: text_field(meal, "strArea"),
            tags: text_field(meal, "strTags")
                .map(|tags| {
                    tags.split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            source_url: text_field(meal, "strSource"),
            video_url: text_field(meal, "strYoutube"),
        })
    }
}

/// Scan the numbered ingredient slots of a meal object.
///
/// A slot contributes only when its ingredient is non-blank; its measure is
/// attached only when non-blank too.
pub fn extract_ingredients(meal: &Map<String, Value>) -> Vec<Ingredient> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|i| {
            let name = text_field(meal, &format!("strIngredient{i}"))?;
            let measure = text_field(meal, &format!("strMeasure{i}"));
            Some(Ingredient { name, measure })
        })
        .collect()
}

/// Trimmed string value of `key`, or `None` when absent, null, non-string or blank
fn text_field(meal: &Map<String, Value>, key: &str) -> Option<String> {
    let value = meal.get(key)?.as_str()?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meal(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_empty_measure_renders_ingredient_alone() {
        let meal = meal(json!({
            "strMeal": "Plain",
            "strIngredient1": "Rice",
            "strMeasure1": "1 cup",
            "strIngredient2": "Water",
            "strMeasure2": "2 cups",
            "strIngredient3": "Salt",
            "strMeasure3": "",
        }));

        let ingredients = extract_ingredients(&meal);
        assert_eq!(ingredients.len(), 3);
        assert_eq!(ingredients[2].line(), "Salt");
        assert_eq!(ingredients[0].line(), "1 cup Rice");
    }

    #[test]
    fn test_absent_slot_produces_no_line() {
        let meal = meal(json!({
            "strMeal": "Gappy",
            "strIngredient1": "Flour",
            "strIngredient2": "Sugar",
            "strIngredient3": "Salt",
            "strMeasure3": "",
            "strIngredient5": "Eggs",
            "strMeasure5": "2",
        }));

        let lines: Vec<String> = extract_ingredients(&meal).iter().map(Ingredient::line).collect();
        assert_eq!(lines, vec!["Flour", "Sugar", "Salt", "2 Eggs"]);
    }

    #[test]
    fn test_blank_and_null_ingredients_are_skipped() {
        let meal = meal(json!({
            "strMeal": "Sparse",
            "strIngredient1": "  ",
            "strMeasure1": "1 tsp",
            "strIngredient2": null,
            "strIngredient3": "Butter",
            "strMeasure3": " ",
            "strIngredient21": "Ignored",
        }));

        let ingredients = extract_ingredients(&meal);
        assert_eq!(
            ingredients,
            vec![Ingredient {
                name: "Butter".to_string(),
                measure: None
            }]
        );
    }

    #[test]
    fn test_from_meal_requires_name() {
        assert!(Recipe::from_meal(&meal(json!({"strInstructions": "Cook"}))).is_none());
        assert!(Recipe::from_meal(&meal(json!({"strMeal": "  "}))).is_none());
    }

    #[test]
    fn test_from_meal_keeps_name_verbatim() {
        let recipe = Recipe::from_meal(&meal(json!({"strMeal": " Chicken Karaage "}))).unwrap();
        assert_eq!(recipe.name, " Chicken Karaage ");
    }

    #[test]
    fn test_from_meal_reads_optional_fields() {
        let recipe = Recipe::from_meal(&meal(json!({
            "strMeal": "Teriyaki Chicken Casserole",
            "strCategory": "Chicken",
            "strArea": "Japanese",
            "strTags": "Meat,Casserole, ",
            "strInstructions": "Preheat oven.\r\nBake.",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
            "strYoutube": "",
            "strSource": null,
        })))
        .unwrap();

        assert_eq!(recipe.area.as_deref(), Some("Japanese"));
        assert_eq!(recipe.tags, vec!["Meat", "Casserole"]);
        assert!(recipe.video_url.is_none());
        assert!(recipe.source_url.is_none());
        assert_eq!(recipe.instructions, "Preheat oven.\r\nBake.");
    }

    #[test]
    fn test_missing_instructions_default_to_empty() {
        let recipe = Recipe::from_meal(&meal(json!({"strMeal": "Mystery"}))).unwrap();
        assert_eq!(recipe.instructions, "");
        assert!(recipe.ingredients.is_empty());
    }
}
