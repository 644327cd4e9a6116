//! Prompt templates sent to the text generation model.
//!
//! Both builders are pure: no I/O, no validation. Callers hand in queries that
//! already passed request validation.

use crate::domain::recipe::value_objects::{MultiRecipeQuery, RecipeQuery};

const RECIPE_JSON_TEMPLATE: &str = r#"{
  "recipe_name": "Name of the dish",
  "description": "Brief description of the dish",
  "cuisine_type": "Type of cuisine",
  "prep_time": "Preparation time in minutes",
  "cook_time": "Cooking time in minutes",
  "servings": "Number of servings",
  "difficulty": "Easy/Medium/Hard",
  "ingredients": [
    {"item": "ingredient name", "quantity": "amount", "unit": "measurement unit"}
  ],
  "instructions": [
    "Step 1 instruction",
    "Step 2 instruction"
  ],
  "nutritional_info": {
    "calories": "approximate calories per serving",
    "protein": "grams",
    "carbs": "grams",
    "fat": "grams"
  },
  "tips": [
    "Cooking tip 1",
    "Cooking tip 2"
  ]
}"#;

const SUGGESTIONS_JSON_TEMPLATE: &str = r#"{
  "recipes": [
    {
      "recipe_name": "Name",
      "description": "Brief description",
      "cuisine_type": "Type",
      "difficulty": "Easy/Medium/Hard",
      "estimated_time": "Total time in minutes"
    }
  ]
}"#;

const RECIPE_JSON_ONLY: &str =
    "Provide ONLY the JSON response, no additional text or markdown formatting.";
const SUGGESTIONS_JSON_ONLY: &str = "Provide ONLY the JSON response.";

/// Render the prompt asking for one detailed recipe.
pub fn build_recipe_prompt(query: &RecipeQuery) -> String {
    let ingredients = query.ingredients.join(", ");

    let mut prompt = format!(
        "You are a professional chef. Create a detailed recipe using the following ingredients: {ingredients}\n\
         \n\
         Instructions:\n\
         1. Create ONE complete recipe that uses as many of the provided ingredients as possible\n\
         2. You can suggest common pantry items (salt, pepper, oil, etc.) if needed\n\
         3. Provide the response in the following JSON format ONLY (no additional text):\n\
         \n\
         {RECIPE_JSON_TEMPLATE}\n"
    );

    if let Some(cuisine_type) = query
        .cuisine_type
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        prompt.push_str(&format!("\n- Prefer {cuisine_type} cuisine style"));
    }

    if !query.dietary_restrictions.is_empty() {
        prompt.push_str(&format!(
            "\n- Follow these dietary restrictions: {}",
            query.dietary_restrictions.join(", ")
        ));
    }

    prompt.push_str("\n\n");
    prompt.push_str(RECIPE_JSON_ONLY);
    prompt
}

/// Render the prompt asking for `count` short recipe ideas.
pub fn build_suggestions_prompt(query: &MultiRecipeQuery) -> String {
    let ingredients = query.ingredients.join(", ");
    let count = query.count;

    format!(
        "You are a professional chef. Suggest {count} different recipes using these ingredients: {ingredients}\n\
         \n\
         Provide {count} brief recipe ideas in JSON format:\n\
         {SUGGESTIONS_JSON_TEMPLATE}\n\
         \n\
         {SUGGESTIONS_JSON_ONLY}"
    )
}
