use std::borrow::Cow;

use pantrychef_core::domain::recipe::DEFAULT_SUGGESTION_COUNT;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::application::http::server::api_entities::api_error::ValidateRequest;
use crate::args::RecipeArgs;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipeValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "at least one ingredient is required"))]
    #[schema(example = json!(["chicken", "tomato", "onion"]))]
    pub ingredients: Vec<String>,

    #[serde(default)]
    #[schema(example = "Italian")]
    pub cuisine_type: Option<String>,

    #[serde(default)]
    #[schema(example = json!(["gluten-free"]))]
    pub dietary_restrictions: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SuggestRecipesValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "at least one ingredient is required"))]
    #[schema(example = json!(["chicken", "rice", "vegetables"]))]
    pub ingredients: Vec<String>,

    #[serde(default = "default_suggestion_count")]
    #[validate(range(min = 1, max = 5, message = "count must be between 1 and 5"))]
    #[schema(example = 3, minimum = 1, maximum = 5)]
    pub count: u8,
}

fn default_suggestion_count() -> u8 {
    DEFAULT_SUGGESTION_COUNT
}

impl ValidateRequest for GenerateRecipeValidator {
    fn validate_request(&self, limits: &RecipeArgs) -> Result<(), ValidationErrors> {
        with_ingredient_rules(self.validate(), &self.ingredients, limits.max_ingredients)
    }
}

impl ValidateRequest for SuggestRecipesValidator {
    fn validate_request(&self, limits: &RecipeArgs) -> Result<(), ValidationErrors> {
        with_ingredient_rules(self.validate(), &self.ingredients, limits.max_ingredients)
    }
}

/// Adds the ingredient rules that depend on runtime configuration to the
/// outcome of the derived rules.
fn with_ingredient_rules(
    derived: Result<(), ValidationErrors>,
    ingredients: &[String],
    max_ingredients: usize,
) -> Result<(), ValidationErrors> {
    let mut errors = derived.err().unwrap_or_else(ValidationErrors::new);

    if ingredients.len() > max_ingredients {
        let mut error = ValidationError::new("length");
        error.message = Some(Cow::Owned(format!(
            "at most {max_ingredients} ingredients are allowed, got {}",
            ingredients.len()
        )));
        errors.add("ingredients", error);
    }

    if let Some(position) = ingredients.iter().position(|i| i.trim().is_empty()) {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Owned(format!(
            "ingredient at position {position} must not be empty"
        )));
        errors.add("ingredients", error);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
