use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{GenerationResult, Recipe, RecipeSummary},
        value_objects::{MultiRecipeQuery, RecipeQuery},
    },
};

/// LLM Client trait for calling text generation models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for recipe generation
pub trait RecipeService: Send + Sync {
    fn generate_recipe(
        &self,
        query: RecipeQuery,
    ) -> impl Future<Output = GenerationResult<Recipe>> + Send;

    fn suggest_recipes(
        &self,
        query: MultiRecipeQuery,
    ) -> impl Future<Output = GenerationResult<Vec<RecipeSummary>>> + Send;
}
