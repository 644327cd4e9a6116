use crate::domain::{
    common::services::Service,
    recipe::{
        entities::{GenerationResult, Recipe, RecipeSummary},
        parser::{parse_recipe_response, parse_suggestions_response},
        ports::{LLMClient, RecipeService},
        prompts::{build_recipe_prompt, build_suggestions_prompt},
        value_objects::{MultiRecipeQuery, RecipeQuery},
    },
};

pub const RECIPE_FAILURE_MESSAGE: &str = "Failed to generate recipe";
pub const SUGGESTIONS_FAILURE_MESSAGE: &str = "Failed to generate recipe suggestions";

impl<LLM> RecipeService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn generate_recipe(&self, query: RecipeQuery) -> GenerationResult<Recipe> {
        // 1. Build prompt
        let prompt = build_recipe_prompt(&query);

        // 2. Call LLM, a single attempt
        let outcome = match self.llm_client.generate_with_text(prompt).await {
            // 3. Parse, degrading to the fallback recipe on non JSON text
            Ok(raw_response) => parse_recipe_response(&raw_response),
            Err(e) => Err(e),
        };

        match &outcome {
            Ok(recipe) if recipe.is_fallback() => {
                tracing::warn!("Recipe generated without structure, returning fallback recipe")
            }
            Ok(recipe) => tracing::info!("Recipe generated: {}", recipe.recipe_name),
            Err(e) => tracing::error!("Recipe generation failed: {}", e),
        }

        GenerationResult::from_outcome(outcome, RECIPE_FAILURE_MESSAGE)
    }

    async fn suggest_recipes(&self, query: MultiRecipeQuery) -> GenerationResult<Vec<RecipeSummary>> {
        let prompt = build_suggestions_prompt(&query);

        let outcome = match self.llm_client.generate_with_text(prompt).await {
            Ok(raw_response) => parse_suggestions_response(&raw_response),
            Err(e) => Err(e),
        };

        match &outcome {
            Ok(recipes) => tracing::info!("Generated {} recipe suggestions", recipes.len()),
            Err(e) => tracing::error!("Recipe suggestion failed: {}", e),
        }

        GenerationResult::from_outcome(outcome, SUGGESTIONS_FAILURE_MESSAGE)
    }
}
