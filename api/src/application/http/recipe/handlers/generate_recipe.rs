use axum::extract::State;

use crate::application::http::{
    recipe::validators::GenerateRecipeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse, ValidateJson, into_api_result},
            response::Response,
        },
        app_state::AppState,
    },
};
use pantrychef_core::domain::recipe::{Recipe, RecipeQuery, RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateRecipeResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub recipe: Recipe,
}

#[utoipa::path(
    post,
    path = "/generate_recipe",
    tag = "recipe",
    summary = "Generate a recipe",
    description = "Generates one detailed recipe from the supplied ingredients. When the model reply cannot be structured, a fallback recipe carrying an `error` marker is returned with status 200.",
    responses(
        (status = 200, body = GenerateRecipeResponse),
        (status = 400, body = ErrorResponse, description = "Missing body or validation error"),
        (status = 500, body = ErrorResponse, description = "Upstream or parsing failure")
    ),
    request_body = GenerateRecipeValidator
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<GenerateRecipeResponse>, ApiError> {
    tracing::info!("Generating recipe with ingredients: {:?}", payload.ingredients);

    let result = state
        .service
        .generate_recipe(RecipeQuery {
            ingredients: payload.ingredients,
            cuisine_type: payload.cuisine_type,
            dietary_restrictions: payload.dietary_restrictions.unwrap_or_default(),
        })
        .await;

    let recipe = into_api_result(result)?;

    Ok(Response::OK(GenerateRecipeResponse {
        success: true,
        recipe,
    }))
}
