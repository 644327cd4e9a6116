use axum::extract::State;

use crate::application::http::{
    recipe::validators::SuggestRecipesValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse, ValidateJson, into_api_result},
            response::Response,
        },
        app_state::AppState,
    },
};
use pantrychef_core::domain::recipe::{MultiRecipeQuery, RecipeService, RecipeSummary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuggestRecipesResponse {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub recipes: Vec<RecipeSummary>,
}

#[utoipa::path(
    post,
    path = "/suggest_recipes",
    tag = "recipe",
    summary = "Suggest recipes",
    description = "Returns between 1 and 5 short recipe ideas for the supplied ingredients.",
    responses(
        (status = 200, body = SuggestRecipesResponse),
        (status = 400, body = ErrorResponse, description = "Missing body or validation error"),
        (status = 500, body = ErrorResponse, description = "Upstream or parsing failure")
    ),
    request_body = SuggestRecipesValidator
)]
pub async fn suggest_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SuggestRecipesValidator>,
) -> Result<Response<SuggestRecipesResponse>, ApiError> {
    tracing::info!(
        "Suggesting {} recipes with ingredients: {:?}",
        payload.count,
        payload.ingredients
    );

    let result = state
        .service
        .suggest_recipes(MultiRecipeQuery {
            ingredients: payload.ingredients,
            count: payload.count,
        })
        .await;

    let recipes = into_api_result(result)?;

    Ok(Response::OK(SuggestRecipesResponse {
        success: true,
        recipes,
    }))
}
