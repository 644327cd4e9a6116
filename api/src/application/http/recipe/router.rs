use super::handlers::{
    generate_recipe::{__path_generate_recipe, generate_recipe},
    suggest_recipes::{__path_suggest_recipes, suggest_recipes},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipe, suggest_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/generate_recipe", state.args.server.root_path),
            post(generate_recipe),
        )
        .route(
            &format!("{}/suggest_recipes", state.args.server.root_path),
            post(suggest_recipes),
        )
}
