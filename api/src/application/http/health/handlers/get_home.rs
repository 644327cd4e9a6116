use std::collections::BTreeMap;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HomeResponse {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Service information",
    description = "Returns the service name, version and a directory of the available endpoints.",
    responses(
        (status = 200, body = HomeResponse)
    )
)]
pub async fn get_home(State(state): State<AppState>) -> Json<HomeResponse> {
    let root_path = &state.args.server.root_path;

    let endpoints = [
        ("generate_recipe", "POST - Generate a single detailed recipe"),
        ("suggest_recipes", "POST - Get multiple recipe suggestions"),
        ("health", "GET - Health check"),
    ]
    .into_iter()
    .map(|(path, description)| (format!("{root_path}/{path}"), description.to_string()))
    .collect();

    Json(HomeResponse {
        message: "PantryChef API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}
