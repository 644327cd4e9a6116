use super::handlers::{__path_get_health, __path_get_home, get_health, get_home};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_home, get_health))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    let home_path = if root_path.is_empty() {
        "/".to_string()
    } else {
        root_path.to_string()
    };

    Router::new()
        .route(&home_path, get(get_home))
        .route(&format!("{}/health", root_path), get(get_health))
}
