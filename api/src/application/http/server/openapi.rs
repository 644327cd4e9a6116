use crate::application::http::{health::router::HealthApiDoc, recipe::router::RecipeApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "PantryChef API",
    description = "Turns a list of ingredients into structured recipes"
))]
pub struct ApiDoc;

pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(HealthApiDoc::openapi());
    openapi.merge(RecipeApiDoc::openapi());
    openapi
}
