use std::sync::Arc;

use axum::extract::FromRef;
use pantrychef_core::application::PantryChefService;

use crate::args::{Args, RecipeArgs};

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: PantryChefService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: PantryChefService) -> Self {
        Self { args, service }
    }
}

impl FromRef<AppState> for RecipeArgs {
    fn from_ref(state: &AppState) -> Self {
        state.args.recipe.clone()
    }
}
