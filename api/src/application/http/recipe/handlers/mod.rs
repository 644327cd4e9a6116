pub mod generate_recipe;
pub mod suggest_recipes;
