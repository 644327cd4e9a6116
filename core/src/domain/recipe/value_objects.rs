pub const DEFAULT_MAX_INGREDIENTS: usize = 20;
pub const DEFAULT_SUGGESTION_COUNT: u8 = 3;
pub const MIN_SUGGESTION_COUNT: u8 = 1;
pub const MAX_SUGGESTION_COUNT: u8 = 5;

/// Input for a single detailed recipe. Ingredients are already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeQuery {
    pub ingredients: Vec<String>,
    pub cuisine_type: Option<String>,
    pub dietary_restrictions: Vec<String>,
}

/// Input for a batch of lightweight recipe ideas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiRecipeQuery {
    pub ingredients: Vec<String>,
    pub count: u8,
}
