pub mod generation_result;
pub mod recipe;
pub mod recipe_summary;

pub use generation_result::*;
pub use recipe::*;
pub use recipe_summary::*;
