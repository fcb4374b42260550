pub mod identifiers;
pub mod match_report;

pub use identifiers::IngredientId;
pub use match_report::{
    RankedRecipe, RankingError, RankingMetadata, RankingResult, RecipeScore,
};
