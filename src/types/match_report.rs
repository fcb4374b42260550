use serde::{Deserialize, Serialize};

use crate::recipe::RecipeCandidate;

/// Aggregate score of one recipe against a pantry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeScore {
    /// Pantry ingredients covering at least one requirement.
    pub used_count: usize,
    /// `used_count / pantry_size`; 0.0 for an empty pantry.
    pub match_ratio: f32,
}

/// A ranked recipe returned in the output.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecipe {
    pub id: String,
    pub name: String,

    pub used_count: usize,
    pub match_ratio: f32,

    /// Pantry names that covered at least one requirement.
    pub used: Vec<String>,
    /// Last token of every requirement nothing in the pantry covered.
    pub missing: Vec<String>,
}

/// Metadata describing the outcome of a ranking run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingMetadata {
    pub pantry_size: usize,

    pub recipes_considered: usize,
    pub recipes_ranked: usize,
    pub recipes_below_threshold: usize,
}

/// The final result of ranking candidates against a pantry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub recipes: Vec<RankedRecipe>,
    pub ranking: RankingMetadata,
}

/// Internal: a candidate that has been scored but not yet thresholded.
/// Borrows the candidate to avoid cloning until materialization.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a RecipeCandidate,

    pub score: RecipeScore,
    pub used: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("Cannot rank recipes against an empty pantry")]
    EmptyPantry,
}
