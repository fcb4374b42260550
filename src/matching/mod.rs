pub mod normalize;
pub mod predicate;
pub mod ranking;

use std::cmp::Ordering;

use crate::matching::normalize::last_token;
use crate::recipe::RecipeCandidate;
use crate::types::match_report::{
    RankingError, RankingMetadata, RankingResult, RecipeScore, ScoredCandidate,
};
pub use predicate::{IngredientMatcher, TokenOverlapMatcher};
pub use ranking::{apply_threshold, ThresholdResult, MIN_USED_FOR_RANKING};

pub struct RecipeRanker<M> {
    matcher: M,
}

impl Default for RecipeRanker<TokenOverlapMatcher> {
    fn default() -> Self {
        Self {
            matcher: TokenOverlapMatcher,
        }
    }
}

impl<M> RecipeRanker<M>
where
    M: IngredientMatcher,
{
    pub fn new(matcher: M) -> Self {
        Self { matcher }
    }

    /// Is this requirement covered by any pantry ingredient?
    pub fn requirement_is_satisfied(&self, requirement: &str, pantry_names: &[&str]) -> bool {
        pantry_names
            .iter()
            .any(|name| self.matcher.satisfies(name, requirement))
    }

    /// Requirements no pantry ingredient covers, each reported as its last
    /// whitespace token (measure words ahead of it are discarded).
    pub fn missing_ingredients(&self, requirements: &[&str], pantry_names: &[&str]) -> Vec<String> {
        requirements
            .iter()
            .filter(|requirement| !self.requirement_is_satisfied(requirement, pantry_names))
            .filter_map(|requirement| last_token(requirement))
            .map(str::to_string)
            .collect()
    }

    /// Pantry names covering at least one requirement, in pantry order.
    pub fn used_ingredients(&self, requirements: &[&str], pantry_names: &[&str]) -> Vec<String> {
        pantry_names
            .iter()
            .filter(|name| {
                requirements
                    .iter()
                    .any(|requirement| self.matcher.satisfies(name, requirement))
            })
            .map(|name| name.to_string())
            .collect()
    }

    /// Aggregate score of one recipe against a pantry. An empty pantry
    /// scores 0.0 rather than dividing by zero.
    pub fn score(&self, requirements: &[&str], pantry_names: &[&str]) -> RecipeScore {
        let used_count = self.used_ingredients(requirements, pantry_names).len();
        let match_ratio = if pantry_names.is_empty() {
            0.0
        } else {
            used_count as f32 / pantry_names.len() as f32
        };
        RecipeScore {
            used_count,
            match_ratio,
        }
    }

    /// Rank candidate recipes against the pantry.
    ///
    /// Candidates are scored, sorted descending by match ratio, and
    /// filtered to those using at least `min(2, pantry_size)` pantry
    /// ingredients. An empty pantry cannot rank anything; callers fall
    /// back to a different selection strategy.
    pub fn rank(
        &self,
        candidates: &[RecipeCandidate],
        pantry_names: &[&str],
    ) -> Result<RankingResult, RankingError> {
        if pantry_names.is_empty() {
            return Err(RankingError::EmptyPantry);
        }

        // 1. Scoring phase
        let mut scored: Vec<ScoredCandidate> = candidates
            .iter()
            .map(|candidate| {
                let requirements: Vec<&str> =
                    candidate.requirements.iter().map(String::as_str).collect();
                let used = self.used_ingredients(&requirements, pantry_names);
                let missing = self.missing_ingredients(&requirements, pantry_names);
                let score = RecipeScore {
                    used_count: used.len(),
                    match_ratio: used.len() as f32 / pantry_names.len() as f32,
                };
                ScoredCandidate {
                    candidate,
                    score,
                    used,
                    missing,
                }
            })
            .collect();

        // 2. Ordering phase: descending ratio. The sort is stable, so
        // ties keep input order; there is no secondary key.
        scored.sort_by(|a, b| {
            b.score
                .match_ratio
                .partial_cmp(&a.score.match_ratio)
                .unwrap_or(Ordering::Equal)
        });

        // 3. Threshold phase
        let ThresholdResult {
            ranked,
            below_threshold,
        } = apply_threshold(scored, pantry_names.len());

        let metadata = RankingMetadata {
            pantry_size: pantry_names.len(),
            recipes_considered: candidates.len(),
            recipes_ranked: ranked.len(),
            recipes_below_threshold: below_threshold,
        };

        Ok(RankingResult {
            recipes: ranked,
            ranking: metadata,
        })
    }
}
