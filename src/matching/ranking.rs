use crate::types::match_report::{RankedRecipe, ScoredCandidate};

/// Floor on used pantry ingredients before a recipe is rankable. Pantries
/// smaller than this lower the floor to their own size.
pub const MIN_USED_FOR_RANKING: usize = 2;

pub struct ThresholdResult {
    pub ranked: Vec<RankedRecipe>,
    pub below_threshold: usize,
}

/// Keep candidates using at least `min(2, pantry_size)` pantry ingredients
/// and materialize them into owned report entries.
pub fn apply_threshold(scored: Vec<ScoredCandidate>, pantry_size: usize) -> ThresholdResult {
    let floor = MIN_USED_FOR_RANKING.min(pantry_size);

    let mut ranked = Vec::new();
    let mut below_threshold = 0;

    for entry in scored {
        if entry.score.used_count >= floor {
            ranked.push(RankedRecipe {
                id: entry.candidate.id.clone(),
                name: entry.candidate.name.clone(),
                used_count: entry.score.used_count,
                match_ratio: entry.score.match_ratio,
                used: entry.used,
                missing: entry.missing,
            });
        } else {
            below_threshold += 1;
        }
    }

    ThresholdResult {
        ranked,
        below_threshold,
    }
}
