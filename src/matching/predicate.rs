use crate::matching::normalize::clean_letters;

pub trait IngredientMatcher {
    /// Does this pantry ingredient name cover the given requirement text?
    fn satisfies(&self, pantry_name: &str, requirement: &str) -> bool;
}

/// v0: cleaned-token overlap.
///
/// A pantry name covers a requirement when some requirement word equals
/// the cleaned pantry phrase, or either contains the other. Containment
/// only applies when the contained side is longer than two characters,
/// which keeps tokens like "of" and "to" from matching. The two
/// directions tolerate plural/singular mismatch and compound phrases
/// ("chicken breast" vs a pantry entry "chicken").
#[derive(Default)]
pub struct TokenOverlapMatcher;

impl IngredientMatcher for TokenOverlapMatcher {
    fn satisfies(&self, pantry_name: &str, requirement: &str) -> bool {
        let pantry = clean_letters(pantry_name);
        requirement.split_whitespace().any(|token| {
            let word = clean_letters(token);
            word == pantry
                || (pantry.chars().count() > 2 && word.contains(&pantry))
                || (word.chars().count() > 2 && pantry.contains(&word))
        })
    }
}
