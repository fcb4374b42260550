pub mod candidate;
pub mod requirements;

pub use candidate::RecipeCandidate;
pub use requirements::{IngredientSlots, Requirement, SLOT_COUNT};
