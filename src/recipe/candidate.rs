use serde::{Deserialize, Serialize};

use crate::recipe::requirements::IngredientSlots;

/// A recipe as fed to the ranker: identity plus requirement texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCandidate {
    pub id: String,
    pub name: String,
    pub requirements: Vec<String>,
}

impl RecipeCandidate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        requirements: Vec<String>,
    ) -> Self {
        RecipeCandidate {
            id: id.into(),
            name: name.into(),
            requirements,
        }
    }

    pub fn from_slots(
        id: impl Into<String>,
        name: impl Into<String>,
        slots: &IngredientSlots,
    ) -> Self {
        Self::new(id, name, slots.requirement_texts())
    }
}
