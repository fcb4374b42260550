use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::pantry::ingredient::PantryIngredient;
use crate::types::IngredientId;

#[derive(Debug, Error)]
pub enum PantryError {
    #[error("No pantry ingredient with id {0}")]
    UnknownIngredient(IngredientId),
}

/// The user's on-hand ingredients: a flat ordered list plus the id
/// sequence counter. State is passed explicitly to whatever needs it;
/// persistence goes through the snapshot module.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pantry {
    pub(crate) ingredients: Vec<PantryIngredient>,
    pub(crate) next_seq: u64,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient now. See [`Pantry::add_at`] for the deterministic
    /// entry point.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        expiry_date: Option<NaiveDate>,
    ) -> IngredientId {
        self.add_at(name, expiry_date, Utc::now())
    }

    /// Add an ingredient with an explicit creation timestamp.
    pub fn add_at(
        &mut self,
        name: impl Into<String>,
        expiry_date: Option<NaiveDate>,
        added_at: DateTime<Utc>,
    ) -> IngredientId {
        let seq = self.next_seq;
        self.next_seq += 1;

        let ingredient = PantryIngredient::create(seq, name.into(), expiry_date, added_at);
        let id = ingredient.id.clone();
        self.ingredients.push(ingredient);
        id
    }

    pub fn get(&self, id: &IngredientId) -> Option<&PantryIngredient> {
        self.ingredients.iter().find(|item| &item.id == id)
    }

    pub fn remove(&mut self, id: &IngredientId) -> Option<PantryIngredient> {
        let position = self.ingredients.iter().position(|item| &item.id == id)?;
        Some(self.ingredients.remove(position))
    }

    /// Rename only; classification and expiry stay as computed at creation.
    pub fn rename(
        &mut self,
        id: &IngredientId,
        new_name: impl Into<String>,
    ) -> Result<(), PantryError> {
        self.get_mut(id)?.name = new_name.into();
        Ok(())
    }

    /// Explicit user edit is the only path that replaces an expiry date.
    pub fn set_expiry_date(
        &mut self,
        id: &IngredientId,
        expiry_date: NaiveDate,
    ) -> Result<(), PantryError> {
        self.get_mut(id)?.expiry_date = expiry_date;
        Ok(())
    }

    /// Ingredient names in list order, as the matcher consumes them.
    pub fn names(&self) -> Vec<&str> {
        self.ingredients.iter().map(|item| item.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PantryIngredient> {
        self.ingredients.iter()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    fn get_mut(&mut self, id: &IngredientId) -> Result<&mut PantryIngredient, PantryError> {
        self.ingredients
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| PantryError::UnknownIngredient(id.clone()))
    }
}
