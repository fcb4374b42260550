use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::expiration::estimator::expiry_after;
use crate::expiration::{self, Category, Storage};
use crate::types::IngredientId;

/// One on-hand ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryIngredient {
    pub id: IngredientId,
    pub name: String,
    pub expiry_date: NaiveDate,
    pub added_at: DateTime<Utc>,
    pub category: Category,
    pub storage: Storage,
    pub estimated_days: u32,
    pub storage_tips: Vec<String>,
}

impl PantryIngredient {
    /// Build an ingredient record.
    ///
    /// This is the ONLY way to construct one. Classification metadata is
    /// derived here, once, and stored; a later rename leaves it untouched.
    /// A missing expiry date is derived from the creation day plus the
    /// estimated shelf-life, and is never recomputed afterwards.
    pub(crate) fn create(
        seq: u64,
        name: String,
        expiry_date: Option<NaiveDate>,
        added_at: DateTime<Utc>,
    ) -> Self {
        let info = expiration::ingredient_info(&name);
        let expiry_date = expiry_date
            .unwrap_or_else(|| expiry_after(added_at.date_naive(), info.estimated_days));

        PantryIngredient {
            id: IngredientId::derive(seq, &name, added_at),
            name,
            expiry_date,
            added_at,
            category: info.category,
            storage: info.storage,
            estimated_days: info.estimated_days,
            storage_tips: info.tips,
        }
    }
}
