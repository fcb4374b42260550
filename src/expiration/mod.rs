pub mod estimator;
pub mod rules;
pub mod tips;

pub use estimator::{
    estimate_expiry, estimate_expiry_today, ingredient_info, IngredientInfo,
    DEFAULT_SHELF_LIFE_DAYS,
};
pub use rules::{tables, Category, ExpirationRule, Storage};
pub use tips::storage_tips;
