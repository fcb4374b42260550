pub mod ingredient;
pub mod pantry;
pub mod snapshot;

pub use ingredient::PantryIngredient;
pub use pantry::{Pantry, PantryError};
pub use snapshot::{load, save, PantrySnapshot, SnapshotError};
