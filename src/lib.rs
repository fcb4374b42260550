//! Deterministic pantry matching and shelf-life estimation.
//!
//! `pantry-core` provides the pantry ingredient model, recipe ingredient
//! matching, pantry-based recipe ranking, and shelf-life estimation with
//! storage guidance. All operations are deterministic: identical inputs
//! always produce identical outputs.

pub mod expiration;
pub mod matching;
pub mod pantry;
pub mod recipe;
pub mod types;
