//! Explicit save/load boundary for pantry state.
//!
//! A snapshot is one JSON document written atomically (temp file, then
//! rename) carrying a content hash over the serialized ingredient list.
//! Load recomputes the hash and rejects files whose contents no longer
//! match it.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::pantry::ingredient::PantryIngredient;
use crate::pantry::pantry::Pantry;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Snapshot integrity mismatch: file says {expected}, contents hash to {actual}")]
    IntegrityMismatch { expected: String, actual: String },
}

/// On-disk layout of a saved pantry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PantrySnapshot {
    pub snapshot_version: String,
    pub created_at: DateTime<Utc>,
    pub ingredient_count: usize,
    pub next_seq: u64,
    pub ingredients: Vec<PantryIngredient>,
}

fn content_version(ingredients: &[PantryIngredient]) -> Result<String, serde_json::Error> {
    let bytes = serde_json::to_vec(ingredients)?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);

    Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
}

/// Write the pantry to `path`, replacing any previous snapshot.
pub fn save(pantry: &Pantry, path: &Path) -> Result<(), SnapshotError> {
    // Note: created_at is strictly informational
    let snapshot = PantrySnapshot {
        snapshot_version: content_version(&pantry.ingredients)?,
        created_at: Utc::now(),
        ingredient_count: pantry.ingredients.len(),
        next_seq: pantry.next_seq,
        ingredients: pantry.ingredients.clone(),
    };

    let temp_path = path.with_extension("json.tmp");
    let file = fs::File::create(&temp_path)?;
    serde_json::to_writer_pretty(&file, &snapshot)?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read a snapshot back, verifying its content hash.
pub fn load(path: &Path) -> Result<Pantry, SnapshotError> {
    let file = fs::File::open(path)?;
    let snapshot: PantrySnapshot = serde_json::from_reader(file)?;

    let actual = content_version(&snapshot.ingredients)?;
    if actual != snapshot.snapshot_version {
        return Err(SnapshotError::IntegrityMismatch {
            expected: snapshot.snapshot_version,
            actual,
        });
    }

    Ok(Pantry {
        ingredients: snapshot.ingredients,
        next_seq: snapshot.next_seq,
    })
}
