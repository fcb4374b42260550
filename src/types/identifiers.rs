use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Opaque pantry ingredient identifier, assigned at creation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(String);

impl IngredientId {
    /// Derive an id from the pantry sequence number, the entered name, and
    /// the creation timestamp. Stable given its inputs, opaque to callers.
    pub(crate) fn derive(seq: u64, name: &str, added_at: DateTime<Utc>) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(format!("{seq}:{name}:{}", added_at.to_rfc3339()).as_bytes());

        let hash = hex::encode(hasher.finalize());
        IngredientId(hash[..12].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
