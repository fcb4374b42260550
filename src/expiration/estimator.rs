use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::expiration::rules::{tables, Category, ExpirationRule, Storage, REFRIGERATED_HINTS};
use crate::expiration::tips::storage_tips;

/// Shelf-life assigned when no rule matches.
pub const DEFAULT_SHELF_LIFE_DAYS: u32 = 7;

/// Everything the estimator derives from an ingredient name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientInfo {
    pub category: Category,
    pub storage: Storage,
    pub estimated_days: u32,
    pub tips: Vec<String>,
}

/// Normalize an ingredient name for rule lookup: lower-case, keep only
/// word characters and whitespace, collapse whitespace runs, trim.
pub(crate) fn normalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    let filtered: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pass 1: scan the flattened tables for a key contained in the name, or a
/// key that contains the whole name.
fn table_match(normalized: &str) -> Option<(Category, &'static ExpirationRule)> {
    for (category, rules) in tables() {
        for rule in rules {
            if normalized.contains(rule.key) || rule.key.contains(normalized) {
                return Some((category, rule));
            }
        }
    }
    None
}

/// Pass 2: word-level matching. Words shorter than three characters are
/// ignored on both sides. The first rule with any word pair matching by
/// substring in either direction wins; candidates are not scored.
fn partial_word_match(normalized: &str) -> Option<(Category, &'static ExpirationRule)> {
    let name_words: Vec<&str> = normalized
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .collect();
    if name_words.is_empty() {
        return None;
    }

    for (category, rules) in tables() {
        for rule in rules {
            let hit = rule
                .key
                .split_whitespace()
                .filter(|w| w.chars().count() > 2)
                .any(|kw| name_words.iter().any(|nw| nw.contains(kw) || kw.contains(nw)));
            if hit {
                return Some((category, rule));
            }
        }
    }
    None
}

/// Classify an ingredient name.
///
/// Total over all input: unmatched and empty names fall through to a
/// 7-day default whose storage is guessed from a refrigerated-keyword
/// list. Category is `Unknown` on that path.
pub fn ingredient_info(name: &str) -> IngredientInfo {
    let normalized = normalize(name);

    // An empty name would otherwise match every key via containment.
    if !normalized.is_empty() {
        if let Some((category, rule)) =
            table_match(&normalized).or_else(|| partial_word_match(&normalized))
        {
            return IngredientInfo {
                category,
                storage: rule.storage,
                estimated_days: rule.days,
                tips: storage_tips(rule.storage, rule.days),
            };
        }
    }

    let storage = if REFRIGERATED_HINTS.iter().any(|hint| normalized.contains(hint)) {
        Storage::Refrigerated
    } else {
        Storage::Pantry
    };

    IngredientInfo {
        category: Category::Unknown,
        storage,
        estimated_days: DEFAULT_SHELF_LIFE_DAYS,
        tips: storage_tips(storage, DEFAULT_SHELF_LIFE_DAYS),
    }
}

/// Add a shelf-life to a base date as whole calendar days.
pub(crate) fn expiry_after(base_date: NaiveDate, days: u32) -> NaiveDate {
    base_date
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Estimated expiry date for an ingredient from an explicit base date.
///
/// The result renders as ISO `YYYY-MM-DD` via `Display`.
pub fn estimate_expiry(name: &str, base_date: NaiveDate) -> NaiveDate {
    expiry_after(base_date, ingredient_info(name).estimated_days)
}

/// Estimated expiry date from today's local calendar day.
pub fn estimate_expiry_today(name: &str) -> NaiveDate {
    estimate_expiry(name, Local::now().date_naive())
}
