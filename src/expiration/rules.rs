use std::fmt;

use serde::{Deserialize, Serialize};

/// Where an ingredient should be kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Storage {
    #[serde(rename = "refrigerated")]
    Refrigerated,
    #[serde(rename = "pantry")]
    Pantry,
    #[serde(rename = "frozen")]
    Frozen,
}

impl Storage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Storage::Refrigerated => "refrigerated",
            Storage::Pantry => "pantry",
            Storage::Frozen => "frozen",
        }
    }
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rule table classified an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "fresh produce")]
    FreshProduce,
    #[serde(rename = "dairy")]
    Dairy,
    #[serde(rename = "meat/seafood")]
    MeatSeafood,
    #[serde(rename = "pantry staple")]
    PantryStaple,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FreshProduce => "fresh produce",
            Category::Dairy => "dairy",
            Category::MeatSeafood => "meat/seafood",
            Category::PantryStaple => "pantry staple",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the shelf-life rule tables: a key phrase, a default
/// shelf-life in days, and the storage location it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationRule {
    pub key: &'static str,
    pub days: u32,
    pub storage: Storage,
}

const fn rule(key: &'static str, days: u32, storage: Storage) -> ExpirationRule {
    ExpirationRule { key, days, storage }
}

// Keys are already in normalized form (lower-case, word characters and
// single spaces only). Within each table, multi-word keys come before the
// shorter keys they contain; lookup returns the first matching rule.

pub(crate) const FRESH_PRODUCE: &[ExpirationRule] = &[
    rule("strawberries", 3, Storage::Refrigerated),
    rule("raspberries", 2, Storage::Refrigerated),
    rule("blueberries", 7, Storage::Refrigerated),
    rule("lettuce", 5, Storage::Refrigerated),
    rule("spinach", 5, Storage::Refrigerated),
    rule("kale", 5, Storage::Refrigerated),
    rule("tomatoes", 7, Storage::Refrigerated),
    rule("cucumber", 7, Storage::Refrigerated),
    rule("celery", 14, Storage::Refrigerated),
    rule("carrots", 21, Storage::Refrigerated),
    rule("broccoli", 7, Storage::Refrigerated),
    rule("cauliflower", 7, Storage::Refrigerated),
    rule("mushrooms", 7, Storage::Refrigerated),
    rule("peppers", 10, Storage::Refrigerated),
    rule("onions", 30, Storage::Pantry),
    rule("potatoes", 21, Storage::Pantry),
    rule("garlic", 90, Storage::Pantry),
    rule("bananas", 5, Storage::Pantry),
    rule("apples", 30, Storage::Refrigerated),
    rule("oranges", 14, Storage::Refrigerated),
    rule("lemons", 21, Storage::Refrigerated),
    rule("limes", 21, Storage::Refrigerated),
    rule("grapes", 7, Storage::Refrigerated),
    rule("avocado", 4, Storage::Pantry),
    rule("herbs", 7, Storage::Refrigerated),
];

pub(crate) const DAIRY: &[ExpirationRule] = &[
    rule("cream cheese", 14, Storage::Refrigerated),
    rule("sour cream", 21, Storage::Refrigerated),
    rule("ice cream", 90, Storage::Frozen),
    rule("milk", 7, Storage::Refrigerated),
    rule("yogurt", 14, Storage::Refrigerated),
    rule("cheese", 30, Storage::Refrigerated),
    rule("butter", 60, Storage::Refrigerated),
    rule("cream", 7, Storage::Refrigerated),
    rule("eggs", 21, Storage::Refrigerated),
];

pub(crate) const MEAT_SEAFOOD: &[ExpirationRule] = &[
    rule("ground beef", 2, Storage::Refrigerated),
    rule("chicken", 3, Storage::Refrigerated),
    rule("turkey", 3, Storage::Refrigerated),
    rule("steak", 3, Storage::Refrigerated),
    rule("beef", 4, Storage::Refrigerated),
    rule("pork", 4, Storage::Refrigerated),
    rule("lamb", 4, Storage::Refrigerated),
    rule("bacon", 7, Storage::Refrigerated),
    rule("sausage", 5, Storage::Refrigerated),
    rule("salmon", 2, Storage::Refrigerated),
    rule("shrimp", 2, Storage::Refrigerated),
    rule("fish", 2, Storage::Refrigerated),
    rule("seafood", 2, Storage::Refrigerated),
];

pub(crate) const PANTRY_STAPLES: &[ExpirationRule] = &[
    rule("olive oil", 540, Storage::Pantry),
    rule("rice", 365, Storage::Pantry),
    rule("pasta", 365, Storage::Pantry),
    rule("flour", 240, Storage::Pantry),
    rule("sugar", 730, Storage::Pantry),
    rule("salt", 1825, Storage::Pantry),
    rule("pepper", 1095, Storage::Pantry),
    rule("cereal", 180, Storage::Pantry),
    rule("oats", 365, Storage::Pantry),
    rule("beans", 730, Storage::Pantry),
    rule("lentils", 365, Storage::Pantry),
    rule("canned", 1095, Storage::Pantry),
    rule("bread", 5, Storage::Pantry),
    rule("crackers", 90, Storage::Pantry),
    rule("chips", 60, Storage::Pantry),
    rule("oil", 365, Storage::Pantry),
    rule("vinegar", 1825, Storage::Pantry),
    rule("honey", 1825, Storage::Pantry),
    rule("spices", 1095, Storage::Pantry),
    rule("tea", 1095, Storage::Pantry),
    rule("coffee", 730, Storage::Pantry),
    rule("nuts", 180, Storage::Pantry),
    rule("frozen", 240, Storage::Frozen),
];

/// The four rule tables in lookup order. Iteration order is part of the
/// contract: the first matching key across this order wins.
pub fn tables() -> [(Category, &'static [ExpirationRule]); 4] {
    [
        (Category::FreshProduce, FRESH_PRODUCE),
        (Category::Dairy, DAIRY),
        (Category::MeatSeafood, MEAT_SEAFOOD),
        (Category::PantryStaple, PANTRY_STAPLES),
    ]
}

/// Keywords that push an unclassified ingredient to refrigerated storage.
pub(crate) const REFRIGERATED_HINTS: &[&str] = &[
    "milk",
    "cheese",
    "yogurt",
    "cream",
    "butter",
    "eggs",
    "meat",
    "chicken",
    "beef",
    "pork",
    "fish",
    "seafood",
    "lettuce",
    "spinach",
    "tomatoes",
    "cucumber",
    "celery",
    "carrots",
    "broccoli",
    "cauliflower",
    "mushrooms",
    "apples",
    "oranges",
    "lemons",
    "limes",
    "grapes",
    "strawberries",
    "blueberries",
    "raspberries",
];
