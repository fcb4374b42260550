use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of ingredient/measure slot pairs in the external recipe payload.
pub const SLOT_COUNT: usize = 20;

/// One non-empty ingredient slot: an optional measure and a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub measure: Option<String>,
    pub name: String,
}

impl Requirement {
    /// The requirement as the matcher sees it, e.g. "200g Tomatoes".
    pub fn text(&self) -> String {
        match &self.measure {
            Some(measure) => format!("{measure} {}", self.name),
            None => self.name.clone(),
        }
    }
}

/// The external API's fixed set of `strIngredientN`/`strMeasureN` slots,
/// modeled as a fixed-size array of optional requirements so the matcher
/// never sees that field-naming convention.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IngredientSlots([Option<Requirement>; SLOT_COUNT]);

impl IngredientSlots {
    /// Read the slot pairs out of a raw API recipe object.
    ///
    /// Null, missing, empty, and whitespace-only ingredient slots are
    /// vacant; a measure is only kept alongside a non-empty name.
    pub fn from_api_value(value: &Value) -> Self {
        let mut slots: [Option<Requirement>; SLOT_COUNT] = Default::default();

        for (i, slot) in slots.iter_mut().enumerate() {
            let n = i + 1;
            let name = non_empty(value.get(format!("strIngredient{n}").as_str()));
            if let Some(name) = name {
                let measure = non_empty(value.get(format!("strMeasure{n}").as_str()));
                *slot = Some(Requirement {
                    measure: measure.map(str::to_string),
                    name: name.to_string(),
                });
            }
        }

        IngredientSlots(slots)
    }

    pub fn from_requirements<I>(requirements: I) -> Self
    where
        I: IntoIterator<Item = Requirement>,
    {
        let mut slots: [Option<Requirement>; SLOT_COUNT] = Default::default();
        for (slot, requirement) in slots.iter_mut().zip(requirements) {
            *slot = Some(requirement);
        }
        IngredientSlots(slots)
    }

    /// Non-empty requirements in slot order.
    pub fn requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.0.iter().flatten()
    }

    /// Requirement texts in slot order, ready for the matcher.
    pub fn requirement_texts(&self) -> Vec<String> {
        self.requirements().map(Requirement::text).collect()
    }

    pub fn len(&self) -> usize {
        self.requirements().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

fn non_empty(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
