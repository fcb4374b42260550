use crate::expiration::rules::Storage;

/// Advisory strings for a storage location and shelf-life.
///
/// Tips are cumulative: a storage-specific tip (plus its short-life or
/// long-life variant) comes first, then one severity tier keyed on the
/// shelf-life alone.
pub fn storage_tips(storage: Storage, days: u32) -> Vec<String> {
    let mut tips = Vec::new();

    match storage {
        Storage::Refrigerated => {
            tips.push("Store in the refrigerator at 40°F or below".to_string());
            if days <= 7 {
                tips.push("Use within a week for best quality".to_string());
            }
        }
        Storage::Pantry => {
            tips.push("Store in a cool, dry place away from direct sunlight".to_string());
            if days >= 365 {
                tips.push("Can be stored for up to a year or more".to_string());
            }
        }
        Storage::Frozen => {}
    }

    if days <= 3 {
        tips.push("Use quickly - this is a highly perishable item".to_string());
    } else if days <= 7 {
        tips.push("Best used within a week".to_string());
    } else if days <= 30 {
        tips.push("Good for about a month".to_string());
    }

    tips
}
