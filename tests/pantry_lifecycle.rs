use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use pantry_core::expiration::{Category, Storage};
use pantry_core::pantry::Pantry;

fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn adding_derives_classification_and_expiry() {
    let mut pantry = Pantry::new();
    let id = pantry.add_at("Milk", None, noon(2024, 1, 1));

    let item = pantry.get(&id).unwrap();
    assert_eq!(item.name, "Milk");
    assert_eq!(item.category, Category::Dairy);
    assert_eq!(item.storage, Storage::Refrigerated);
    assert_eq!(item.estimated_days, 7);
    assert_eq!(item.expiry_date, date(2024, 1, 8));
    assert!(!item.storage_tips.is_empty());
}

#[test]
fn an_explicit_expiry_date_is_kept_verbatim() {
    let mut pantry = Pantry::new();
    let id = pantry.add_at("Milk", Some(date(2024, 2, 1)), noon(2024, 1, 1));

    let item = pantry.get(&id).unwrap();
    assert_eq!(item.expiry_date, date(2024, 2, 1));
    // Classification is still derived.
    assert_eq!(item.category, Category::Dairy);
}

#[test]
fn rename_never_touches_derived_metadata() {
    let mut pantry = Pantry::new();
    let id = pantry.add_at("Milk", None, noon(2024, 1, 1));
    let before = pantry.get(&id).unwrap().clone();

    pantry.rename(&id, "White Rice").unwrap();

    let after = pantry.get(&id).unwrap();
    assert_eq!(after.name, "White Rice");
    assert_eq!(after.id, before.id);
    assert_eq!(after.category, before.category);
    assert_eq!(after.storage, before.storage);
    assert_eq!(after.estimated_days, before.estimated_days);
    assert_eq!(after.expiry_date, before.expiry_date);
    assert_eq!(after.storage_tips, before.storage_tips);
    assert_eq!(after.added_at, before.added_at);
}

#[test]
fn only_an_explicit_edit_replaces_the_expiry_date() {
    let mut pantry = Pantry::new();
    let id = pantry.add_at("Milk", None, noon(2024, 1, 1));

    pantry.set_expiry_date(&id, date(2024, 3, 15)).unwrap();

    let item = pantry.get(&id).unwrap();
    assert_eq!(item.expiry_date, date(2024, 3, 15));
    // Nothing else moves.
    assert_eq!(item.estimated_days, 7);
    assert_eq!(item.name, "Milk");
}

#[test]
fn removing_forgets_the_ingredient() {
    let mut pantry = Pantry::new();
    let milk = pantry.add_at("Milk", None, noon(2024, 1, 1));
    let eggs = pantry.add_at("Eggs", None, noon(2024, 1, 1));

    let removed = pantry.remove(&milk).unwrap();
    assert_eq!(removed.name, "Milk");

    assert!(pantry.get(&milk).is_none());
    assert!(pantry.get(&eggs).is_some());
    assert_eq!(pantry.len(), 1);
}

#[test]
fn edits_on_unknown_ids_fail() {
    let mut pantry = Pantry::new();
    let mut other = Pantry::new();
    let foreign = other.add_at("Milk", None, noon(2024, 1, 1));
    pantry.add_at("Eggs", None, noon(2024, 1, 2));

    assert!(pantry.rename(&foreign, "Cream").is_err());
    assert!(pantry.set_expiry_date(&foreign, date(2024, 2, 1)).is_err());
    assert!(pantry.remove(&foreign).is_none());
}

#[test]
fn ids_are_unique_even_for_identical_entries() {
    let mut pantry = Pantry::new();
    let first = pantry.add_at("Milk", None, noon(2024, 1, 1));
    let second = pantry.add_at("Milk", None, noon(2024, 1, 1));

    assert_ne!(first, second);
    assert_eq!(pantry.len(), 2);
}

#[test]
fn names_come_back_in_insertion_order() {
    let mut pantry = Pantry::new();
    pantry.add_at("Tomatoes", None, noon(2024, 1, 1));
    pantry.add_at("Onions", None, noon(2024, 1, 2));
    pantry.add_at("Garlic", None, noon(2024, 1, 3));

    assert_eq!(pantry.names(), vec!["Tomatoes", "Onions", "Garlic"]);
}
