use chrono::{TimeZone, Utc};
use pantry_core::matching::RecipeRanker;
use pantry_core::pantry::Pantry;
use pantry_core::recipe::{IngredientSlots, RecipeCandidate};
use pantry_core::types::RankingResult;
use serde_json::json;

fn sample_pantry() -> Pantry {
    let added = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let mut pantry = Pantry::new();
    pantry.add_at("Chicken Breast", None, added);
    pantry.add_at("Rice", None, added);
    pantry.add_at("Soy Sauce", None, added);
    pantry
}

fn sample_candidates() -> Vec<RecipeCandidate> {
    let teriyaki = json!({
        "idMeal": "52772",
        "strMeal": "Teriyaki Chicken Casserole",
        "strIngredient1": "soy sauce",
        "strMeasure1": "3/4 cup",
        "strIngredient2": "water",
        "strMeasure2": "1/2 cup",
        "strIngredient3": "brown sugar",
        "strMeasure3": "2 tbsp",
        "strIngredient4": "Chicken Breasts",
        "strMeasure4": "3",
        "strIngredient5": "rice",
        "strMeasure5": "2 cups",
    });
    let salad = json!({
        "idMeal": "90001",
        "strMeal": "Plain Salad",
        "strIngredient1": "Lettuce",
        "strMeasure1": "1 head",
        "strIngredient2": "Tomatoes",
        "strMeasure2": "2",
    });
    let soup = json!({
        "idMeal": "90002",
        "strMeal": "Chicken Rice Soup",
        "strIngredient1": "Chicken",
        "strMeasure1": "1",
        "strIngredient2": "rice",
        "strMeasure2": "1 cup",
    });

    [teriyaki, salad, soup]
        .iter()
        .map(|payload| {
            RecipeCandidate::from_slots(
                payload["idMeal"].as_str().unwrap(),
                payload["strMeal"].as_str().unwrap(),
                &IngredientSlots::from_api_value(payload),
            )
        })
        .collect()
}

#[test]
fn full_pipeline_ranks_api_payloads_against_the_pantry() {
    let pantry = sample_pantry();
    let candidates = sample_candidates();

    let ranker = RecipeRanker::default();
    let result = ranker.rank(&candidates, &pantry.names()).unwrap();

    assert_eq!(result.ranking.pantry_size, 3);
    assert_eq!(result.ranking.recipes_considered, 3);
    assert_eq!(result.ranking.recipes_ranked, 2);
    assert_eq!(result.ranking.recipes_below_threshold, 1);

    let teriyaki = &result.recipes[0];
    assert_eq!(teriyaki.id, "52772");
    assert_eq!(teriyaki.used_count, 3);
    assert!((teriyaki.match_ratio - 1.0).abs() < f32::EPSILON);
    assert_eq!(
        teriyaki.used,
        vec![
            "Chicken Breast".to_string(),
            "Rice".to_string(),
            "Soy Sauce".to_string(),
        ]
    );
    assert_eq!(
        teriyaki.missing,
        vec!["water".to_string(), "sugar".to_string()]
    );

    let soup = &result.recipes[1];
    assert_eq!(soup.id, "90002");
    assert_eq!(soup.used_count, 2);
    assert!((soup.match_ratio - 2.0 / 3.0).abs() < f32::EPSILON);
    assert_eq!(soup.missing, Vec::<String>::new());
}

#[test]
fn ranking_output_is_deterministic() {
    let pantry = sample_pantry();
    let candidates = sample_candidates();
    let ranker = RecipeRanker::default();

    let first = ranker.rank(&candidates, &pantry.names()).unwrap();
    let second = ranker.rank(&candidates, &pantry.names()).unwrap();

    let json1 = serde_json::to_string_pretty(&first).unwrap();
    let json2 = serde_json::to_string_pretty(&second).unwrap();
    assert_eq!(json1, json2, "ranking output is not deterministic");
}

#[test]
fn ranking_output_serialization_shape() {
    let pantry = sample_pantry();
    let candidates = sample_candidates();
    let ranker = RecipeRanker::default();

    let result = ranker.rank(&candidates, &pantry.names()).unwrap();
    let json_str = serde_json::to_string_pretty(&result).unwrap();

    let recipes_pos = json_str.find("\"recipes\":").unwrap();
    let ranking_pos = json_str.find("\"ranking\":").unwrap();
    assert!(
        recipes_pos < ranking_pos,
        "recipes should appear before ranking metadata"
    );

    let id_pos = json_str.find("\"id\":").unwrap();
    let used_pos = json_str.find("\"used\":").unwrap();
    let missing_pos = json_str.find("\"missing\":").unwrap();
    assert!(id_pos < used_pos);
    assert!(used_pos < missing_pos);

    // Roundtrip check
    let deserialized: RankingResult = serde_json::from_str(&json_str).unwrap();
    assert_eq!(deserialized, result);
}
