//! End-to-end checks over the synchronous half of a run: load preferences
//! from disk, rank listings, persist them, and read the file back.

use std::path::PathBuf;

use stayrank_core::{
    load_preferences, rank_listings, read_results, write_results, Listing, ListingLocation,
};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("stayrank-it-{}", std::process::id()))
        .join(name)
}

fn listing(id: &str, price: f64, amenities: &[&str], walk_score: Option<f64>) -> Listing {
    Listing {
        id: id.to_string(),
        name: format!("Stay {id}"),
        price,
        amenities: amenities.iter().map(|a| (*a).to_string()).collect(),
        walk_score,
        location: ListingLocation {
            lat: 45.52,
            lng: -122.68,
            address: format!("{id} Main St, Portland, OR"),
        },
    }
}

fn write_preferences(name: &str) -> PathBuf {
    let path = scratch_path(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let doc = serde_json::json!({
        "location": "Portland, OR",
        "checkIn": "2025-08-01",
        "checkOut": "2025-08-04",
        "groupSize": 5,
        "budget": { "min": 100, "max": 200 },
        "bedrooms": 2,
        "bathrooms": 2,
        "amenities": ["wifi", "kitchen"],
        "walkabilityImportance": 10
    });
    std::fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
    path
}

#[test]
fn ranked_results_survive_a_round_trip() {
    let prefs = load_preferences(&write_preferences("prefs-roundtrip.json"))
        .expect("preferences should load");

    let listings = vec![
        listing("overpriced", 300.0, &[], None),
        listing("balanced", 150.0, &["wifi"], Some(80.0)),
        listing("bargain", 110.0, &["kitchen"], Some(20.0)),
    ];
    let ranked = rank_listings(listings, &prefs);

    let out = scratch_path("nested/results.json");
    write_results(&out, &ranked).expect("results should write");
    let reloaded = read_results(&out).expect("results should read back");

    assert_eq!(reloaded.len(), ranked.len());
    for (before, after) in ranked.iter().zip(&reloaded) {
        assert_eq!(before.listing.id, after.listing.id);
        assert_eq!(before.listing.price, after.listing.price);
        assert_eq!(before.listing.amenities, after.listing.amenities);
        assert_eq!(before.score, after.score);
    }

    // balanced: 100 - 10 + 8 + 15 = 113 -> 100; bargain: 100 - 2 + 2 + 15 = 115 -> 100;
    // overpriced: 100 - 40 = 60. The two clamped listings keep input order.
    let ids: Vec<&str> = reloaded.iter().map(|s| s.listing.id.as_str()).collect();
    assert_eq!(ids, vec!["balanced", "bargain", "overpriced"]);
    assert!((reloaded[2].score - 60.0).abs() < 1e-9);

    assert!(
        !out.with_file_name("results.json.tmp").exists(),
        "staging file should be renamed away"
    );
}

#[test]
fn result_file_is_pretty_printed_json_array() {
    let prefs = load_preferences(&write_preferences("prefs-pretty.json")).unwrap();
    let ranked = rank_listings(vec![listing("only", 150.0, &["wifi"], None)], &prefs);

    let out = scratch_path("pretty.json");
    write_results(&out, &ranked).unwrap();
    let content = std::fs::read_to_string(&out).unwrap();

    assert!(content.starts_with("[\n"));
    assert!(content.contains("\n    \"id\": \"only\""));
    assert!(content.contains("\"score\":"));
    assert!(!content.contains("walkScore"));
}

#[test]
fn rewriting_replaces_previous_results() {
    let prefs = load_preferences(&write_preferences("prefs-rewrite.json")).unwrap();
    let out = scratch_path("rewrite.json");

    let first = rank_listings(
        vec![listing("a", 120.0, &[], None), listing("b", 130.0, &[], None)],
        &prefs,
    );
    write_results(&out, &first).unwrap();

    let second = rank_listings(vec![listing("c", 140.0, &[], None)], &prefs);
    write_results(&out, &second).unwrap();

    let reloaded = read_results(&out).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].listing.id, "c");
}
