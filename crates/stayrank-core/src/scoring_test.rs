use chrono::NaiveDate;

use super::*;
use crate::listing::ListingLocation;
use crate::preferences::Budget;

const EPSILON: f64 = 1e-9;

fn prefs(amenities: &[&str], walkability_importance: f64) -> TripPreferences {
    TripPreferences {
        location: "Asheville, NC".to_string(),
        check_in: NaiveDate::from_ymd_opt(2025, 10, 3).unwrap(),
        check_out: NaiveDate::from_ymd_opt(2025, 10, 6).unwrap(),
        group_size: 4,
        budget: Budget {
            min: 100.0,
            max: 200.0,
        },
        bedrooms: 2,
        bathrooms: 1,
        amenities: amenities.iter().map(|a| (*a).to_string()).collect(),
        vibes: Vec::new(),
        walkability_importance,
    }
}

fn listing(price: f64, amenities: &[&str], walk_score: Option<f64>) -> Listing {
    Listing {
        id: "l-1".to_string(),
        name: "Cabin".to_string(),
        price,
        amenities: amenities.iter().map(|a| (*a).to_string()).collect(),
        walk_score,
        location: ListingLocation {
            lat: 35.59,
            lng: -82.55,
            address: "Asheville, NC".to_string(),
        },
    }
}

#[test]
fn price_at_budget_min_has_no_penalty() {
    let b = score_breakdown(&listing(100.0, &[], None), &prefs(&["wifi"], 0.0));
    assert_eq!(b.price_penalty, 0.0);
}

#[test]
fn price_at_budget_max_costs_twenty_points() {
    let b = score_breakdown(&listing(200.0, &[], None), &prefs(&["wifi"], 0.0));
    assert_eq!(b.price_penalty, 20.0);
    assert_eq!(b.raw, 80.0);
}

#[test]
fn price_below_budget_min_earns_a_bonus() {
    let b = score_breakdown(&listing(50.0, &[], None), &prefs(&["wifi"], 0.0));
    assert!((b.price_penalty - -10.0).abs() < EPSILON);
    assert!((b.raw - 110.0).abs() < EPSILON);
    assert_eq!(b.score, 100.0);
}

#[test]
fn missing_walk_score_contributes_nothing() {
    for importance in [0.0, 10.0, 100.0, 1_000.0] {
        let b = score_breakdown(&listing(150.0, &[], None), &prefs(&["wifi"], importance));
        assert_eq!(b.walkability_bonus, 0.0);
    }
}

#[test]
fn walk_score_is_weighted_by_importance() {
    let b = score_breakdown(&listing(100.0, &[], Some(50.0)), &prefs(&["wifi"], 40.0));
    assert!((b.walkability_bonus - 20.0).abs() < EPSILON);
}

#[test]
fn full_amenity_match_earns_thirty_points() {
    let b = score_breakdown(
        &listing(150.0, &["kitchen", "wifi"], None),
        &prefs(&["wifi", "kitchen"], 0.0),
    );
    assert_eq!(b.amenity_bonus, 30.0);
}

#[test]
fn disjoint_amenities_earn_nothing() {
    let b = score_breakdown(
        &listing(150.0, &["pool", "gym"], None),
        &prefs(&["wifi", "kitchen"], 0.0),
    );
    assert_eq!(b.amenity_bonus, 0.0);
}

#[test]
fn extra_listing_amenities_do_not_inflate_the_bonus() {
    let b = score_breakdown(
        &listing(150.0, &["wifi", "wifi", "pool", "gym"], None),
        &prefs(&["wifi", "kitchen"], 0.0),
    );
    assert!((b.amenity_bonus - 15.0).abs() < EPSILON);
}

#[test]
fn duplicate_wishes_count_once() {
    let b = score_breakdown(
        &listing(150.0, &["wifi"], None),
        &prefs(&["wifi", "wifi", "kitchen"], 0.0),
    );
    assert!((b.amenity_bonus - 15.0).abs() < EPSILON);
}

#[test]
fn amenity_match_is_case_sensitive() {
    let b = score_breakdown(&listing(150.0, &["WiFi"], None), &prefs(&["wifi"], 0.0));
    assert_eq!(b.amenity_bonus, 0.0);
}

#[test]
fn partial_match_scenario_clamps_to_one_hundred() {
    let b = score_breakdown(
        &listing(150.0, &["wifi"], Some(80.0)),
        &prefs(&["wifi", "kitchen"], 10.0),
    );
    assert!((b.price_penalty - 10.0).abs() < EPSILON);
    assert!((b.walkability_bonus - 8.0).abs() < EPSILON);
    assert!((b.amenity_bonus - 15.0).abs() < EPSILON);
    assert!((b.raw - 113.0).abs() < EPSILON);
    assert_eq!(b.score, 100.0);
}

#[test]
fn overpriced_listing_scenario_stays_unclamped() {
    let b = score_breakdown(
        &listing(300.0, &[], None),
        &prefs(&["wifi", "kitchen"], 10.0),
    );
    assert!((b.price_penalty - 40.0).abs() < EPSILON);
    assert_eq!(b.walkability_bonus, 0.0);
    assert_eq!(b.amenity_bonus, 0.0);
    assert!((b.score - 60.0).abs() < EPSILON);
}

#[test]
fn very_expensive_listing_clamps_to_zero() {
    let score = score_listing(&listing(10_000.0, &[], None), &prefs(&["wifi"], 0.0));
    assert_eq!(score, 0.0);
    assert!(score.is_sign_positive());
}

#[test]
fn zero_width_budget_has_no_price_penalty() {
    let mut p = prefs(&["wifi"], 0.0);
    p.budget = Budget {
        min: 150.0,
        max: 150.0,
    };
    for price in [0.0, 150.0, 900.0] {
        let b = score_breakdown(&listing(price, &[], None), &p);
        assert_eq!(b.price_penalty, 0.0);
        assert!(b.score.is_finite());
    }
}

#[test]
fn empty_wish_list_has_no_amenity_bonus() {
    let b = score_breakdown(&listing(150.0, &["wifi", "pool"], None), &prefs(&[], 0.0));
    assert_eq!(b.amenity_bonus, 0.0);
    assert!((b.score - 90.0).abs() < EPSILON);
}

#[test]
fn negative_importance_can_pull_score_down() {
    let b = score_breakdown(&listing(100.0, &[], Some(100.0)), &prefs(&["wifi"], -50.0));
    assert!((b.walkability_bonus - -50.0).abs() < EPSILON);
    assert!((b.score - 50.0).abs() < EPSILON);
}

#[test]
fn score_is_always_within_bounds() {
    let prices = [0.0, 99.0, 100.0, 150.0, 200.0, 450.0, 1e6];
    let walks = [None, Some(0.0), Some(55.0), Some(100.0)];
    let importances = [-1_000.0, 0.0, 35.0, 1_000.0];
    let offered: [&[&str]; 3] = [&[], &["wifi"], &["wifi", "kitchen", "pool"]];
    let wanted: [&[&str]; 3] = [&[], &["kitchen"], &["wifi", "kitchen"]];

    for price in prices {
        for walk in walks {
            for importance in importances {
                for o in offered {
                    for w in wanted {
                        let score = score_listing(&listing(price, o, walk), &prefs(w, importance));
                        assert!(
                            (MIN_SCORE..=MAX_SCORE).contains(&score),
                            "score {score} out of bounds for price {price}, walk {walk:?}, importance {importance}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn scoring_does_not_depend_on_call_order() {
    let p = prefs(&["wifi", "kitchen"], 25.0);
    let a = listing(120.0, &["wifi"], Some(70.0));
    let b = listing(190.0, &["kitchen", "wifi"], None);
    let first = (score_listing(&a, &p), score_listing(&b, &p));
    let second = (score_listing(&b, &p), score_listing(&a, &p));
    assert_eq!(first.0, second.1);
    assert_eq!(first.1, second.0);
}
