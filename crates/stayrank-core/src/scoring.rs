//! Preference-driven listing scorer.
//!
//! Additive model on a baseline of 100: a price penalty of up to 20 points
//! across the budget window, a walkability bonus weighted by the caller, and
//! an amenity-match bonus of up to 30 points. The sum is clamped to
//! `[0, 100]`. Each listing is scored on its own; nothing is normalized
//! against the rest of the candidate pool.

use std::collections::HashSet;

use crate::listing::Listing;
use crate::preferences::TripPreferences;

pub const BASELINE: f64 = 100.0;
/// Points lost by a listing priced at the top of the budget window.
pub const PRICE_WEIGHT: f64 = 20.0;
/// Points gained by a listing offering every desired amenity.
pub const AMENITY_WEIGHT: f64 = 30.0;
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// The individual terms behind a listing's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Subtracted from the baseline. Negative below `budget.min`, above 20
    /// past `budget.max`.
    pub price_penalty: f64,
    pub walkability_bonus: f64,
    pub amenity_bonus: f64,
    /// Baseline plus terms, before clamping.
    pub raw: f64,
    /// `raw` clamped into `[0, 100]`.
    pub score: f64,
}

/// Score a listing against the trip preferences.
///
/// Pure: the same inputs always give the same result, regardless of call order.
#[must_use]
pub fn score_listing(listing: &Listing, prefs: &TripPreferences) -> f64 {
    score_breakdown(listing, prefs).score
}

/// Compute every term of the score for inspection.
///
/// A zero-width (or inverted) budget window carries no price penalty, and an
/// empty amenity wish list carries no amenity bonus, so the result is always
/// finite for finite inputs.
#[must_use]
pub fn score_breakdown(listing: &Listing, prefs: &TripPreferences) -> ScoreBreakdown {
    let price_penalty = price_penalty(listing.price, prefs);
    let walkability_bonus = walkability_bonus(listing.walk_score, prefs.walkability_importance);
    let amenity_bonus = amenity_bonus(&listing.amenities, &prefs.amenities);

    let raw = BASELINE - price_penalty + walkability_bonus + amenity_bonus;
    ScoreBreakdown {
        price_penalty,
        walkability_bonus,
        amenity_bonus,
        raw,
        score: clamp_score(raw),
    }
}

fn price_penalty(price: f64, prefs: &TripPreferences) -> f64 {
    let range = prefs.budget.range();
    if range <= 0.0 {
        return 0.0;
    }
    let diff = price - prefs.budget.min;
    (diff / range) * PRICE_WEIGHT
}

fn walkability_bonus(walk_score: Option<f64>, importance: f64) -> f64 {
    walk_score.map_or(0.0, |walk| (walk / 100.0) * importance)
}

fn amenity_bonus(offered: &[String], wanted: &[String]) -> f64 {
    let wanted: HashSet<&str> = wanted.iter().map(String::as_str).collect();
    if wanted.is_empty() {
        return 0.0;
    }
    let offered: HashSet<&str> = offered.iter().map(String::as_str).collect();
    let matches = wanted.intersection(&offered).count();

    #[allow(clippy::cast_precision_loss)]
    let ratio = matches as f64 / wanted.len() as f64;
    ratio * AMENITY_WEIGHT
}

fn clamp_score(raw: f64) -> f64 {
    if raw.is_nan() {
        return MIN_SCORE;
    }
    // Adding zero turns a -0.0 into 0.0 so equal scores compare equal.
    raw.clamp(MIN_SCORE, MAX_SCORE) + 0.0
}

#[cfg(test)]
#[path = "scoring_test.rs"]
mod tests;
