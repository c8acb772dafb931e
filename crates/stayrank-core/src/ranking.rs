use crate::listing::{Listing, ScoredListing};
use crate::preferences::TripPreferences;
use crate::scoring::score_listing;

/// Score every listing and order the results best first.
///
/// The output has one entry per input listing. The sort is stable, so
/// listings with equal scores keep the order the search provider returned
/// them in.
#[must_use]
pub fn rank_listings(listings: Vec<Listing>, prefs: &TripPreferences) -> Vec<ScoredListing> {
    let mut scored: Vec<ScoredListing> = listings
        .into_iter()
        .map(|listing| {
            let score = score_listing(&listing, prefs);
            ScoredListing { listing, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}
