//! Search provider response types.
//!
//! The provider wraps every response in a `{"status": "OK", ...}` envelope;
//! [`ApiResponse`] captures that pattern generically.

use serde::Deserialize;

/// Top-level envelope for all provider responses.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(flatten)]
    pub data: T,
}

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

/// Wrapper for the search response: `{ "listings": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub listings: Vec<ListingSummary>,
}

/// One search hit. Walkability is not part of the search payload; it comes
/// from the detail lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingSummary {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub public_address: Option<String>,
}

// ---------------------------------------------------------------------------
// listing details
// ---------------------------------------------------------------------------

/// Wrapper for the detail response: `{ "listing": { ... } }`.
#[derive(Debug, Deserialize)]
pub struct DetailResponse {
    pub listing: ListingDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingDetails {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub public_address: Option<String>,
    /// Full amenity list; replaces the abbreviated one from the search hit.
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
    #[serde(default)]
    pub neighborhood_info: Option<NeighborhoodInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NeighborhoodInfo {
    #[serde(default)]
    pub walk_score: Option<f64>,
}
