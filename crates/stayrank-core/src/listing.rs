use serde::{Deserialize, Serialize};

/// A rentable property returned by the search collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub name: String,
    /// Nightly price in the same currency as the trip budget.
    pub price: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Walkability in `[0, 100]`, when the provider knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walk_score: Option<f64>,
    pub location: ListingLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingLocation {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub address: String,
}

/// A listing with its desirability score attached. Serialized flat, so the
/// result file reads as the listing's own fields plus `score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub score: f64,
}
