use chrono::NaiveDate;
use serde::Serialize;

use stayrank_core::TripPreferences;

/// Query sent to the search provider, derived from the trip preferences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchCriteria {
    pub location: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub price_min: f64,
    pub price_max: f64,
    pub min_bedrooms: u32,
    pub min_bathrooms: u32,
    pub amenities: Vec<String>,
}

impl SearchCriteria {
    #[must_use]
    pub fn from_preferences(prefs: &TripPreferences) -> Self {
        Self {
            location: prefs.location.clone(),
            check_in: prefs.check_in,
            check_out: prefs.check_out,
            guests: prefs.group_size,
            price_min: prefs.budget.min,
            price_max: prefs.budget.max,
            min_bedrooms: prefs.bedrooms,
            min_bathrooms: prefs.bathrooms,
            amenities: prefs.amenities.clone(),
        }
    }

    /// Check-in date as the provider expects it (`YYYY-MM-DD`).
    #[must_use]
    pub fn checkin_param(&self) -> String {
        self.check_in.format("%Y-%m-%d").to_string()
    }

    #[must_use]
    pub fn checkout_param(&self) -> String {
        self.check_out.format("%Y-%m-%d").to_string()
    }
}
