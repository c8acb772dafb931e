//! Trip preferences: the user's search and ranking criteria for one run.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Largest party the search provider accepts.
pub const MAX_GROUP_SIZE: u32 = 16;

/// Nightly price bounds. `min <= max` after validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub min: f64,
    pub max: f64,
}

impl Budget {
    /// Width of the budget window. Zero for a single-price budget.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPreferences {
    pub location: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub group_size: u32,
    pub budget: Budget,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub amenities: Vec<String>,
    #[serde(default)]
    pub vibes: Vec<String>,
    pub walkability_importance: f64,
}

impl TripPreferences {
    /// Number of nights between check-in and check-out.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Load and validate trip preferences from a JSON file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_preferences(path: &Path) -> Result<TripPreferences, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::PreferencesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let prefs = serde_json::from_str::<TripPreferences>(&content).map_err(|e| {
        ConfigError::PreferencesFileParse {
            path: path.display().to_string(),
            source: e,
        }
    })?;

    normalize(prefs)
}

/// Parse and validate trip preferences from an in-memory JSON document.
///
/// # Errors
///
/// Returns `ConfigError` if the document is malformed or fails validation.
pub fn parse_preferences(json: &str) -> Result<TripPreferences, ConfigError> {
    let prefs = serde_json::from_str::<TripPreferences>(json).map_err(|e| {
        ConfigError::PreferencesFileParse {
            path: "<inline>".to_string(),
            source: e,
        }
    })?;

    normalize(prefs)
}

fn normalize(mut prefs: TripPreferences) -> Result<TripPreferences, ConfigError> {
    validate_preferences(&prefs)?;
    prefs.location = prefs.location.trim().to_string();
    prefs.amenities = dedupe(prefs.amenities);
    prefs.vibes = dedupe(prefs.vibes);
    Ok(prefs)
}

fn validate_preferences(prefs: &TripPreferences) -> Result<(), ConfigError> {
    if prefs.location.trim().is_empty() {
        return Err(ConfigError::Validation(
            "location must be non-empty".to_string(),
        ));
    }

    if prefs.group_size == 0 || prefs.group_size > MAX_GROUP_SIZE {
        return Err(ConfigError::Validation(format!(
            "groupSize {} is out of range; must be between 1 and {MAX_GROUP_SIZE}",
            prefs.group_size
        )));
    }

    if prefs.check_out <= prefs.check_in {
        return Err(ConfigError::Validation(format!(
            "checkOut {} must be after checkIn {}",
            prefs.check_out, prefs.check_in
        )));
    }

    let Budget { min, max } = prefs.budget;
    if !min.is_finite() || !max.is_finite() || min < 0.0 || max < 0.0 {
        return Err(ConfigError::Validation(format!(
            "budget bounds must be non-negative numbers (got min {min}, max {max})"
        )));
    }
    if min > max {
        return Err(ConfigError::Validation(format!(
            "budget min {min} exceeds max {max}"
        )));
    }

    if !prefs.walkability_importance.is_finite() {
        return Err(ConfigError::Validation(
            "walkabilityImportance must be a finite number".to_string(),
        ));
    }

    Ok(())
}

/// Drop repeated entries, keeping the first occurrence of each.
fn dedupe(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
