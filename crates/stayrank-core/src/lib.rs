//! Trip preferences, listing scoring, and ranking for stayrank.
//!
//! Everything in this crate is synchronous and free of network access. The
//! search collaborator lives in `stayrank-search`; the binary in
//! `stayrank-cli` wires the two together.

pub mod app_config;
pub mod config;
pub mod listing;
pub mod preferences;
pub mod ranking;
pub mod results;
pub mod scoring;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use listing::{Listing, ListingLocation, ScoredListing};
pub use preferences::{load_preferences, parse_preferences, Budget, TripPreferences};
pub use ranking::rank_listings;
pub use results::{read_results, write_results, ResultsError};
pub use scoring::{score_breakdown, score_listing, ScoreBreakdown};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read preferences file {path}: {source}")]
    PreferencesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preferences file {path}: {source}")]
    PreferencesFileParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid preferences: {0}")]
    Validation(String),
}
