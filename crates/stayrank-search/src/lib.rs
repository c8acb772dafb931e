//! Listing search collaborator for stayrank.
//!
//! [`SearchProvider`] is the seam the run pipeline depends on;
//! [`ListingSearchClient`] is the HTTP adapter that implements it by running a
//! search and then one detail lookup per hit.

pub mod client;
pub mod criteria;
pub mod error;
pub mod provider;
pub mod types;

pub use client::ListingSearchClient;
pub use criteria::SearchCriteria;
pub use error::SearchError;
pub use provider::{search_with_timeout, SearchProvider};
