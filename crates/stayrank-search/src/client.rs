//! HTTP client for the listing search provider.
//!
//! Wraps `reqwest` with provider-specific error handling, optional bearer
//! authentication, and typed response deserialization. Every endpoint checks
//! the `"status"` field of the JSON envelope and surfaces provider-level
//! failures as [`SearchError::Provider`].

use std::time::Duration;

use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::{Client, Url};

use stayrank_core::{Listing, ListingLocation};

use crate::criteria::SearchCriteria;
use crate::error::SearchError;
use crate::provider::SearchProvider;
use crate::types::{ApiResponse, DetailResponse, ListingDetails, ListingSummary, SearchResponse};

const DEFAULT_DETAIL_CONCURRENCY: usize = 4;

/// Client for the listing search provider.
///
/// Use [`ListingSearchClient::new`] with the configured base URL; tests point
/// it at a wiremock server.
pub struct ListingSearchClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    detail_concurrency: usize,
}

impl ListingSearchClient {
    /// Creates a client with the given per-request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise to exactly one trailing slash so path segments are
        // appended below the base path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| SearchError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SearchError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            api_key: None,
            detail_concurrency: DEFAULT_DETAIL_CONCURRENCY,
        })
    }

    /// Sends `Authorization: Bearer <key>` on every request.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Caps how many detail lookups run at once. Values below one become one.
    #[must_use]
    pub fn with_detail_concurrency(mut self, detail_concurrency: usize) -> Self {
        self.detail_concurrency = detail_concurrency.max(1);
        self
    }

    /// Runs the provider search and returns the raw hits.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Provider`] if the provider returns an error status.
    /// - [`SearchError::Http`] on network failure.
    /// - [`SearchError::UnexpectedStatus`] on a non-2xx HTTP status.
    /// - [`SearchError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search_listings(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<ListingSummary>, SearchError> {
        let params = search_params(criteria);
        let url = self.build_url(&["search"], &params);
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: ApiResponse<SearchResponse> =
            serde_json::from_value(body).map_err(|e| SearchError::Deserialize {
                context: format!("search(location={})", criteria.location),
                source: e,
            })?;

        Ok(envelope.data.listings)
    }

    /// Fetches the detail record for one listing.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::search_listings`].
    pub async fn get_listing_details(
        &self,
        listing_id: &str,
        criteria: &SearchCriteria,
    ) -> Result<ListingDetails, SearchError> {
        let params = vec![
            ("checkin", criteria.checkin_param()),
            ("checkout", criteria.checkout_param()),
            ("adults", criteria.guests.to_string()),
        ];
        let url = self.build_url(&["listings", listing_id], &params);
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: ApiResponse<DetailResponse> =
            serde_json::from_value(body).map_err(|e| SearchError::Deserialize {
                context: format!("listing details(id={listing_id})"),
                source: e,
            })?;

        Ok(envelope.data.listing)
    }

    /// Builds a request URL under the base path with percent-encoded path
    /// segments and query parameters.
    fn build_url(&self, segments: &[&str], params: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the response
    /// body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, SearchError> {
        let mut request = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Checks the top-level `"status"` field and returns an error if it
    /// indicates failure.
    fn check_api_error(body: &serde_json::Value) -> Result<(), SearchError> {
        if body.get("status").and_then(serde_json::Value::as_str) == Some("ERROR") {
            let msg = body
                .get("error")
                .or_else(|| body.get("message"))
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(SearchError::Provider(msg));
        }
        Ok(())
    }
}

impl SearchProvider for ListingSearchClient {
    /// Searches, then looks up details for every hit.
    ///
    /// Detail lookups run at most `detail_concurrency` at a time and results
    /// keep the provider's search order. Any failed lookup fails the whole
    /// search; no partial list is returned.
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Listing>, SearchError> {
        let summaries = self.search_listings(criteria).await?;
        tracing::debug!(
            hits = summaries.len(),
            location = %criteria.location,
            "search returned hits; fetching details"
        );

        stream::iter(summaries)
            .map(|summary| async move {
                let details = self.get_listing_details(&summary.id, criteria).await?;
                Ok::<_, SearchError>(merge_listing(summary, details))
            })
            .buffered(self.detail_concurrency)
            .try_collect()
            .await
    }
}

fn search_params(criteria: &SearchCriteria) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("location", criteria.location.clone()),
        ("checkin", criteria.checkin_param()),
        ("checkout", criteria.checkout_param()),
        ("adults", criteria.guests.to_string()),
        ("min_price", criteria.price_min.to_string()),
        ("max_price", criteria.price_max.to_string()),
        ("min_bedrooms", criteria.min_bedrooms.to_string()),
        ("min_bathrooms", criteria.min_bathrooms.to_string()),
    ];
    if !criteria.amenities.is_empty() {
        params.push(("amenities", criteria.amenities.join(",")));
    }
    params
}

/// Combine a search hit with its detail record.
///
/// Detail values win where present; the summary address is the fallback.
/// Walk scores outside `[0, 100]` are dropped.
fn merge_listing(summary: ListingSummary, details: ListingDetails) -> Listing {
    let walk_score = details
        .neighborhood_info
        .and_then(|info| info.walk_score)
        .filter(|score| {
            let valid = (0.0..=100.0).contains(score);
            if !valid {
                tracing::warn!(listing = %summary.id, walk_score = score, "discarding out-of-range walk score");
            }
            valid
        });

    let address = details
        .public_address
        .or(summary.public_address)
        .unwrap_or_default();

    Listing {
        id: summary.id,
        name: summary.name,
        price: summary.price,
        amenities: details.amenities.unwrap_or(summary.amenities),
        walk_score,
        location: ListingLocation {
            lat: summary.lat,
            lng: summary.lng,
            address,
        },
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
