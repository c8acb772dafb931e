use std::future::Future;
use std::time::Duration;

use stayrank_core::Listing;

use crate::criteria::SearchCriteria;
use crate::error::SearchError;

/// Anything that can turn search criteria into enriched listings.
///
/// Implementations return every listing with walk score and address already
/// filled in where the provider knows them. A run calls `search` once.
pub trait SearchProvider {
    fn search(
        &self,
        criteria: &SearchCriteria,
    ) -> impl Future<Output = Result<Vec<Listing>, SearchError>> + Send;
}

/// Run `provider.search` with an upper bound on its total duration.
///
/// # Errors
///
/// Returns [`SearchError::Timeout`] if the provider has not finished within
/// `timeout`, otherwise whatever the provider returned.
pub async fn search_with_timeout<P>(
    provider: &P,
    criteria: &SearchCriteria,
    timeout: Duration,
) -> Result<Vec<Listing>, SearchError>
where
    P: SearchProvider + Sync,
{
    match tokio::time::timeout(timeout, provider.search(criteria)).await {
        Ok(result) => result,
        Err(_) => Err(SearchError::Timeout { timeout }),
    }
}
