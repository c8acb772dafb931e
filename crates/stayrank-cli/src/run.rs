//! One batch run: load preferences, search, rank, and persist the results.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use stayrank_core::{
    load_preferences, rank_listings, write_results, AppConfig, ScoredListing, TripPreferences,
};
use stayrank_search::{search_with_timeout, ListingSearchClient, SearchCriteria, SearchProvider};

/// Per-invocation settings resolved from CLI flags and config defaults.
#[derive(Debug, Clone)]
pub(crate) struct RunOptions {
    pub preferences_path: PathBuf,
    pub output_path: PathBuf,
    pub dry_run: bool,
    pub top: usize,
}

/// Run the whole pipeline against the configured search provider.
///
/// With `dry_run` set, prints the criteria that would be sent and returns
/// before any network access.
///
/// # Errors
///
/// Returns an error if preferences cannot be loaded, the search fails or
/// times out, or the result file cannot be written.
pub(crate) async fn run(config: &AppConfig, options: &RunOptions) -> anyhow::Result<()> {
    tracing::info!(path = %options.preferences_path.display(), "loading preferences");
    let preferences = load_preferences(&options.preferences_path)
        .context("failed to load trip preferences")?;
    tracing::info!(
        location = %preferences.location,
        nights = preferences.nights(),
        group_size = preferences.group_size,
        "preferences loaded"
    );

    let criteria = SearchCriteria::from_preferences(&preferences);

    if options.dry_run {
        println!(
            "dry-run: would search with criteria:\n{}",
            serde_json::to_string_pretty(&criteria)?
        );
        return Ok(());
    }

    let client = build_search_client(config)?;
    let timeout = Duration::from_secs(config.search_timeout_secs);
    let ranked = execute(
        &client,
        &preferences,
        &criteria,
        &options.output_path,
        timeout,
    )
    .await?;

    println!("Results saved to {}", options.output_path.display());
    print_top(&ranked, options.top);
    Ok(())
}

pub(crate) fn build_search_client(config: &AppConfig) -> anyhow::Result<ListingSearchClient> {
    let client = ListingSearchClient::new(
        &config.search_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .context("failed to build search client")?
    .with_api_key(config.search_api_key.clone())
    .with_detail_concurrency(config.detail_concurrency);
    Ok(client)
}

/// Search once, rank every listing, and write the ranked list to `output_path`.
///
/// Nothing is written unless the search and ranking both succeed.
pub(crate) async fn execute<P>(
    provider: &P,
    preferences: &TripPreferences,
    criteria: &SearchCriteria,
    output_path: &Path,
    timeout: Duration,
) -> anyhow::Result<Vec<ScoredListing>>
where
    P: SearchProvider + Sync,
{
    tracing::info!(location = %criteria.location, ?timeout, "searching for listings");
    let listings = search_with_timeout(provider, criteria, timeout)
        .await
        .context("listing search failed")?;
    tracing::info!(count = listings.len(), "found listings");
    if listings.is_empty() {
        tracing::warn!("no listings matched the search criteria");
    }

    let ranked = rank_listings(listings, preferences);

    write_results(output_path, &ranked)
        .with_context(|| format!("failed to save results to {}", output_path.display()))?;
    tracing::info!(
        path = %output_path.display(),
        count = ranked.len(),
        "results written"
    );

    Ok(ranked)
}

fn print_top(ranked: &[ScoredListing], top: usize) {
    if top == 0 || ranked.is_empty() {
        return;
    }
    let shown = top.min(ranked.len());
    println!("\nTop {shown} of {} listings", ranked.len());
    for (i, scored) in ranked.iter().take(shown).enumerate() {
        println!("{}", format_summary_line(i + 1, scored));
    }
}

pub(crate) fn format_summary_line(rank: usize, scored: &ScoredListing) -> String {
    let listing = &scored.listing;
    let walk = listing
        .walk_score
        .map_or_else(|| "n/a".to_string(), |w| format!("{w:.0}"));
    format!(
        "{rank:>2}. {score:>5.1}  {name} ({price:.0}/night, walk {walk}) [{id}]",
        score = scored.score,
        name = listing.name,
        price = listing.price,
        id = listing.id,
    )
}
