//! The vendor search orchestrator.
//!
//! One search runs: resolve location -> probe cache -> on hit return the
//! stored results -> on miss fetch from the provider, write the cache
//! best-effort, return the fetched results. Nothing is retried; a failed
//! fetch surfaces to the caller and must be re-initiated by a new request.

use std::sync::Arc;

use metrics::counter;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::clients::dataforseo::{ProviderError, VendorSearchProvider};
use crate::db::Store;
use crate::locations::{self, UnknownLocation};
use crate::models::SearchResult;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("location must look like \"City, State\", got {0:?}")]
    InvalidLocation(String),

    #[error(transparent)]
    UnknownLocation(#[from] UnknownLocation),

    #[error("search provider credentials are not configured")]
    Configuration,

    #[error("search provider error: {0}")]
    Provider(String),
}

impl From<ProviderError> for SearchError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Configuration => Self::Configuration,
            other => Self::Provider(other.to_string()),
        }
    }
}

/// Where a search response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    Cache,
    Live,
}

pub struct SearchService {
    store: Store,
    provider: Arc<dyn VendorSearchProvider>,
    cache_ttl: chrono::Duration,
}

impl SearchService {
    #[must_use]
    pub fn new(
        store: Store,
        provider: Arc<dyn VendorSearchProvider>,
        cache_ttl_days: i64,
    ) -> Self {
        Self {
            store,
            provider,
            cache_ttl: chrono::Duration::days(cache_ttl_days),
        }
    }

    /// Runs one provider search through the cache.
    ///
    /// The cache tuple is the lower-cased (category, city, state,
    /// subcategory); a search without a subcategory uses the empty string
    /// so it never collides with a subcategory-scoped row.
    pub async fn search(
        &self,
        keyword: &str,
        location: &str,
        subcategory: Option<&str>,
    ) -> Result<(Vec<SearchResult>, SearchSource), SearchError> {
        let (city, state) = locations::parse_location(location)
            .ok_or_else(|| SearchError::InvalidLocation(location.to_string()))?;
        let location_code = locations::resolve(&state, &city)?;

        let category = keyword.trim().to_lowercase();
        let city_key = city.to_lowercase();
        let state_key = state.to_lowercase();
        let sub_key = subcategory
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();

        match self
            .store
            .get_cached_search(&category, &city_key, &state_key, &sub_key)
            .await
        {
            Ok(Some(results)) => {
                counter!("vendry_search_cache_hits_total").increment(1);
                debug!(
                    %category,
                    city = %city_key,
                    state = %state_key,
                    results = results.len(),
                    "serving cached vendor search"
                );
                return Ok((results, SearchSource::Cache));
            }
            Ok(None) => {}
            // A failed probe counts as a miss; caching is an optimization.
            Err(e) => warn!("cache probe failed for {category}/{city_key}/{state_key}: {e}"),
        }

        counter!("vendry_search_cache_misses_total").increment(1);

        let provider_keyword = if sub_key.is_empty() {
            category.clone()
        } else {
            format!("{sub_key} {category}")
        };

        info!(
            keyword = %provider_keyword,
            location_code,
            "fetching vendors from provider"
        );

        let results = self
            .provider
            .search(&provider_keyword, location_code, &city, &state)
            .await?;

        // Best-effort: a failed write never fails the search.
        if let Err(e) = self
            .store
            .put_cached_search(
                &category,
                &city_key,
                &state_key,
                &sub_key,
                location_code,
                &results,
                self.cache_ttl,
            )
            .await
        {
            warn!("failed to cache search results for {category}/{city_key}/{state_key}: {e}");
        }

        Ok((results, SearchSource::Live))
    }
}
