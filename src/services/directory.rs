//! Local directory search across the three collected vendor sources.
//!
//! Unlike the provider path this never leaves the database: Instagram
//! profiles, curated vendors and collected Google listings are queried
//! independently and concatenated. A failing source is logged and skipped
//! so one bad table does not empty the whole response.

use tracing::{debug, warn};

use crate::db::Store;
use crate::locations;
use crate::models::{SearchResult, VendorCategory};
use crate::services::search::SearchError;

pub struct DirectoryService {
    store: Store,
}

impl DirectoryService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn search(
        &self,
        keyword: &str,
        location: &str,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let (city, state) = locations::parse_location(location)
            .ok_or_else(|| SearchError::InvalidLocation(location.to_string()))?;

        let category = VendorCategory::from_keyword(keyword).map(VendorCategory::slug);
        debug!(keyword, ?category, %city, %state, "directory search");

        let (instagram, database, google) = futures::future::join3(
            self.store
                .search_instagram_vendors(category, keyword, &city, &state),
            self.store
                .search_database_vendors(category, keyword, &city, &state),
            self.store
                .search_google_vendors(category, keyword, &city, &state),
        )
        .await;

        let mut results = Vec::new();

        match instagram {
            Ok(mut r) => results.append(&mut r),
            Err(e) => warn!("instagram vendor query failed: {e}"),
        }
        match database {
            Ok(mut r) => results.append(&mut r),
            Err(e) => warn!("vendor directory query failed: {e}"),
        }
        match google {
            Ok(mut r) => results.append(&mut r),
            Err(e) => warn!("google vendor query failed: {e}"),
        }

        debug!(total = results.len(), "directory search finished");

        Ok(results)
    }
}
