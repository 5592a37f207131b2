use crate::entities::{prelude::*, vendor_cache};
use crate::models::SearchResult;
use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set};

pub struct CacheRepository {
    conn: DatabaseConnection,
}

impl CacheRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Looks up a live cache row for the lower-cased search tuple.
    /// Returns `None` on miss; expired rows never match.
    pub async fn get_cached_search(
        &self,
        category: &str,
        city: &str,
        state: &str,
        subcategory: &str,
    ) -> Result<Option<Vec<SearchResult>>> {
        let now = chrono::Utc::now().to_rfc3339();

        // Opportunistic cleanup; the maintenance job also prunes on a schedule.
        let _ = VendorCache::delete_many()
            .filter(vendor_cache::Column::ExpiresAt.lt(&now))
            .exec(&self.conn)
            .await;

        let entry = VendorCache::find()
            .filter(vendor_cache::Column::Category.eq(category))
            .filter(vendor_cache::Column::City.eq(city))
            .filter(vendor_cache::Column::State.eq(state))
            .filter(vendor_cache::Column::Subcategory.eq(subcategory))
            .filter(vendor_cache::Column::ExpiresAt.gt(&now))
            .one(&self.conn)
            .await?;

        if let Some(e) = entry {
            let results: Vec<SearchResult> = serde_json::from_str(&e.search_results)?;
            Ok(Some(results))
        } else {
            Ok(None)
        }
    }

    /// Upserts the tuple's cache row with a fresh expiry.
    pub async fn put_search(
        &self,
        category: &str,
        city: &str,
        state: &str,
        subcategory: &str,
        location_code: i32,
        results: &[SearchResult],
        ttl: chrono::Duration,
    ) -> Result<()> {
        let results_json = serde_json::to_string(results)?;
        let now = chrono::Utc::now();
        let created_at = now.to_rfc3339();
        let expires_at = (now + ttl).to_rfc3339();

        let active_model = vendor_cache::ActiveModel {
            category: Set(category.to_string()),
            city: Set(city.to_string()),
            state: Set(state.to_string()),
            subcategory: Set(subcategory.to_string()),
            location_code: Set(location_code),
            search_results: Set(results_json),
            created_at: Set(created_at),
            expires_at: Set(expires_at),
            ..Default::default()
        };

        VendorCache::insert(active_model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::columns([
                    vendor_cache::Column::Category,
                    vendor_cache::Column::City,
                    vendor_cache::Column::State,
                    vendor_cache::Column::Subcategory,
                ])
                .update_columns([
                    vendor_cache::Column::LocationCode,
                    vendor_cache::Column::SearchResults,
                    vendor_cache::Column::CreatedAt,
                    vendor_cache::Column::ExpiresAt,
                ])
                .to_owned(),
            )
            .exec(&self.conn)
            .await?;

        Ok(())
    }

    pub async fn prune_expired(&self) -> Result<u64> {
        let now = chrono::Utc::now().to_rfc3339();

        let res = VendorCache::delete_many()
            .filter(vendor_cache::Column::ExpiresAt.lt(&now))
            .exec(&self.conn)
            .await?;

        Ok(res.rows_affected)
    }

    pub async fn entry_count(&self) -> Result<u64> {
        Ok(VendorCache::find().count(&self.conn).await?)
    }

    /// Fetches the raw row regardless of expiry. Used by tests and the
    /// status endpoint, not by the search path.
    pub async fn get_entry(
        &self,
        category: &str,
        city: &str,
        state: &str,
        subcategory: &str,
    ) -> Result<Option<vendor_cache::Model>> {
        Ok(VendorCache::find()
            .filter(vendor_cache::Column::Category.eq(category))
            .filter(vendor_cache::Column::City.eq(city))
            .filter(vendor_cache::Column::State.eq(state))
            .filter(vendor_cache::Column::Subcategory.eq(subcategory))
            .one(&self.conn)
            .await?)
    }
}
