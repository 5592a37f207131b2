use crate::entities::{vendor_cache, vendors};
use crate::models::SearchResult;
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let is_memory = db_url.contains(":memory:");

        if !is_memory {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        // An in-memory SQLite database exists per connection, so the pool
        // must stay at a single connection to see one database.
        let (max_connections, min_connections) = if is_memory {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn cache_repo(&self) -> repositories::cache::CacheRepository {
        repositories::cache::CacheRepository::new(self.conn.clone())
    }

    fn vendor_repo(&self) -> repositories::vendors::VendorRepository {
        repositories::vendors::VendorRepository::new(self.conn.clone())
    }

    pub async fn get_cached_search(
        &self,
        category: &str,
        city: &str,
        state: &str,
        subcategory: &str,
    ) -> Result<Option<Vec<SearchResult>>> {
        self.cache_repo()
            .get_cached_search(category, city, state, subcategory)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn put_cached_search(
        &self,
        category: &str,
        city: &str,
        state: &str,
        subcategory: &str,
        location_code: i32,
        results: &[SearchResult],
        ttl: chrono::Duration,
    ) -> Result<()> {
        self.cache_repo()
            .put_search(
                category,
                city,
                state,
                subcategory,
                location_code,
                results,
                ttl,
            )
            .await
    }

    pub async fn prune_expired_cache(&self) -> Result<u64> {
        self.cache_repo().prune_expired().await
    }

    pub async fn cache_entry_count(&self) -> Result<u64> {
        self.cache_repo().entry_count().await
    }

    pub async fn get_cache_entry(
        &self,
        category: &str,
        city: &str,
        state: &str,
        subcategory: &str,
    ) -> Result<Option<vendor_cache::Model>> {
        self.cache_repo()
            .get_entry(category, city, state, subcategory)
            .await
    }

    pub async fn search_instagram_vendors(
        &self,
        category: Option<&str>,
        keyword: &str,
        city: &str,
        state: &str,
    ) -> Result<Vec<SearchResult>> {
        self.vendor_repo()
            .search_instagram(category, keyword, city, state)
            .await
    }

    pub async fn search_database_vendors(
        &self,
        category: Option<&str>,
        keyword: &str,
        city: &str,
        state: &str,
    ) -> Result<Vec<SearchResult>> {
        self.vendor_repo()
            .search_approved(category, keyword, city, state)
            .await
    }

    pub async fn search_google_vendors(
        &self,
        category: Option<&str>,
        keyword: &str,
        city: &str,
        state: &str,
    ) -> Result<Vec<SearchResult>> {
        self.vendor_repo()
            .search_google(category, keyword, city, state)
            .await
    }

    pub async fn get_vendor(&self, id: i32) -> Result<Option<vendors::Model>> {
        self.vendor_repo().get(id).await
    }

    pub async fn list_vendors(
        &self,
        category: Option<&str>,
        city: Option<&str>,
        state: Option<&str>,
        limit: u64,
    ) -> Result<Vec<vendors::Model>> {
        self.vendor_repo()
            .list_approved(category, city, state, limit)
            .await
    }

    pub async fn vendor_counts(&self) -> Result<(u64, u64, u64)> {
        self.vendor_repo().counts().await
    }
}
