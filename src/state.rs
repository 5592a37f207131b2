use std::sync::Arc;
use tokio::sync::RwLock;

use crate::clients::dataforseo::DataForSeoClient;
use crate::config::Config;
use crate::db::Store;
use crate::services::{DirectoryService, MaintenanceService, SearchService};

/// Build a shared HTTP client with reasonable defaults for API calls.
/// Reused across all HTTP-based clients to enable connection pooling.
fn build_shared_http_client(timeout_seconds: u64) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_seconds))
        .user_agent("Vendry/1.0")
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub dataforseo: Arc<DataForSeoClient>,

    pub search_service: Arc<SearchService>,

    pub directory_service: Arc<DirectoryService>,

    pub maintenance: Arc<MaintenanceService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let http_client =
            build_shared_http_client(config.dataforseo.request_timeout_seconds.into())?;

        let dataforseo = Arc::new(DataForSeoClient::with_shared_client(
            http_client,
            config.dataforseo.base_url.clone(),
            config.credentials(),
            config.dataforseo.depth,
        ));

        let search_service = Arc::new(SearchService::new(
            store.clone(),
            dataforseo.clone(),
            config.cache.ttl_days,
        ));

        let directory_service = Arc::new(DirectoryService::new(store.clone()));

        let maintenance = Arc::new(MaintenanceService::new(
            store.clone(),
            config.maintenance.clone(),
        ));

        let config = Arc::new(RwLock::new(config));

        Ok(Self {
            config,
            store,
            dataforseo,
            search_service,
            directory_service,
            maintenance,
        })
    }

    pub async fn config(&self) -> Config {
        self.config.read().await.clone()
    }
}
