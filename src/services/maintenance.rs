//! Scheduled cache maintenance.
//!
//! Expired `vendor_cache` rows are already ignored (and opportunistically
//! deleted) by the read path; this job sweeps the long tail of stale rows
//! that no search touches anymore.

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{Duration, interval};
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::config::MaintenanceConfig;
use crate::db::Store;

pub struct MaintenanceService {
    store: Store,
    config: MaintenanceConfig,
    running: Arc<RwLock<bool>>,
}

impl MaintenanceService {
    #[must_use]
    pub fn new(store: Store, config: MaintenanceConfig) -> Self {
        Self {
            store,
            config,
            running: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn run_once(&self) -> Result<u64> {
        let removed = self.store.prune_expired_cache().await?;
        info!(removed, "pruned expired vendor cache rows");
        Ok(removed)
    }

    pub async fn start(&self) -> Result<()> {
        if !self.config.enabled {
            info!("Cache maintenance disabled");
            return Ok(());
        }

        *self.running.write().await = true;

        if let Some(cron_expr) = self.config.cron_expression.clone() {
            self.run_with_cron(&cron_expr).await
        } else {
            self.run_with_interval().await
        }
    }

    pub async fn stop(&self) {
        *self.running.write().await = false;
    }

    async fn run_with_cron(&self, cron_expr: &str) -> Result<()> {
        let mut sched = JobScheduler::new().await?;

        let store = self.store.clone();
        let running = Arc::clone(&self.running);

        let job = Job::new_async(cron_expr, move |_uuid, _lock| {
            let store = store.clone();
            let running = Arc::clone(&running);
            Box::pin(async move {
                if !*running.read().await {
                    return;
                }
                match store.prune_expired_cache().await {
                    Ok(removed) => info!(removed, "pruned expired vendor cache rows"),
                    Err(e) => error!("cache prune failed: {}", e),
                }
            })
        })?;

        sched.add(job).await?;
        sched.start().await?;

        info!("Cache maintenance running with cron: {}", cron_expr);

        loop {
            if !*self.running.read().await {
                break;
            }
            tokio::time::sleep(Duration::from_secs(1)).await;
        }

        sched.shutdown().await?;
        Ok(())
    }

    async fn run_with_interval(&self) -> Result<()> {
        let hours = self.config.prune_interval_hours;
        info!("Cache maintenance running every {} hours", hours);

        let mut tick = interval(Duration::from_secs(u64::from(hours) * 3600));

        loop {
            tick.tick().await;

            if !*self.running.read().await {
                break;
            }

            if let Err(e) = self.run_once().await {
                error!("cache prune failed: {}", e);
            }
        }

        Ok(())
    }
}
