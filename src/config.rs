use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::clients::dataforseo::Credentials;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub dataforseo: DataForSeoConfig,

    pub cache: CacheConfig,

    pub maintenance: MaintenanceConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    /// Maximum database connections (default: 5)
    pub max_db_connections: u32,

    /// Minimum database connections (default: 1)
    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:data/vendry.db".to_string(),
            log_level: "info".to_string(),
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub enabled: bool,

    pub port: u16,

    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: 8750,
            cors_allowed_origins: vec![
                "http://localhost:8750".to_string(),
                "http://127.0.0.1:8750".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataForSeoConfig {
    pub base_url: String,

    /// API login. Overridable with the DATAFORSEO_LOGIN env var.
    pub login: String,

    /// API password. Overridable with the DATAFORSEO_PASSWORD env var.
    pub password: String,

    /// Result depth requested per Maps query.
    pub depth: u32,

    /// Request timeout in seconds (default: 30)
    pub request_timeout_seconds: u32,
}

impl Default for DataForSeoConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.dataforseo.com".to_string(),
            login: String::new(),
            password: String::new(),
            depth: 20,
            request_timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// How long a cached provider search stays servable.
    pub ttl_days: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_days: 14 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceConfig {
    pub enabled: bool,

    /// Interval between expired-row sweeps when no cron expression is set.
    pub prune_interval_hours: u32,

    pub cron_expression: Option<String>,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            prune_interval_hours: 24,
            cron_expression: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,

    pub loki_enabled: bool,

    pub loki_url: String,

    pub loki_labels: std::collections::HashMap<String, String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        let mut labels = std::collections::HashMap::new();
        labels.insert("app".to_string(), "vendry".to_string());

        Self {
            metrics_enabled: true,
            loki_enabled: false,
            loki_url: "http://localhost:3100".to_string(),
            loki_labels: labels,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            server: ServerConfig::default(),
            dataforseo: DataForSeoConfig::default(),
            cache: CacheConfig::default(),
            maintenance: MaintenanceConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                let mut config = Self::load_from_path(path)?;
                config.apply_env_overrides();
                return Ok(config);
            }
        }

        info!("No config file found, using defaults");
        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("vendry").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".vendry").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    /// Environment credentials win over the config file so deployments can
    /// keep secrets out of it.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(login) = std::env::var("DATAFORSEO_LOGIN")
            && !login.is_empty()
        {
            self.dataforseo.login = login;
        }
        if let Ok(password) = std::env::var("DATAFORSEO_PASSWORD")
            && !password.is_empty()
        {
            self.dataforseo.password = password;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.cache.ttl_days <= 0 {
            anyhow::bail!("Cache TTL must be at least one day");
        }

        if self.maintenance.enabled
            && self.maintenance.prune_interval_hours == 0
            && self.maintenance.cron_expression.is_none()
        {
            anyhow::bail!("Maintenance interval must be > 0 or cron expression must be set");
        }

        if self.dataforseo.base_url.is_empty() {
            anyhow::bail!("DataForSEO base URL cannot be empty");
        }

        Ok(())
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials {
            login: self.dataforseo.login.clone(),
            password: self.dataforseo.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.cache.ttl_days, 14);
        assert_eq!(config.dataforseo.depth, 20);
        assert_eq!(config.server.port, 8750);
        assert_eq!(config.maintenance.prune_interval_hours, 24);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[dataforseo]"));
        assert!(toml_str.contains("[cache]"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [cache]
            ttl_days = 30
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.cache.ttl_days, 30);

        assert_eq!(config.dataforseo.base_url, "https://api.dataforseo.com");
    }

    #[test]
    fn validate_rejects_zero_ttl() {
        let mut config = Config::default();
        config.cache.ttl_days = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn credentials_come_from_config() {
        let mut config = Config::default();
        config.dataforseo.login = "login".to_string();
        config.dataforseo.password = "secret".to_string();

        let creds = config.credentials();
        assert!(creds.is_configured());
        assert_eq!(creds.login, "login");
    }
}
