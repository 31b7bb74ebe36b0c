//! Environment driven settings for the demo server.

use std::{sync::OnceLock, time::Duration};

use common::frames::{FrameConfig, INDEX_NAME};

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub pilosa_url: String,
    pub index_name: String,
    pub request_timeout: Duration,
    pub frames: FrameConfig,
}

impl BackendConfig {
    pub fn from_env() -> Self {
        let pilosa_url = std::env::var("PILOSA_URL").unwrap_or("http://localhost:10101".to_string());
        let index_name = std::env::var("PILOSA_INDEX").unwrap_or(INDEX_NAME.to_string());
        let timeout_secs = std::env::var("PILOSA_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(60);
        Self {
            pilosa_url: pilosa_url.trim_end_matches('/').to_string(),
            index_name,
            request_timeout: Duration::from_secs(timeout_secs),
            frames: FrameConfig::taxi_default(),
        }
    }

    pub fn query_url(&self) -> String {
        format!("{}/index/{}/query", self.pilosa_url, self.index_name)
    }

    pub fn version_url(&self) -> String {
        format!("{}/version", self.pilosa_url)
    }
}

pub fn get_backend_config() -> &'static BackendConfig {
    static CONFIG: OnceLock<BackendConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        let config = BackendConfig::from_env();
        tracing::info!("Pilosa at {} (index {})", config.pilosa_url, config.index_name);
        config
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let config = BackendConfig {
            pilosa_url: "http://pilosa:10101".to_string(),
            index_name: "taxi".to_string(),
            request_timeout: Duration::from_secs(1),
            frames: FrameConfig::taxi_default(),
        };
        assert_eq!(config.query_url(), "http://pilosa:10101/index/taxi/query");
        assert_eq!(config.version_url(), "http://pilosa:10101/version");
    }
}
