use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Server configuration
    pub server_host: String,
    pub server_port: u16,
    pub environment: String,
    pub log_level: String,

    // Upstream pageviews API
    pub pageviews_api_url: String,
    pub pageviews_user_agent: String,
    pub http_timeout_secs: u64,
    pub max_concurrent_fetches: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            log_level: env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "wikiview=debug,tower_http=debug".to_string()),

            pageviews_api_url: env::var("PAGEVIEWS_API_URL").unwrap_or_else(|_| {
                "https://wikimedia.org/api/rest_v1/metrics/pageviews/top/en.wikipedia/all-access"
                    .to_string()
            }),
            pageviews_user_agent: env::var("PAGEVIEWS_USER_AGENT")
                .unwrap_or_else(|_| "Wikipedia-API-Wrapper/1.0".to_string()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            // 一个月最多31天，默认上限正好覆盖整月的并发抓取
            max_concurrent_fetches: env::var("MAX_CONCURRENT_FETCHES")
                .unwrap_or_else(|_| "31".to_string())
                .parse()?,
        })
    }
}
