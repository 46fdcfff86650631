use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::matching::scoring::ScoringPolicy;

const DEFAULT_JOB_SEARCH_URL: &str = "https://api.indeed.com/ads/apisearch";
const DEFAULT_RSS_FEED_URL: &str = "https://www.indeed.com/rss";
const DEFAULT_RSS_PROXY_URL: &str = "https://api.allorigins.win/get";
const DEFAULT_SKILL_SEARCH_URL: &str = "https://services.onetcenter.org/ws/online/search";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub storage_dir: PathBuf,
    pub scoring_policy: ScoringPolicy,
    pub job_search_url: String,
    pub rss_feed_url: String,
    pub rss_proxy_url: String,
    pub skill_search_url: String,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            storage_dir: PathBuf::from(env_or("STORAGE_DIR", ".jobmatch")),
            scoring_policy: env_or("SCORING_POLICY", "exact")
                .parse::<ScoringPolicy>()
                .context("SCORING_POLICY must be 'exact' or 'similarity'")?,
            job_search_url: env_or("JOB_SEARCH_URL", DEFAULT_JOB_SEARCH_URL),
            rss_feed_url: env_or("RSS_FEED_URL", DEFAULT_RSS_FEED_URL),
            rss_proxy_url: env_or("RSS_PROXY_URL", DEFAULT_RSS_PROXY_URL),
            skill_search_url: env_or("SKILL_SEARCH_URL", DEFAULT_SKILL_SEARCH_URL),
            http_timeout_secs: env_or("HTTP_TIMEOUT_SECS", "10")
                .parse::<u64>()
                .context("HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
