mod config;
mod errors;
mod matching;
mod models;
mod routes;
mod session;
mod sources;
mod state;
mod storage;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::matching::corpus::JobCorpus;
use crate::matching::scoring::build_scorer;
use crate::routes::build_router;
use crate::session::SessionState;
use crate::sources::http::build_client;
use crate::sources::job_search::HttpJobSearch;
use crate::sources::rss::RssJobFeed;
use crate::sources::skills::OnetSkillSearch;
use crate::state::AppState;
use crate::storage::LocalStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobmatch API v{}", env!("CARGO_PKG_VERSION"));

    // Local storage + restored session
    let store = LocalStore::open(&config.storage_dir)
        .with_context(|| format!("Cannot open storage dir {}", config.storage_dir.display()))?;
    let session = SessionState::restore(store.load_profile(), store.load_theme());
    info!(
        "Session restored (profile present: {})",
        session.view().profile.is_some()
    );

    let corpus = JobCorpus::default();
    info!("Job corpus loaded: {} listings", corpus.len());

    let scorer = build_scorer(config.scoring_policy);
    info!("Relevance scorer: {}", config.scoring_policy);

    // One HTTP client shared by every external source
    let client = build_client(config.http_timeout_secs).context("Failed to build HTTP client")?;

    let state = AppState {
        corpus: Arc::new(corpus),
        scorer,
        job_search: Arc::new(HttpJobSearch::new(
            client.clone(),
            config.job_search_url.clone(),
        )),
        job_feed: Arc::new(RssJobFeed::new(
            client.clone(),
            config.rss_feed_url.clone(),
            config.rss_proxy_url.clone(),
        )),
        skill_search: Arc::new(OnetSkillSearch::new(client, config.skill_search_url.clone())),
        store,
        session: Arc::new(RwLock::new(session)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
