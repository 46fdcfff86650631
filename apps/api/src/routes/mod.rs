pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::matching::handlers as matching;
use crate::session::handlers as session;
use crate::sources::handlers as sources;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Corpus matching
        .route("/api/v1/jobs", get(matching::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(matching::handle_get_job))
        .route("/api/v1/match", post(matching::handle_match))
        // Profile / session
        .route(
            "/api/v1/profile",
            get(session::handle_get_profile)
                .post(session::handle_submit_profile)
                .delete(session::handle_reset),
        )
        .route("/api/v1/matches", get(session::handle_get_matches))
        .route("/api/v1/matches/:id", get(session::handle_get_match))
        .route("/api/v1/preferences/theme", put(session::handle_set_theme))
        // External sources
        .route("/api/v1/skills/suggest", get(sources::handle_suggest_skills))
        .route("/api/v1/search/live", get(sources::handle_live_search))
        .route("/api/v1/search/rss", get(sources::handle_feed_search))
        .with_state(state)
}
