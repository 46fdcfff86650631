//! Axum route handlers for the stateless matching API.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::{ApiJson, AppError};
use crate::matching::pipeline::{match_with_location_fallback, MatchOutcome, MatchQuery};
use crate::models::job::JobListing;
use crate::state::AppState;

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobListing>> {
    Json(state.corpus.jobs().to_vec())
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobListing>, AppError> {
    state
        .corpus
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

/// POST /api/v1/match
///
/// Ranks the corpus for an ad-hoc query without touching the session.
pub async fn handle_match(
    State(state): State<AppState>,
    ApiJson(query): ApiJson<MatchQuery>,
) -> Json<MatchOutcome> {
    Json(match_with_location_fallback(
        &state.corpus,
        state.scorer.as_ref(),
        &query,
    ))
}
