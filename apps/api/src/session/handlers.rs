//! Axum route handlers for the profile/session API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{ApiJson, AppError};
use crate::matching::pipeline::MatchOutcome;
use crate::models::job::JobDetail;
use crate::models::profile::UserProfile;
use crate::session::SessionView;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SubmitProfileResponse {
    pub session: SessionView,
    pub matches: MatchOutcome,
}

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub theme: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.session.read().await.view())
}

/// POST /api/v1/profile
///
/// Validates and persists the profile, replaces the session's profile, and
/// returns the resulting matches. Nothing changes if validation or the write fails.
/// The write happens under the session lock so disk and session never diverge.
pub async fn handle_submit_profile(
    State(state): State<AppState>,
    ApiJson(profile): ApiJson<UserProfile>,
) -> Result<Json<SubmitProfileResponse>, AppError> {
    let profile = profile.normalized();

    let errors = profile.validation_errors();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.join("; ")));
    }

    let mut session = state.session.write().await;
    state.store.save_profile(&profile)?;
    session.submit(profile);
    let matches = session.matches(&state.corpus, state.scorer.as_ref());

    info!(
        "Profile submitted: {} matches (location_unavailable={})",
        matches.jobs.len(),
        matches.location_unavailable
    );

    Ok(Json(SubmitProfileResponse {
        session: session.view(),
        matches,
    }))
}

/// DELETE /api/v1/profile
///
/// Leaves the match view. The stored profile is kept for the next visit.
pub async fn handle_reset(State(state): State<AppState>) -> Json<SessionView> {
    let mut session = state.session.write().await;
    session.reset();
    Json(session.view())
}

/// GET /api/v1/matches
pub async fn handle_get_matches(State(state): State<AppState>) -> Json<MatchOutcome> {
    let session = state.session.read().await;
    Json(session.matches(&state.corpus, state.scorer.as_ref()))
}

/// GET /api/v1/matches/:id
pub async fn handle_get_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobDetail>, AppError> {
    let session = state.session.read().await;
    let matched = session
        .find_match(&state.corpus, state.scorer.as_ref(), &id)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} is not among your matches")))?;

    Ok(Json(JobDetail::new(matched, Utc::now().date_naive())))
}

/// PUT /api/v1/preferences/theme
pub async fn handle_set_theme(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ThemeRequest>,
) -> Result<Json<SessionView>, AppError> {
    if request.theme.trim().is_empty() {
        return Err(AppError::Validation("theme cannot be empty".to_string()));
    }

    let mut session = state.session.write().await;
    state.store.save_theme(&request.theme)?;
    session.set_theme(request.theme);
    Ok(Json(session.view()))
}
