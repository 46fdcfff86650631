//! Axum route handlers for skill suggestions and external job searches.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::models::skill::SkillSuggestion;
use crate::sources::live::{live_search, LiveSearchOutcome};
use crate::sources::skills::suggest_skills;
use crate::sources::{FeedJob, JobSearchQuery};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub skills: String,
    pub location: Option<String>,
}

impl SearchParams {
    fn into_query(self) -> Result<JobSearchQuery, AppError> {
        let query = JobSearchQuery::from_params(&self.skills, self.location.as_deref());
        if query.skills.is_empty() {
            return Err(AppError::Validation(
                "Please enter at least one skill to search for jobs".to_string(),
            ));
        }
        Ok(query)
    }
}

#[derive(Debug, Serialize)]
pub struct FeedSearchResponse {
    pub jobs: Vec<FeedJob>,
    pub notice: String,
}

/// GET /api/v1/skills/suggest?q=
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Json<Vec<SkillSuggestion>> {
    Json(suggest_skills(state.skill_search.as_ref(), &params.q).await)
}

/// GET /api/v1/search/live?skills=&location=
pub async fn handle_live_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<LiveSearchOutcome>, AppError> {
    let query = params.into_query()?;
    let outcome = live_search(
        state.job_search.as_ref(),
        &state.corpus,
        state.scorer.as_ref(),
        &query,
    )
    .await;
    Ok(Json(outcome))
}

/// GET /api/v1/search/rss?skills=&location=
///
/// Feed failures are reported as a notice with no jobs, never as an error.
pub async fn handle_feed_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<FeedSearchResponse>, AppError> {
    let query = params.into_query()?;

    let response = match state.job_feed.fetch(&query).await {
        Ok(jobs) if jobs.is_empty() => FeedSearchResponse {
            jobs,
            notice: "No jobs found. Try different skills or location".to_string(),
        },
        Ok(jobs) => FeedSearchResponse {
            notice: format!("Found {} job listings", jobs.len()),
            jobs,
        },
        Err(e) => {
            warn!("Job feed search failed: {e}");
            FeedSearchResponse {
                jobs: Vec::new(),
                notice: "There was an error fetching jobs from the feed. Please try again later."
                    .to_string(),
            }
        }
    };

    Ok(Json(response))
}
