//! Per-process session: the submitted profile, whether the match view is
//! active, and the stored theme preference. Owned by `AppState` behind a lock;
//! every mutation replaces fields under one write guard.

use serde::Serialize;

use crate::matching::corpus::JobCorpus;
use crate::matching::pipeline::{match_with_location_fallback, MatchOutcome, MatchQuery};
use crate::matching::scoring::RelevanceScorer;
use crate::models::job::MatchedJob;
use crate::models::profile::UserProfile;

pub mod handlers;

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    profile: Option<UserProfile>,
    has_submitted: bool,
    theme: Option<String>,
}

/// Snapshot returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub profile: Option<UserProfile>,
    pub is_profile_complete: bool,
    pub has_submitted: bool,
    pub theme: Option<String>,
}

impl SessionState {
    /// Rebuilds a session from stored data. A restored profile is not
    /// considered submitted until the user submits again.
    pub fn restore(profile: Option<UserProfile>, theme: Option<String>) -> Self {
        Self {
            profile,
            has_submitted: false,
            theme,
        }
    }

    /// Replaces the profile wholesale and marks the form as submitted.
    pub fn submit(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
        self.has_submitted = true;
    }

    /// Leaves the match view; the profile itself is kept.
    pub fn reset(&mut self) {
        self.has_submitted = false;
    }

    pub fn set_theme(&mut self, theme: String) {
        self.theme = Some(theme);
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            profile: self.profile.clone(),
            is_profile_complete: self.profile.as_ref().is_some_and(UserProfile::is_complete),
            has_submitted: self.has_submitted,
            theme: self.theme.clone(),
        }
    }

    /// Ranked matches for the current profile; empty without one.
    pub fn matches(&self, corpus: &JobCorpus, scorer: &dyn RelevanceScorer) -> MatchOutcome {
        let Some(profile) = &self.profile else {
            return MatchOutcome {
                jobs: Vec::new(),
                location_unavailable: false,
                scorer_backend: scorer.backend().to_string(),
            };
        };

        let query = MatchQuery {
            skills: profile.skills.clone(),
            location: profile.location_filter().map(str::to_string),
            experience: Some(profile.years_of_experience),
        };
        match_with_location_fallback(corpus, scorer, &query)
    }

    /// Looks a job up among the current matches only.
    pub fn find_match(
        &self,
        corpus: &JobCorpus,
        scorer: &dyn RelevanceScorer,
        id: &str,
    ) -> Option<MatchedJob> {
        self.matches(corpus, scorer)
            .jobs
            .into_iter()
            .find(|job| job.job.id == id)
    }
}
