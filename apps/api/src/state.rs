use std::sync::Arc;

use tokio::sync::RwLock;

use crate::matching::corpus::JobCorpus;
use crate::matching::scoring::RelevanceScorer;
use crate::session::SessionState;
use crate::sources::{JobFeedSource, JobSearchSource, SkillSuggestionSource};
use crate::storage::LocalStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub corpus: Arc<JobCorpus>,
    /// Pluggable relevance scorer. Default: ExactMatchScorer. Swap via SCORING_POLICY.
    pub scorer: Arc<dyn RelevanceScorer>,
    pub job_search: Arc<dyn JobSearchSource>,
    pub job_feed: Arc<dyn JobFeedSource>,
    pub skill_search: Arc<dyn SkillSuggestionSource>,
    pub store: LocalStore,
    pub session: Arc<RwLock<SessionState>>,
}
