//! Live search: the remote job-search API first, the local corpus pipeline
//! when it fails or finds nothing.

use serde::Serialize;
use tracing::{info, warn};

use crate::matching::corpus::JobCorpus;
use crate::matching::pipeline::{match_with_location_fallback, MatchOutcome, MatchQuery};
use crate::matching::scoring::RelevanceScorer;
use crate::sources::{ExternalJob, JobSearchQuery, JobSearchSource};

#[derive(Debug, Serialize)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum LiveSearchOutcome {
    Remote {
        jobs: Vec<ExternalJob>,
    },
    Local {
        #[serde(flatten)]
        outcome: MatchOutcome,
        notice: String,
    },
}

pub async fn live_search(
    source: &dyn JobSearchSource,
    corpus: &JobCorpus,
    scorer: &dyn RelevanceScorer,
    query: &JobSearchQuery,
) -> LiveSearchOutcome {
    let notice = match source.search(query).await {
        Ok(jobs) if !jobs.is_empty() => {
            info!("Live search found {} remote jobs", jobs.len());
            return LiveSearchOutcome::Remote { jobs };
        }
        Ok(_) => "No live listings found; showing matches from the local job list".to_string(),
        Err(e) => {
            warn!("Live job search failed, falling back to local corpus: {e}");
            "Live search is unavailable; showing matches from the local job list".to_string()
        }
    };

    let local_query = MatchQuery {
        skills: query.skills.clone(),
        location: query.location.clone(),
        experience: None,
    };

    LiveSearchOutcome::Local {
        outcome: match_with_location_fallback(corpus, scorer, &local_query),
        notice,
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::matching::scoring::ExactMatchScorer;
    use crate::sources::SourceError;

    struct StubSearch(Result<Vec<ExternalJob>, ()>);

    #[async_trait]
    impl JobSearchSource for StubSearch {
        async fn search(&self, _query: &JobSearchQuery) -> Result<Vec<ExternalJob>, SourceError> {
            self.0
                .clone()
                .map_err(|_| SourceError::Parse("unexpected body".to_string()))
        }
    }

    fn remote_job() -> ExternalJob {
        ExternalJob {
            title: "Rust Engineer".to_string(),
            company: "Ferrous".to_string(),
            location: "Remote".to_string(),
            snippet: String::new(),
            posted: "today".to_string(),
            url: None,
        }
    }

    fn python_query() -> JobSearchQuery {
        JobSearchQuery::from_params("Python", None)
    }

    #[tokio::test]
    async fn test_remote_results_are_returned() {
        let corpus = JobCorpus::default();
        let source = StubSearch(Ok(vec![remote_job()]));

        match live_search(&source, &corpus, &ExactMatchScorer, &python_query()).await {
            LiveSearchOutcome::Remote { jobs } => assert_eq!(jobs[0].title, "Rust Engineer"),
            other => panic!("expected remote results, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_falls_back_to_local() {
        let corpus = JobCorpus::default();
        let source = StubSearch(Err(()));

        match live_search(&source, &corpus, &ExactMatchScorer, &python_query()).await {
            LiveSearchOutcome::Local { outcome, notice } => {
                let ids: Vec<&str> = outcome.jobs.iter().map(|j| j.job.id.as_str()).collect();
                assert_eq!(ids, vec!["7", "8"]);
                assert!(notice.contains("unavailable"));
            }
            other => panic!("expected local fallback, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_remote_falls_back_to_local() {
        let corpus = JobCorpus::default();
        let source = StubSearch(Ok(vec![]));

        let outcome = live_search(&source, &corpus, &ExactMatchScorer, &python_query()).await;
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["origin"], "local");
        assert_eq!(value["jobs"].as_array().unwrap().len(), 2);
        assert_eq!(value["location_unavailable"], false);
    }
}
