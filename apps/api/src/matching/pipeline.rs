//! Filter & rank: scores every corpus job against a skill set, applies the
//! location rule, and orders the survivors by descending relevance.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::corpus::JobCorpus;
use crate::matching::scoring::RelevanceScorer;
use crate::models::job::{JobListing, MatchedJob};

/// Inputs for one ranking pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchQuery {
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Carried for callers; not a filter criterion.
    #[serde(default)]
    pub experience: Option<u32>,
}

impl MatchQuery {
    fn location_filter(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    fn without_location(&self) -> Self {
        Self {
            location: None,
            ..self.clone()
        }
    }
}

/// Ranked matches plus whether they had to come from outside the requested location.
#[derive(Debug, Clone, Serialize)]
pub struct MatchOutcome {
    pub jobs: Vec<MatchedJob>,
    pub location_unavailable: bool,
    pub scorer_backend: String,
}

/// True when no filter is given, the location contains it, or the job is
/// remote and the filter asks for remote work.
pub fn location_matches(job: &JobListing, filter: Option<&str>) -> bool {
    let Some(filter) = filter.map(str::trim).filter(|f| !f.is_empty()) else {
        return true;
    };
    let filter = filter.to_lowercase();

    job.location.to_lowercase().contains(&filter) || (job.is_remote && filter.contains("remote"))
}

/// Scores, filters, and sorts the corpus. Jobs scoring 0 are dropped.
/// Equal scores keep corpus order.
pub fn filter_and_rank(
    corpus: &JobCorpus,
    scorer: &dyn RelevanceScorer,
    query: &MatchQuery,
) -> Vec<MatchedJob> {
    if query.skills.is_empty() {
        return Vec::new();
    }

    let location = query.location_filter();

    let mut matched: Vec<MatchedJob> = corpus
        .jobs()
        .iter()
        .filter(|job| location_matches(job, location))
        .filter_map(|job| {
            let score = scorer.score(&query.skills, &job.required_skills);
            (score > 0).then(|| MatchedJob::new(job.clone(), score))
        })
        .collect();

    // sort_by is stable
    matched.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    matched
}

/// Runs the location-scoped query; if it finds nothing but the unscoped query
/// does, returns the unscoped results flagged `location_unavailable`.
pub fn match_with_location_fallback(
    corpus: &JobCorpus,
    scorer: &dyn RelevanceScorer,
    query: &MatchQuery,
) -> MatchOutcome {
    let scoped = filter_and_rank(corpus, scorer, query);

    let (jobs, location_unavailable) = match query.location_filter() {
        Some(location) if scoped.is_empty() => {
            let unscoped = filter_and_rank(corpus, scorer, &query.without_location());
            if unscoped.is_empty() {
                (scoped, false)
            } else {
                debug!(
                    "No matches in '{location}', returning {} from other locations",
                    unscoped.len()
                );
                (unscoped, true)
            }
        }
        _ => (scoped, false),
    };

    MatchOutcome {
        jobs,
        location_unavailable,
        scorer_backend: scorer.backend().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scoring::{ExactMatchScorer, SimilarityScorer};
    use crate::models::job::TOP_MATCH_THRESHOLD;

    fn query(skills: &[&str], location: Option<&str>) -> MatchQuery {
        MatchQuery {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            location: location.map(str::to_string),
            experience: None,
        }
    }

    fn ids(jobs: &[MatchedJob]) -> Vec<&str> {
        jobs.iter().map(|j| j.job.id.as_str()).collect()
    }

    #[test]
    fn test_empty_skills_returns_nothing() {
        let corpus = JobCorpus::default();
        assert!(filter_and_rank(&corpus, &ExactMatchScorer, &query(&[], None)).is_empty());
        assert!(filter_and_rank(&corpus, &SimilarityScorer, &query(&[], Some("Remote"))).is_empty());
    }

    #[test]
    fn test_full_frontend_profile_tops_job_one() {
        let corpus = JobCorpus::default();
        let q = query(&["React", "TypeScript", "JavaScript", "HTML/CSS", "REST API"], None);
        let jobs = filter_and_rank(&corpus, &ExactMatchScorer, &q);

        assert_eq!(jobs[0].job.id, "1");
        assert_eq!(jobs[0].relevance_score, 100);
        assert!(jobs[0].is_top_match);
    }

    #[test]
    fn test_zero_score_jobs_are_excluded() {
        let corpus = JobCorpus::default();
        let jobs = filter_and_rank(&corpus, &ExactMatchScorer, &query(&["Python"], None));
        assert!(!ids(&jobs).contains(&"1"));
        assert_eq!(ids(&jobs), vec!["7", "8"]);
    }

    #[test]
    fn test_remote_filter_keeps_only_remote_matches() {
        let corpus = JobCorpus::default();
        let jobs = filter_and_rank(
            &corpus,
            &ExactMatchScorer,
            &query(&["Node.js", "MongoDB"], Some("Remote")),
        );

        assert_eq!(ids(&jobs), vec!["3"]);
        assert!(jobs.iter().all(|j| j.job.is_remote));
        assert_eq!(jobs[0].relevance_score, 40);
    }

    #[test]
    fn test_results_sorted_descending_with_corpus_tie_break() {
        let corpus = JobCorpus::default();
        let jobs = filter_and_rank(
            &corpus,
            &ExactMatchScorer,
            &query(&["React", "JavaScript", "Node.js"], None),
        );

        // job 2: 3/5, jobs 1 and 3: 2/5 each, in corpus order
        assert_eq!(ids(&jobs), vec!["2", "1", "3"]);
        assert!(jobs.windows(2).all(|w| w[0].relevance_score >= w[1].relevance_score));
    }

    #[test]
    fn test_location_substring_is_case_insensitive() {
        let corpus = JobCorpus::default();
        let jobs = filter_and_rank(&corpus, &ExactMatchScorer, &query(&["JavaScript"], Some("new york")));
        assert_eq!(ids(&jobs), vec!["2"]);
    }

    #[test]
    fn test_location_rule() {
        let corpus = JobCorpus::default();
        let remote_job = corpus.get("1").unwrap();
        let onsite_job = corpus.get("2").unwrap();

        assert!(location_matches(remote_job, None));
        assert!(location_matches(remote_job, Some("  ")));
        assert!(location_matches(remote_job, Some("San Francisco")));
        assert!(location_matches(remote_job, Some("remote only")));
        assert!(!location_matches(remote_job, Some("Boston")));
        assert!(!location_matches(onsite_job, Some("Remote")));
    }

    #[test]
    fn test_top_match_flag_matches_threshold_for_every_result() {
        let corpus = JobCorpus::default();
        let q = query(&["React", "TypeScript", "JavaScript", "Node.js", "Python", "SQL"], None);
        for scorer in [&ExactMatchScorer as &dyn RelevanceScorer, &SimilarityScorer] {
            for job in filter_and_rank(&corpus, scorer, &q) {
                assert!(job.relevance_score <= 100);
                assert_eq!(job.is_top_match, job.relevance_score >= TOP_MATCH_THRESHOLD);
            }
        }
    }

    #[test]
    fn test_experience_does_not_filter() {
        let corpus = JobCorpus::default();
        let mut q = query(&["Python"], None);
        let without = filter_and_rank(&corpus, &ExactMatchScorer, &q);
        q.experience = Some(0);
        let with = filter_and_rank(&corpus, &ExactMatchScorer, &q);
        assert_eq!(ids(&without), ids(&with));
    }

    #[test]
    fn test_fallback_when_location_has_no_matches() {
        let corpus = JobCorpus::default();
        let outcome =
            match_with_location_fallback(&corpus, &ExactMatchScorer, &query(&["Python"], Some("Boston")));

        assert!(outcome.location_unavailable);
        assert_eq!(ids(&outcome.jobs), vec!["7", "8"]);
        assert_eq!(outcome.scorer_backend, "exact");
    }

    #[test]
    fn test_no_fallback_when_location_has_matches() {
        let corpus = JobCorpus::default();
        let outcome =
            match_with_location_fallback(&corpus, &ExactMatchScorer, &query(&["Python"], Some("Denver")));

        assert!(!outcome.location_unavailable);
        assert_eq!(ids(&outcome.jobs), vec!["8"]);
    }

    #[test]
    fn test_no_fallback_flag_when_nothing_matches_anywhere() {
        let corpus = JobCorpus::default();
        let outcome =
            match_with_location_fallback(&corpus, &ExactMatchScorer, &query(&["Cobol"], Some("Boston")));

        assert!(!outcome.location_unavailable);
        assert!(outcome.jobs.is_empty());
    }

    #[test]
    fn test_no_fallback_without_location() {
        let corpus = JobCorpus::default();
        let outcome = match_with_location_fallback(&corpus, &ExactMatchScorer, &query(&["Cobol"], None));
        assert!(!outcome.location_unavailable);
        assert!(outcome.jobs.is_empty());
    }
}
