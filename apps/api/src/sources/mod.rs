//! External data sources: a job-search API, a job RSS feed, and a skill
//! suggestion API.
//!
//! Each source sits behind an async trait so the matching core and handlers
//! can be exercised with in-process stubs. Callers never surface a
//! `SourceError` to users: they log it and fall back to local data.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::skill::SkillSuggestion;

pub mod handlers;
pub mod http;
pub mod job_search;
pub mod live;
pub mod rss;
pub mod skills;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Parse(e.to_string())
    }
}

/// Skill/location query shared by the job-search API and the RSS feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobSearchQuery {
    pub skills: Vec<String>,
    pub location: Option<String>,
}

impl JobSearchQuery {
    /// Parses the comma-separated form used in query strings.
    pub fn from_params(skills: &str, location: Option<&str>) -> Self {
        Self {
            skills: skills
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            location: location
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
        }
    }
}

/// A job record returned by the remote job-search API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub snippet: String,
    /// Relative posting time as the upstream formats it, e.g. "3 days ago".
    pub posted: String,
    pub url: Option<String>,
}

/// A job item parsed from the RSS feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub link: String,
    pub description: String,
    pub pub_date: String,
    pub skills_mentioned: Vec<String>,
}

#[async_trait]
pub trait JobSearchSource: Send + Sync {
    async fn search(&self, query: &JobSearchQuery) -> Result<Vec<ExternalJob>, SourceError>;
}

#[async_trait]
pub trait JobFeedSource: Send + Sync {
    async fn fetch(&self, query: &JobSearchQuery) -> Result<Vec<FeedJob>, SourceError>;
}

#[async_trait]
pub trait SkillSuggestionSource: Send + Sync {
    async fn suggest(&self, keyword: &str) -> Result<Vec<SkillSuggestion>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_from_params_splits_and_trims() {
        let q = JobSearchQuery::from_params(" React, Node.js ,,", Some("  "));
        assert_eq!(q.skills, vec!["React", "Node.js"]);
        assert_eq!(q.location, None);
    }

    #[test]
    fn test_query_from_params_keeps_location() {
        let q = JobSearchQuery::from_params("Rust", Some(" Berlin "));
        assert_eq!(q.location.as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_serde_error_becomes_parse_error() {
        let err: SourceError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, SourceError::Parse(_)));
    }
}
