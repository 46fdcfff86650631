//! Remote job-search API adapter.
//!
//! GET `{base}?q=<skill OR skill ...>&l=<location>` answering
//! `{"results": [{jobtitle, company, formattedLocation, snippet, formattedRelativeTime, url}]}`.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::info;

use crate::sources::http::{get_text, url_with_params};
use crate::sources::{ExternalJob, JobSearchQuery, JobSearchSource, SourceError};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Option<Vec<SearchResult>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchResult {
    #[serde(alias = "jobtitle")]
    title: Option<String>,
    company: Option<String>,
    #[serde(rename = "formattedLocation")]
    formatted_location: Option<String>,
    snippet: Option<String>,
    #[serde(rename = "formattedRelativeTime")]
    formatted_relative_time: Option<String>,
    url: Option<String>,
}

impl From<SearchResult> for ExternalJob {
    fn from(r: SearchResult) -> Self {
        ExternalJob {
            title: r.title.unwrap_or_default(),
            company: r.company.unwrap_or_default(),
            location: r.formatted_location.unwrap_or_default(),
            snippet: r.snippet.unwrap_or_default(),
            posted: r.formatted_relative_time.unwrap_or_default(),
            url: r.url,
        }
    }
}

pub struct HttpJobSearch {
    client: Client,
    base_url: String,
}

impl HttpJobSearch {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl JobSearchSource for HttpJobSearch {
    async fn search(&self, query: &JobSearchQuery) -> Result<Vec<ExternalJob>, SourceError> {
        let url = search_request_url(&self.base_url, query)?;
        let body = get_text(&self.client, url).await?;
        let jobs = parse_search_response(&body)?;

        info!(
            "Job search returned {} results for '{}'",
            jobs.len(),
            skills_query(&query.skills)
        );
        Ok(jobs)
    }
}

/// `{base}?q=<skills OR-joined>`, plus `&l=<location>` when one is given.
pub fn search_request_url(base_url: &str, query: &JobSearchQuery) -> Result<Url, SourceError> {
    let skills = skills_query(&query.skills);
    let mut params = vec![("q", skills.as_str())];
    if let Some(location) = query.location.as_deref() {
        params.push(("l", location));
    }
    url_with_params(base_url, params)
}

/// Skills OR-joined, the way the upstream expects a disjunctive query.
pub fn skills_query(skills: &[String]) -> String {
    skills.join(" OR ")
}

/// A body without a `results` array is an empty result, not an error.
pub fn parse_search_response(body: &str) -> Result<Vec<ExternalJob>, SourceError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response
        .results
        .unwrap_or_default()
        .into_iter()
        .map(ExternalJob::from)
        .collect())
}
