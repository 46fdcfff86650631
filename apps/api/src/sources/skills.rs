//! Skill autocomplete: O*NET keyword search with a local reference list as fallback.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::warn;

use crate::models::skill::SkillSuggestion;
use crate::sources::http::{get_text, url_with_params};
use crate::sources::{SkillSuggestionSource, SourceError};

/// Maximum suggestions returned from either path.
pub const MAX_SUGGESTIONS: usize = 5;

const LOCAL_SKILLS: &[(&str, &str)] = &[
    ("React", "Frontend"),
    ("TypeScript", "Programming Language"),
    ("Node.js", "Backend"),
    ("JavaScript", "Programming Language"),
    ("HTML/CSS", "Frontend"),
    ("Python", "Programming Language"),
    ("Java", "Programming Language"),
    ("C#", "Programming Language"),
    ("SQL", "Database"),
    ("MongoDB", "Database"),
    ("GraphQL", "API"),
    ("REST API", "API"),
    ("Docker", "DevOps"),
    ("Kubernetes", "DevOps"),
    ("AWS", "Cloud"),
    ("Azure", "Cloud"),
    ("Google Cloud", "Cloud"),
    ("Git", "Version Control"),
    ("Agile", "Methodology"),
    ("Scrum", "Methodology"),
    ("UI/UX Design", "Design"),
    ("Figma", "Design Tool"),
    ("Adobe XD", "Design Tool"),
    ("Product Management", "Management"),
    ("Project Management", "Management"),
];

#[derive(Debug, Deserialize)]
struct OnetResponse {
    occupation: Option<Vec<Occupation>>,
}

#[derive(Debug, Deserialize)]
struct Occupation {
    title: String,
    code: Option<String>,
}

pub struct OnetSkillSearch {
    client: Client,
    base_url: String,
}

impl OnetSkillSearch {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl SkillSuggestionSource for OnetSkillSearch {
    async fn suggest(&self, keyword: &str) -> Result<Vec<SkillSuggestion>, SourceError> {
        let url = suggest_request_url(&self.base_url, keyword)?;
        let body = get_text(&self.client, url).await?;
        parse_onet_response(&body)
    }
}

pub fn suggest_request_url(base_url: &str, keyword: &str) -> Result<Url, SourceError> {
    url_with_params(base_url, [("keyword", keyword)])
}

/// Takes the first five occupations. A body without an `occupation` array is invalid.
pub fn parse_onet_response(body: &str) -> Result<Vec<SkillSuggestion>, SourceError> {
    let response: OnetResponse = serde_json::from_str(body)?;
    let occupations = response
        .occupation
        .ok_or_else(|| SourceError::Parse("response has no occupation array".to_string()))?;

    Ok(occupations
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .enumerate()
        .map(|(i, occ)| SkillSuggestion {
            id: format!("onet-{i}"),
            name: occ.title,
            category: occ.code,
        })
        .collect())
}

/// Case-insensitive substring match over the built-in reference list.
pub fn local_suggestions(query: &str) -> Vec<SkillSuggestion> {
    let query = query.trim().to_lowercase();
    LOCAL_SKILLS
        .iter()
        .enumerate()
        .filter(|(_, (name, _))| name.to_lowercase().contains(&query))
        .take(MAX_SUGGESTIONS)
        .map(|(i, (name, category))| SkillSuggestion::new((i + 1).to_string(), *name, Some(*category)))
        .collect()
}

/// Asks the remote source first; any failure falls back to the local list.
/// A blank query yields nothing.
pub async fn suggest_skills(
    source: &dyn SkillSuggestionSource,
    query: &str,
) -> Vec<SkillSuggestion> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let normalized = query.to_lowercase();
    match source.suggest(&normalized).await {
        Ok(suggestions) => suggestions,
        Err(e) => {
            warn!("Skill search failed, using local suggestions: {e}");
            local_suggestions(&normalized)
        }
    }
}
