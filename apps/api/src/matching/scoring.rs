//! Relevance scoring: a trait-based scorer that measures user skills
//! against a job's required skills.
//!
//! Two backends:
//! - `ExactMatchScorer`: share of required skills the user lists verbatim (case-insensitive).
//! - `SimilarityScorer`: average best string similarity per required skill.
//!
//! `AppState` holds an `Arc<dyn RelevanceScorer>`, chosen at startup via `SCORING_POLICY`.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matching::similarity::string_similarity;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Maps (user skills, required skills) to an integer score in `0..=100`.
///
/// Implementations must return 0 when either list is empty.
pub trait RelevanceScorer: Send + Sync {
    fn score(&self, user_skills: &[String], required_skills: &[String]) -> u8;

    /// Short label reported alongside results.
    fn backend(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    #[default]
    Exact,
    Similarity,
}

#[derive(Debug, Error)]
#[error("unknown scoring policy '{0}'")]
pub struct UnknownPolicy(String);

impl FromStr for ScoringPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(ScoringPolicy::Exact),
            "similarity" => Ok(ScoringPolicy::Similarity),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringPolicy::Exact => write!(f, "exact"),
            ScoringPolicy::Similarity => write!(f, "similarity"),
        }
    }
}

pub fn build_scorer(policy: ScoringPolicy) -> Arc<dyn RelevanceScorer> {
    match policy {
        ScoringPolicy::Exact => Arc::new(ExactMatchScorer),
        ScoringPolicy::Similarity => Arc::new(SimilarityScorer),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ExactMatchScorer (default)
// ────────────────────────────────────────────────────────────────────────────

/// score = round(100 × matched / required), matching case-insensitively.
pub struct ExactMatchScorer;

impl RelevanceScorer for ExactMatchScorer {
    fn score(&self, user_skills: &[String], required_skills: &[String]) -> u8 {
        if user_skills.is_empty() || required_skills.is_empty() {
            return 0;
        }

        let known: HashSet<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();
        let matched = required_skills
            .iter()
            .filter(|skill| known.contains(&skill.to_lowercase()))
            .count();

        to_percent(matched as f64 / required_skills.len() as f64)
    }

    fn backend(&self) -> &'static str {
        "exact"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// SimilarityScorer
// ────────────────────────────────────────────────────────────────────────────

/// For each required skill take the best similarity against any user skill,
/// then average over the required skills.
pub struct SimilarityScorer;

impl RelevanceScorer for SimilarityScorer {
    fn score(&self, user_skills: &[String], required_skills: &[String]) -> u8 {
        if user_skills.is_empty() || required_skills.is_empty() {
            return 0;
        }

        let total: f64 = required_skills
            .iter()
            .map(|required| {
                user_skills
                    .iter()
                    .map(|user| string_similarity(required, user))
                    .fold(0.0_f64, f64::max)
            })
            .sum();

        to_percent(total / required_skills.len() as f64)
    }

    fn backend(&self) -> &'static str {
        "similarity"
    }
}

fn to_percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
