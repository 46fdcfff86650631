use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Score at or above which a job is flagged as a top match.
pub const TOP_MATCH_THRESHOLD: u8 = 80;
/// Lower bound of the "good" tier used for listing colour-coding.
pub const GOOD_MATCH_THRESHOLD: u8 = 60;

/// A job record from the static corpus. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub salary: Option<String>,
    pub posted_date: NaiveDate,
    pub is_remote: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Top,
    Good,
    Fair,
}

impl MatchTier {
    pub fn for_score(score: u8) -> Self {
        if score >= TOP_MATCH_THRESHOLD {
            MatchTier::Top
        } else if score >= GOOD_MATCH_THRESHOLD {
            MatchTier::Good
        } else {
            MatchTier::Fair
        }
    }
}

/// A corpus job annotated with the relevance fields derived for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedJob {
    #[serde(flatten)]
    pub job: JobListing,
    pub relevance_score: u8,
    pub is_top_match: bool,
    pub match_tier: MatchTier,
}

impl MatchedJob {
    /// Attaches a score; the top-match flag and tier are always derived from it.
    pub fn new(job: JobListing, relevance_score: u8) -> Self {
        let relevance_score = relevance_score.min(100);
        Self {
            job,
            relevance_score,
            is_top_match: relevance_score >= TOP_MATCH_THRESHOLD,
            match_tier: MatchTier::for_score(relevance_score),
        }
    }
}

/// Detail view of a matched job, with human-readable posting dates.
#[derive(Debug, Clone, Serialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub matched: MatchedJob,
    pub posted_display: String,
    pub posted_ago: String,
}

impl JobDetail {
    pub fn new(matched: MatchedJob, today: NaiveDate) -> Self {
        let posted = matched.job.posted_date;
        Self {
            posted_display: format_posted_date(posted),
            posted_ago: time_since_posted(posted, today),
            matched,
        }
    }
}

/// "August 15, 2023"
pub fn format_posted_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Relative posting age. Partial days round up, so a same-day posting reads
/// "1 day ago". Months are counted as 30-day blocks.
pub fn time_since_posted(posted: NaiveDate, today: NaiveDate) -> String {
    let days = (today - posted).num_days().unsigned_abs().max(1);

    if days == 1 {
        return "1 day ago".to_string();
    }
    if days < 30 {
        return format!("{days} days ago");
    }

    match days / 30 {
        1 => "1 month ago".to_string(),
        months => format!("{months} months ago"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn listing() -> JobListing {
        JobListing {
            id: "1".to_string(),
            title: "Senior Frontend Developer".to_string(),
            company: "TechCorp".to_string(),
            location: "San Francisco, CA".to_string(),
            description: "React work".to_string(),
            required_skills: vec!["React".to_string()],
            salary: None,
            posted_date: date(2023, 8, 15),
            is_remote: true,
        }
    }

    #[test]
    fn test_top_match_follows_threshold() {
        assert!(MatchedJob::new(listing(), 80).is_top_match);
        assert!(!MatchedJob::new(listing(), 79).is_top_match);
    }

    #[test]
    fn test_score_is_clamped_to_100() {
        let matched = MatchedJob::new(listing(), 140);
        assert_eq!(matched.relevance_score, 100);
        assert_eq!(matched.match_tier, MatchTier::Top);
    }

    #[test]
    fn test_match_tiers() {
        assert_eq!(MatchTier::for_score(100), MatchTier::Top);
        assert_eq!(MatchTier::for_score(60), MatchTier::Good);
        assert_eq!(MatchTier::for_score(59), MatchTier::Fair);
        assert_eq!(MatchTier::for_score(0), MatchTier::Fair);
    }

    #[test]
    fn test_matched_job_serializes_flat() {
        let value = serde_json::to_value(MatchedJob::new(listing(), 100)).unwrap();
        assert_eq!(value["title"], "Senior Frontend Developer");
        assert_eq!(value["relevance_score"], 100);
        assert_eq!(value["is_top_match"], true);
        assert_eq!(value["match_tier"], "top");
        assert_eq!(value["posted_date"], "2023-08-15");
    }

    #[test]
    fn test_format_posted_date() {
        assert_eq!(format_posted_date(date(2023, 8, 5)), "August 5, 2023");
    }

    #[test]
    fn test_time_since_posted_days() {
        let posted = date(2023, 8, 15);
        assert_eq!(time_since_posted(posted, date(2023, 8, 16)), "1 day ago");
        assert_eq!(time_since_posted(posted, date(2023, 8, 25)), "10 days ago");
    }

    #[test]
    fn test_time_since_posted_same_day_rounds_up() {
        let posted = date(2023, 8, 15);
        assert_eq!(time_since_posted(posted, posted), "1 day ago");
    }

    #[test]
    fn test_time_since_posted_months() {
        let posted = date(2023, 8, 15);
        assert_eq!(time_since_posted(posted, date(2023, 9, 20)), "1 month ago");
        assert_eq!(time_since_posted(posted, date(2024, 8, 15)), "12 months ago");
    }

    #[test]
    fn test_job_detail_carries_display_dates() {
        let detail = JobDetail::new(MatchedJob::new(listing(), 90), date(2023, 8, 17));
        assert_eq!(detail.posted_display, "August 15, 2023");
        assert_eq!(detail.posted_ago, "2 days ago");
    }
}
