//! Job RSS feed adapter, fetched through a CORS proxy that wraps the feed
//! XML in `{"contents": "..."}`.

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::{Client, Url};
use scraper::{ElementRef, Html, Selector};
use serde::Deserialize;
use tracing::info;

use crate::sources::http::{get_text, url_with_params};
use crate::sources::{FeedJob, JobFeedSource, JobSearchQuery, SourceError};

/// Skills looked for in feed descriptions.
const COMMON_SKILLS: &[&str] = &[
    "React", "JavaScript", "TypeScript", "Node.js", "HTML", "CSS", "Python", "Java", "C#", "PHP",
    "Ruby", "Swift", "Kotlin", "Vue", "Angular", "AWS", "Docker", "Kubernetes", "Git", "SQL",
    "NoSQL", "MongoDB", "Firebase", "GraphQL", "REST",
];

#[derive(Debug, Deserialize)]
struct ProxyResponse {
    contents: Option<String>,
}

pub struct RssJobFeed {
    client: Client,
    feed_url: String,
    proxy_url: String,
}

impl RssJobFeed {
    pub fn new(client: Client, feed_url: String, proxy_url: String) -> Self {
        Self {
            client,
            feed_url,
            proxy_url,
        }
    }
}

#[async_trait]
impl JobFeedSource for RssJobFeed {
    async fn fetch(&self, query: &JobSearchQuery) -> Result<Vec<FeedJob>, SourceError> {
        let url = feed_request_url(&self.feed_url, &self.proxy_url, query)?;

        let body = get_text(&self.client, url).await?;
        let xml = parse_proxy_body(&body)?;
        let jobs = parse_feed(&xml)?;

        info!("Feed returned {} items for '{}'", jobs.len(), query.skills.join(" "));
        Ok(jobs)
    }
}

/// `{proxy}?url=<feed?q=..&l=..>`. Spaces in skills and location encode as `+`
/// inside the feed URL, which is then encoded again as the proxy's parameter.
pub fn feed_request_url(
    feed_url: &str,
    proxy_url: &str,
    query: &JobSearchQuery,
) -> Result<Url, SourceError> {
    let skills = query.skills.join(" ");
    let location = query.location.as_deref().unwrap_or_default();

    let feed = url_with_params(feed_url, [("q", skills.as_str()), ("l", location)])?;
    url_with_params(proxy_url, [("url", feed.as_str())])
}

/// Unwraps the proxy envelope. A missing `contents` field is a parse error.
pub fn parse_proxy_body(body: &str) -> Result<String, SourceError> {
    let response: ProxyResponse = serde_json::from_str(body)?;
    response
        .contents
        .ok_or_else(|| SourceError::Parse("proxy response has no contents".to_string()))
}

/// Parses every `<item>` of an RSS document into a `FeedJob`.
///
/// Titles follow "Job Title - Company - Location"; missing parts stay empty.
pub fn parse_feed(xml: &str) -> Result<Vec<FeedJob>, SourceError> {
    // The HTML parser drops CDATA sections, so unwrap them first.
    let xml = xml.replace("<![CDATA[", "").replace("]]>", "");
    let document = Html::parse_document(&xml);

    let item_sel = selector("item")?;
    let title_sel = selector("title")?;
    let link_sel = selector("link")?;
    let guid_sel = selector("guid")?;
    let description_sel = selector("description")?;
    let pub_date_sel = selector("pubdate")?;

    let jobs = document
        .select(&item_sel)
        .map(|item| {
            let raw_title = child_text(item, &title_sel);
            let (title, company, location) = split_title(&raw_title);
            let description = child_text(item, &description_sel);

            let mut link = link_text(item, &link_sel);
            if link.is_empty() {
                link = child_text(item, &guid_sel);
            }

            FeedJob {
                title,
                company,
                location,
                link,
                skills_mentioned: extract_skills(&description),
                description,
                pub_date: format_pub_date(&child_text(item, &pub_date_sel)),
            }
        })
        .collect();

    Ok(jobs)
}

/// Splits "Title - Company - Location"; without separators the whole string is the title.
pub fn split_title(raw: &str) -> (String, String, String) {
    let parts: Vec<&str> = raw.split(" - ").collect();
    let title = match parts[0].trim() {
        "" => raw.trim(),
        first => first,
    };
    let company = parts.get(1).map(|s| s.trim()).unwrap_or_default();
    let location = parts.get(2).map(|s| s.trim()).unwrap_or_default();
    (title.to_string(), company.to_string(), location.to_string())
}

/// Common skills named in a description, in list order.
pub fn extract_skills(description: &str) -> Vec<String> {
    let description = description.to_lowercase();
    COMMON_SKILLS
        .iter()
        .filter(|skill| description.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect()
}

/// "Mon, 14 Aug 2023 10:00:00 GMT" → "August 14, 2023"; anything else is returned as-is.
pub fn format_pub_date(raw: &str) -> String {
    match DateTime::parse_from_rfc2822(raw.trim()) {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn selector(css: &str) -> Result<Selector, SourceError> {
    Selector::parse(css).map_err(|e| SourceError::Parse(format!("bad selector '{css}': {e}")))
}

fn child_text(item: ElementRef<'_>, sel: &Selector) -> String {
    item.select(sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// `<link>` is a void element to the HTML parser, so its URL lands in the
/// text node right after it.
fn link_text(item: ElementRef<'_>, sel: &Selector) -> String {
    let Some(link) = item.select(sel).next() else {
        return String::new();
    };

    let inner = link.text().collect::<String>();
    if !inner.trim().is_empty() {
        return inner.trim().to_string();
    }

    link.next_sibling()
        .and_then(|node| node.value().as_text().map(|t| t.trim().to_string()))
        .unwrap_or_default()
}
