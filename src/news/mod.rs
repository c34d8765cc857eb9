pub mod clean;
mod fallback;
pub mod parse;

use anyhow::Context;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

use crate::config::deserialize_option_u64;
use clean::{clean_entities, plain_text, truncate_chars, DESCRIPTION_LIMIT};
use parse::{parse_entries, RawEntry};

pub use fallback::fallback_candidates;

const FEED_ACCEPT: &str = "application/rss+xml, application/xml, text/xml";

pub const AI_KEYWORDS: [&str; 21] = [
    "ai",
    "artificial intelligence",
    "machine learning",
    "ml",
    "deep learning",
    "neural network",
    "chatgpt",
    "gpt",
    "openai",
    "gemini",
    "claude",
    "llm",
    "large language model",
    "generative ai",
    "automation",
    "robotics",
    "algorithm",
    "data science",
    "computer vision",
    "natural language processing",
    "nlp",
];

#[derive(Debug, thiserror::Error)]
pub enum NewsFeedError {
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),
    #[error("Feed request returned status {0}")]
    Status(u16),
    #[error("Malformed feed document: {0}")]
    Parse(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Deserialize, Debug, Clone)]
pub struct FeedConfig {
    #[serde(rename = "feed_url", default = "default_feed_url")]
    pub url: String,
    #[serde(
        rename = "feed_timeout_secs",
        default,
        deserialize_with = "deserialize_option_u64"
    )]
    pub timeout_secs: Option<u64>,
    #[serde(rename = "feed_user_agent")]
    pub user_agent: Option<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

fn default_feed_url() -> String {
    "https://rss-feed-aggrigator.onrender.com/rss".to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewsCandidate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub published_at: Option<String>,
}

impl NewsCandidate {
    /// Topic text used to seed a post from this news item.
    pub fn to_topic(&self) -> String {
        format!(
            "Based on the news titled \"{}\" (Source: {}):\n\n{}\n\nFocus on key insights or implications related to AI.",
            self.title, self.link, self.description
        )
    }

    pub fn is_ai_related(&self) -> bool {
        is_ai_related(&self.title) || is_ai_related(&self.description)
    }

    /// Builds a candidate plus its relevance, judged on the full description
    /// before it is cut down to [`DESCRIPTION_LIMIT`].
    fn from_entry(index: usize, entry: RawEntry) -> Option<(Self, bool)> {
        let title = clean_entities(&entry.title);
        let link = entry.link.trim().to_string();
        if title.is_empty() || link.is_empty() {
            return None;
        }

        let guid = entry.guid.trim();
        let id = if guid.is_empty() {
            format!("item-{}", index)
        } else {
            guid.to_string()
        };
        let pub_date = entry.pub_date.trim();
        let description = plain_text(&entry.description);
        let ai_related = is_ai_related(&title) || is_ai_related(&description);

        let candidate = Self {
            id,
            title,
            description: truncate_chars(&description, DESCRIPTION_LIMIT),
            link,
            published_at: (!pub_date.is_empty()).then(|| pub_date.to_string()),
        };
        Some((candidate, ai_related))
    }
}

/// How many candidates to keep and when to pad with non-AI entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    pub max_items: usize,
    /// Below this many AI entries, the list is padded.
    pub min_ai_items: usize,
    /// Total length to pad up to.
    pub pad_to: usize,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            max_items: 10,
            min_ai_items: 5,
            pad_to: 10,
        }
    }
}

/// Case-insensitive substring match against [`AI_KEYWORDS`].
pub fn is_ai_related(text: &str) -> bool {
    let lower = text.to_lowercase();
    AI_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Parses a feed document into candidates, in source order, without
/// filtering by topic.
pub fn parse_feed(xml: &str) -> Result<Vec<NewsCandidate>, NewsFeedError> {
    Ok(parse_flagged(xml)?
        .into_iter()
        .map(|(candidate, _)| candidate)
        .collect())
}

fn parse_flagged(xml: &str) -> Result<Vec<(NewsCandidate, bool)>, NewsFeedError> {
    let entries = parse_entries(xml)?;
    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| NewsCandidate::from_entry(index, entry))
        .collect())
}

pub fn select_candidates(
    candidates: Vec<NewsCandidate>,
    policy: &SelectionPolicy,
) -> Vec<NewsCandidate> {
    let flagged = candidates
        .into_iter()
        .map(|c| {
            let ai_related = c.is_ai_related();
            (c, ai_related)
        })
        .collect();
    select_flagged(flagged, policy)
}

fn select_flagged(
    candidates: Vec<(NewsCandidate, bool)>,
    policy: &SelectionPolicy,
) -> Vec<NewsCandidate> {
    let mut selected: Vec<NewsCandidate> = candidates
        .iter()
        .filter(|(_, ai_related)| *ai_related)
        .take(policy.max_items)
        .map(|(c, _)| c.clone())
        .collect();

    if selected.len() < policy.min_ai_items {
        let taken: HashSet<String> = selected.iter().map(|c| c.id.clone()).collect();
        let room = policy.pad_to.saturating_sub(selected.len());
        let padding: Vec<NewsCandidate> = candidates
            .into_iter()
            .map(|(c, _)| c)
            .filter(|c| !taken.contains(&c.id))
            .take(room)
            .collect();
        selected.extend(padding);
    }

    selected
}

/// Turns a feed document into the candidate list. Never fails: a document
/// that cannot be parsed yields [`fallback_candidates`].
pub fn normalize(xml: &str) -> Vec<NewsCandidate> {
    normalize_with(xml, &SelectionPolicy::default())
}

pub fn normalize_with(xml: &str, policy: &SelectionPolicy) -> Vec<NewsCandidate> {
    match parse_flagged(xml) {
        Ok(candidates) => select_flagged(candidates, policy),
        Err(err) => {
            log::warn!("news feed unusable, showing fallback topics: {}", err);
            fallback_candidates()
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewsFeed {
    url: Url,
    policy: SelectionPolicy,
    client: Client,
}

impl NewsFeed {
    pub fn new(config: FeedConfig) -> Result<Self, NewsFeedError> {
        let url = Url::parse(&config.url).map_err(|_| NewsFeedError::InvalidUrl(config.url))?;
        let user_agent = config
            .user_agent
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "postcraft/0.1".to_string());

        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .context("Failed to build feed HTTP client")?;

        Ok(Self {
            url,
            policy: SelectionPolicy::default(),
            client,
        })
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Fetches and normalizes the feed. Transport and parse failures are
    /// absorbed into [`fallback_candidates`].
    pub async fn fetch(&self) -> Vec<NewsCandidate> {
        match self.fetch_document().await {
            Ok(body) => normalize_with(&body, &self.policy),
            Err(err) => {
                log::warn!("news feed unavailable, showing fallback topics: {}", err);
                fallback_candidates()
            }
        }
    }

    pub async fn fetch_document(&self) -> Result<String, NewsFeedError> {
        log::info!("fetching news feed {}...", self.url);
        let response = self
            .client
            .get(self.url.clone())
            .header(ACCEPT, FEED_ACCEPT)
            .send()
            .await
            .context("Feed request failed")?;

        if !response.status().is_success() {
            return Err(NewsFeedError::Status(response.status().as_u16()));
        }

        let body = response.text().await.context("Feed response body")?;
        Ok(body)
    }
}
