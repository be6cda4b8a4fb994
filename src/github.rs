//! GitHub API integration
//!
//! Talks to the public REST API directly with reqwest: the per-repository
//! languages and detail endpoints come back as raw URLs in the listing
//! response, and the detail call needs a preview media type to include topic
//! tags, so a plain HTTP client is the right shape here.

use chrono::{DateTime, Utc};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use std::env;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};

/// Preview media type that makes the repository detail response carry topics
const TOPICS_MEDIA_TYPE: &str = "application/vnd.github.mercy-preview+json";

const CLIENT_USER_AGENT: &str = concat!("gitfolio/", env!("CARGO_PKG_VERSION"));

/// Repository listing entry as returned by the GitHub API
///
/// The same shape covers the detail endpoint response, which is a listing
/// entry plus a populated `topics` sequence.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRepository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub watchers_count: u32,
    pub homepage: Option<String>,
    #[serde(default)]
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub languages_url: String,
    pub url: String,
    pub html_url: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Listing entry augmented with languages and topics
///
/// Languages are ordered by declared byte volume (API response order);
/// topics come from the detail endpoint, falling back to the listing entry's
/// own topics field when the detail call returns a non-success status.
#[derive(Debug, Clone)]
pub struct EnrichedRepository {
    pub repo: RawRepository,
    pub languages: Vec<String>,
    pub topics: Vec<String>,
}

/// GitHub client for the portfolio pipeline
pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
    username: String,
}

impl GitHubClient {
    /// Create a new client from configuration
    ///
    /// Picks up `GITHUB_TOKEN` from the environment when present; the
    /// pipeline only reads public data, so the token just raises rate
    /// limits. Every request carries a bounded timeout so a stalled
    /// enrichment call degrades instead of suspending indefinitely.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            USER_AGENT,
            reqwest::header::HeaderValue::from_static(CLIENT_USER_AGENT),
        );

        if let Ok(token) = env::var("GITHUB_TOKEN") {
            if token.is_empty() {
                warn!("GITHUB_TOKEN is set but empty, requesting anonymously");
            } else {
                debug!("Using GITHUB_TOKEN for authenticated requests");
                let value = format!("Bearer {}", token);
                headers.insert(
                    AUTHORIZATION,
                    reqwest::header::HeaderValue::from_str(&value)
                        .map_err(|e| Error::Parse(format!("invalid GITHUB_TOKEN: {}", e)))?,
                );
            }
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.github.request_timeout))
            .build()?;

        Ok(Self {
            client,
            api_url: config.github.api_url.trim_end_matches('/').to_string(),
            username: config.github.username.clone(),
        })
    }

    /// Get the configured account name
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Fetch the account's public repositories, most recently updated first
    ///
    /// A non-success status is fatal to the calling page; the caller
    /// surfaces a retry affordance.
    pub async fn list_repositories(&self, per_page: u32) -> Result<Vec<RawRepository>> {
        let url = format!(
            "{}/users/{}/repos?per_page={}&sort=updated",
            self.api_url, self.username, per_page
        );
        debug!("Fetching repository listing: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::ListingFetch {
                status: response.status().as_u16(),
            });
        }

        let repos: Vec<RawRepository> = response
            .json()
            .await
            .map_err(|e| Error::Parse(format!("repository listing: {}", e)))?;

        info!("Fetched {} repositories for {}", repos.len(), self.username);
        Ok(repos)
    }

    /// Fetch languages and topics for a single repository
    ///
    /// The two requests are independent. A non-success status on either is
    /// tolerated (empty languages, listing-entry topics); a transport or
    /// parse failure is an enrichment error the pipeline must isolate.
    pub async fn enrich(&self, repo: RawRepository) -> Result<EnrichedRepository> {
        let name = repo.name.clone();
        let enrichment_err = |reason: String| Error::Enrichment {
            repo: name.clone(),
            reason,
        };

        let lang_response = self
            .client
            .get(&repo.languages_url)
            .send()
            .await
            .map_err(|e| enrichment_err(e.to_string()))?;

        let languages = if lang_response.status().is_success() {
            // Keys arrive ordered by byte volume; preserve_order keeps it.
            let breakdown: serde_json::Map<String, serde_json::Value> = lang_response
                .json()
                .await
                .map_err(|e| enrichment_err(format!("languages: {}", e)))?;
            breakdown.keys().cloned().collect()
        } else {
            debug!(
                "Languages endpoint returned {} for {}, using empty list",
                lang_response.status(),
                repo.name
            );
            Vec::new()
        };

        let detail_response = self
            .client
            .get(&repo.url)
            .header(ACCEPT, TOPICS_MEDIA_TYPE)
            .send()
            .await
            .map_err(|e| enrichment_err(e.to_string()))?;

        let topics = if detail_response.status().is_success() {
            let detail: RawRepository = detail_response
                .json()
                .await
                .map_err(|e| enrichment_err(format!("detail: {}", e)))?;
            detail.topics
        } else {
            debug!(
                "Detail endpoint returned {} for {}, keeping listing topics",
                detail_response.status(),
                repo.name
            );
            repo.topics.clone()
        };

        Ok(EnrichedRepository {
            repo,
            languages,
            topics,
        })
    }
}

/// Drop forks and empty repositories before enrichment
///
/// These never become display projects in either page context.
pub fn filter_candidates(repos: Vec<RawRepository>) -> Vec<RawRepository> {
    repos
        .into_iter()
        .filter(|repo| {
            if repo.fork {
                debug!("Excluding fork repository: {}", repo.name);
                return false;
            }
            if repo.size == 0 {
                debug!("Excluding empty repository: {}", repo.name);
                return false;
            }
            true
        })
        .collect()
}
