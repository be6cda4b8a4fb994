//! Pipeline orchestration
//!
//! Drives the fetch → enrich → classify → present → rank flow for the two
//! page contexts. Enrichment of the filtered candidates is fanned out
//! concurrently with a single join point; each task is failure-isolated so
//! one bad repository never aborts the batch.
//!
//! The two contexts handle a failed enrichment differently on purpose: the
//! featured widget drops the record, the catalog substitutes a degraded one
//! so its total count is preserved. Unifying these would change displayed
//! counts.

use futures::stream::{FuturesUnordered, StreamExt};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::github::{filter_candidates, GitHubClient};
use crate::project::DisplayProject;

/// Number of projects the featured widget shows
const FEATURED_COUNT: usize = 4;

/// The portfolio project pipeline
pub struct ProjectPipeline {
    client: GitHubClient,
    config: Arc<Config>,
}

impl ProjectPipeline {
    /// Create a pipeline from configuration
    pub fn new(config: Config) -> Result<Self> {
        let client = GitHubClient::new(&config)?;
        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Produce the home-page featured widget: top 4 candidates by score
    ///
    /// Only the first few filtered candidates are enriched to bound request
    /// volume; repositories whose enrichment fails are dropped. A listing
    /// failure propagates so the caller can decide between fallback and
    /// retry.
    pub async fn featured_projects(&self) -> Result<Vec<DisplayProject>> {
        let repos = self
            .client
            .list_repositories(self.config.github.featured_per_page)
            .await?;
        let candidates = filter_candidates(repos);

        debug!(
            "Enriching up to {} of {} featured candidates",
            self.config.github.featured_candidates,
            candidates.len()
        );

        let client = &self.client;
        let mut tasks = FuturesUnordered::new();
        for repo in candidates
            .into_iter()
            .take(self.config.github.featured_candidates)
        {
            tasks.push(async move { client.enrich(repo).await });
        }

        let mut projects = Vec::new();
        while let Some(result) = tasks.next().await {
            match result {
                Ok(enriched) => projects.push(DisplayProject::featured(enriched)),
                Err(e) => warn!("Dropping repository from featured widget: {}", e),
            }
        }

        rank_featured(&mut projects);
        info!("Built {} featured projects", projects.len());
        Ok(projects)
    }

    /// Featured widget with its page-level failure semantics applied: on a
    /// listing failure the section shows a single static stand-in instead of
    /// rendering empty
    pub async fn featured_or_fallback(&self) -> Vec<DisplayProject> {
        match self.featured_projects().await {
            Ok(projects) => projects,
            Err(e) => {
                error!("Featured widget falling back to static project: {}", e);
                vec![DisplayProject::fallback(self.client.username())]
            }
        }
    }

    /// Produce the full catalog, most recently updated first
    ///
    /// Every filtered candidate is enriched; a failed enrichment yields a
    /// degraded record rather than a gap. A listing failure propagates as
    /// the page-level error state.
    pub async fn catalog_projects(&self) -> Result<Vec<DisplayProject>> {
        let repos = self
            .client
            .list_repositories(self.config.github.catalog_per_page)
            .await?;
        let candidates = filter_candidates(repos);

        debug!("Enriching {} catalog candidates", candidates.len());

        let client = &self.client;
        let mut tasks = FuturesUnordered::new();
        for repo in candidates {
            tasks.push(async move {
                let listing_entry = repo.clone();
                match client.enrich(repo).await {
                    Ok(enriched) => DisplayProject::catalog(enriched),
                    Err(e) => {
                        warn!("Substituting degraded catalog record: {}", e);
                        DisplayProject::degraded(listing_entry)
                    }
                }
            });
        }

        let mut projects = Vec::new();
        while let Some(project) = tasks.next().await {
            projects.push(project);
        }

        sort_catalog(&mut projects);
        info!("Built {} catalog projects", projects.len());
        Ok(projects)
    }
}

/// Sort by descending score and keep the widget's top 4
///
/// Exact-tie order is whatever the stable sort leaves in place.
pub fn rank_featured(projects: &mut Vec<DisplayProject>) {
    projects.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(Ordering::Equal)
    });
    projects.truncate(FEATURED_COUNT);
}

/// Sort the catalog most-recently-updated first
pub fn sort_catalog(projects: &mut [DisplayProject]) {
    projects.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
}
