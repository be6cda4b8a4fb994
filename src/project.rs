//! Display project assembly
//!
//! Normalizes an enriched repository into the immutable record the display
//! surfaces render. The two page contexts disagree on a few knobs (tech list
//! length, description fallback, featured threshold, image size), so each
//! gets its own builder; the catalog additionally has a degraded builder for
//! repositories whose enrichment failed.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::classify::{classify, placeholder_image, Category};
use crate::github::{EnrichedRepository, RawRepository};

const FEATURED_TECH_LIMIT: usize = 5;
const CATALOG_TECH_LIMIT: usize = 6;

const FEATURED_IMAGE_SIZE: (u32, u32) = (400, 250);
const CATALOG_IMAGE_SIZE: (u32, u32) = (600, 400);

const FEATURED_DESCRIPTION_FALLBACK: &str =
    "A project showcasing development skills and innovative solutions.";
const CATALOG_DESCRIPTION_FALLBACK: &str = "No description available";

/// Star/fork/watcher counts copied verbatim from the listing entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    pub stars: u32,
    pub forks: u32,
    pub watchers: u32,
}

/// Whether the repository is still maintained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectStatus {
    Active,
    Archived,
}

/// Fully normalized record ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct DisplayProject {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub category: Category,
    pub image: String,
    pub github: String,
    pub demo: String,
    pub stats: ProjectStats,
    pub featured: bool,
    pub status: ProjectStatus,
    pub date: String,
    pub last_updated: DateTime<Utc>,
    pub topics: Vec<String>,
}

impl DisplayProject {
    /// Build a record for the home-page featured widget
    pub fn featured(enriched: EnrichedRepository) -> Self {
        let EnrichedRepository {
            repo,
            languages,
            topics,
        } = enriched;

        let category = classify(&languages, &topics);
        let featured = repo.stargazers_count > 0 || repo.forks_count > 0;
        let (width, height) = FEATURED_IMAGE_SIZE;

        Self::assemble(
            repo,
            languages,
            topics,
            category,
            FEATURED_TECH_LIMIT,
            FEATURED_DESCRIPTION_FALLBACK,
            width,
            height,
            featured,
        )
    }

    /// Build a record for the full catalog page
    pub fn catalog(enriched: EnrichedRepository) -> Self {
        let EnrichedRepository {
            repo,
            languages,
            topics,
        } = enriched;

        let category = classify(&languages, &topics);
        let featured = repo.stargazers_count > 5 || repo.forks_count > 2;
        let (width, height) = CATALOG_IMAGE_SIZE;

        Self::assemble(
            repo,
            languages,
            topics,
            category,
            CATALOG_TECH_LIMIT,
            CATALOG_DESCRIPTION_FALLBACK,
            width,
            height,
            featured,
        )
    }

    /// Build the catalog's minimal degraded record for a repository whose
    /// enrichment failed, preserving the total project count
    pub fn degraded(repo: RawRepository) -> Self {
        let (width, height) = CATALOG_IMAGE_SIZE;
        Self::assemble(
            repo,
            vec!["JavaScript".to_string()],
            Vec::new(),
            Category::Other,
            CATALOG_TECH_LIMIT,
            CATALOG_DESCRIPTION_FALLBACK,
            width,
            height,
            false,
        )
    }

    /// Static stand-in shown when the featured widget's listing fetch fails,
    /// so the section never renders empty
    pub fn fallback(username: &str) -> Self {
        let profile = format!("https://github.com/{}", username);
        let (width, height) = FEATURED_IMAGE_SIZE;
        let now = Utc::now();

        Self {
            id: 1,
            title: "Featured Project".to_string(),
            description: "Innovative solution showcasing full-stack development skills with modern technologies.".to_string(),
            tech: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "MongoDB".to_string(),
            ],
            category: Category::WebApplication,
            image: placeholder_image(Category::WebApplication, "Featured Project", width, height),
            github: profile.clone(),
            demo: profile,
            stats: ProjectStats::default(),
            featured: false,
            status: ProjectStatus::Active,
            date: now.format("%m-%Y").to_string(),
            last_updated: now,
            topics: Vec::new(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        repo: RawRepository,
        languages: Vec<String>,
        topics: Vec<String>,
        category: Category,
        tech_limit: usize,
        description_fallback: &str,
        width: u32,
        height: u32,
        featured: bool,
    ) -> Self {
        let mut tech = languages;
        tech.truncate(tech_limit);

        let description = match repo.description.as_deref() {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => description_fallback.to_string(),
        };

        let demo = match repo.homepage.as_deref() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => format!("{}#readme", repo.html_url),
        };

        let status = if repo.archived {
            ProjectStatus::Archived
        } else {
            ProjectStatus::Active
        };

        Self {
            id: repo.id,
            title: title_case(&repo.name),
            description,
            tech,
            category,
            image: placeholder_image(category, &repo.name, width, height),
            github: repo.html_url,
            demo,
            stats: ProjectStats {
                stars: repo.stargazers_count,
                forks: repo.forks_count,
                watchers: repo.watchers_count,
            },
            featured,
            status,
            date: repo.created_at.format("%m-%Y").to_string(),
            last_updated: repo.updated_at,
            topics,
        }
    }

    /// Ranking score for the featured widget: recency is a small tiebreaker
    /// behind stars and forks
    pub fn score(&self) -> f64 {
        f64::from(self.stats.stars) * 3.0
            + f64::from(self.stats.forks) * 2.0
            + self.last_updated.timestamp() as f64 / 1e9
    }
}

/// Turn a repository name into a display title: `-`/`_` become spaces and
/// each word's first letter is upper-cased
pub fn title_case(name: &str) -> String {
    name.replace(['-', '_'], " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::testutil::sample_repo;
    use chrono::TimeZone;

    fn enriched(repo: RawRepository, languages: &[&str], topics: &[&str]) -> EnrichedRepository {
        EnrichedRepository {
            repo,
            languages: languages.iter().map(|s| s.to_string()).collect(),
            topics: topics.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("my-cool_project"), "My Cool Project");
        assert_eq!(title_case("portfolio"), "Portfolio");
        assert_eq!(title_case("already Capitalized"), "Already Capitalized");
    }

    #[test]
    fn test_description_fallback_differs_per_context() {
        let repo = sample_repo("demo");
        let home = DisplayProject::featured(enriched(repo.clone(), &[], &[]));
        let page = DisplayProject::catalog(enriched(repo, &[], &[]));

        assert_eq!(home.description, FEATURED_DESCRIPTION_FALLBACK);
        assert_eq!(page.description, CATALOG_DESCRIPTION_FALLBACK);
    }

    #[test]
    fn test_empty_description_uses_fallback() {
        let mut repo = sample_repo("demo");
        repo.description = Some(String::new());
        let project = DisplayProject::catalog(enriched(repo, &[], &[]));
        assert_eq!(project.description, CATALOG_DESCRIPTION_FALLBACK);
    }

    #[test]
    fn test_tech_limits() {
        let langs = ["A", "B", "C", "D", "E", "F", "G"];
        let repo = sample_repo("demo");

        let home = DisplayProject::featured(enriched(repo.clone(), &langs, &[]));
        assert_eq!(home.tech.len(), 5);

        let page = DisplayProject::catalog(enriched(repo, &langs, &[]));
        assert_eq!(page.tech.len(), 6);
        assert_eq!(page.tech[0], "A");
    }

    #[test]
    fn test_featured_thresholds() {
        let mut repo = sample_repo("demo");
        repo.stargazers_count = 1;

        let home = DisplayProject::featured(enriched(repo.clone(), &[], &[]));
        assert!(home.featured);

        // One star is not enough for the catalog's badge.
        let page = DisplayProject::catalog(enriched(repo.clone(), &[], &[]));
        assert!(!page.featured);

        repo.stargazers_count = 6;
        let page = DisplayProject::catalog(enriched(repo, &[], &[]));
        assert!(page.featured);
    }

    #[test]
    fn test_demo_falls_back_to_readme_anchor() {
        let mut repo = sample_repo("demo");
        repo.homepage = Some(String::new());
        let project = DisplayProject::catalog(enriched(repo, &[], &[]));
        assert_eq!(project.demo, "https://github.com/u/demo#readme");

        let mut repo = sample_repo("demo");
        repo.homepage = Some("https://example.com".to_string());
        let project = DisplayProject::catalog(enriched(repo, &[], &[]));
        assert_eq!(project.demo, "https://example.com");
    }

    #[test]
    fn test_archived_status() {
        let mut repo = sample_repo("demo");
        repo.archived = true;
        let project = DisplayProject::catalog(enriched(repo, &[], &[]));
        assert_eq!(project.status, ProjectStatus::Archived);
    }

    #[test]
    fn test_creation_date_format() {
        let mut repo = sample_repo("demo");
        repo.created_at = Utc.with_ymd_and_hms(2023, 4, 9, 12, 0, 0).unwrap();
        let project = DisplayProject::catalog(enriched(repo, &[], &[]));
        assert_eq!(project.date, "04-2023");
    }

    #[test]
    fn test_degraded_record() {
        let mut repo = sample_repo("broken");
        repo.stargazers_count = 50;
        let project = DisplayProject::degraded(repo);

        assert_eq!(project.tech, vec!["JavaScript".to_string()]);
        assert_eq!(project.category, Category::Other);
        assert!(!project.featured);
        assert!(project.topics.is_empty());
        // Stats still come from the listing entry.
        assert_eq!(project.stats.stars, 50);
    }

    #[test]
    fn test_fallback_project() {
        let project = DisplayProject::fallback("some-user");
        assert_eq!(project.title, "Featured Project");
        assert_eq!(project.github, "https://github.com/some-user");
        assert_eq!(project.stats, ProjectStats::default());
        assert!(!project.featured);
    }

    #[test]
    fn test_score_weighting() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut repo = sample_repo("scored");
        repo.stargazers_count = 10;
        repo.forks_count = 2;
        repo.updated_at = t;

        let project = DisplayProject::featured(enriched(repo, &[], &[]));
        let expected = 10.0 * 3.0 + 2.0 * 2.0 + t.timestamp() as f64 / 1e9;
        assert!((project.score() - expected).abs() < f64::EPSILON);
    }
}
