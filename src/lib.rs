//! gitfolio - Portfolio Project Pipeline
//!
//! gitfolio builds the data behind a personal portfolio: it fetches an
//! account's public repositories from the GitHub API, enriches each with its
//! language breakdown and topic tags, classifies it into a display category,
//! and ranks or filters the result for two consumption contexts (a top-4
//! featured widget and a searchable catalog). Certifications come from a
//! static JSON document.
//!
//! ## Modules
//!
//! - [`config`]: Configuration management and parsing
//! - [`github`]: GitHub API fetching and per-repository enrichment
//! - [`classify`]: Category heuristics and placeholder image derivation
//! - [`project`]: Display record assembly
//! - [`pipeline`]: Fetch/enrich/rank orchestration
//! - [`catalog`]: Category and search filtering
//! - [`certifications`]: Static certifications data

pub mod catalog;
pub mod certifications;
pub mod classify;
pub mod config;
pub mod error;
pub mod github;
pub mod pipeline;
pub mod project;

pub use catalog::{available_categories, filter_projects, CatalogFilter};
pub use certifications::{CertStats, Certification, CertificationSet};
pub use classify::Category;
pub use config::Config;
pub use error::Error;
pub use github::{EnrichedRepository, GitHubClient, RawRepository};
pub use pipeline::ProjectPipeline;
pub use project::{DisplayProject, ProjectStats, ProjectStatus};
