//! Certifications data
//!
//! Entries come from a static JSON asset rather than a remote API. A load or
//! parse failure is fatal to the certifications page and surfaced with a
//! retry affordance; a structurally empty document is fine and renders the
//! empty state.

use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::error::{Error, Result};

/// Catch-all category id that matches every certification
pub const ALL_CERTIFICATIONS: &str = "all";

const STATUS_COMPLETED: &str = "Completed";
const STATUS_IN_PROGRESS: &str = "In Progress";
const STATUS_PARTICIPATED: &str = "Participated";

/// One certification or achievement entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub issue_date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub credential_id: Option<String>,
}

/// Filter chip definition from the data file
#[derive(Debug, Clone, Deserialize)]
pub struct CertCategory {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
}

/// The whole certifications document
///
/// Either top-level key may be absent; both default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CertificationSet {
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub categories: Vec<CertCategory>,
}

/// Status breakdown shown in the page header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CertStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub participated: usize,
}

impl CertificationSet {
    /// Load the document from a local file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::AssetLoad(format!("{}: {}", path.display(), e)))?;

        let set: CertificationSet = serde_json::from_str(&content)
            .map_err(|e| Error::AssetLoad(format!("{}: {}", path.display(), e)))?;

        info!(
            "Loaded {} certifications in {} categories from {}",
            set.certifications.len(),
            set.categories.len(),
            path.display()
        );
        Ok(set)
    }

    /// Compute the status breakdown
    pub fn stats(&self) -> CertStats {
        let count = |status: &str| {
            self.certifications
                .iter()
                .filter(|c| c.status == status)
                .count()
        };

        CertStats {
            total: self.certifications.len(),
            completed: count(STATUS_COMPLETED),
            in_progress: count(STATUS_IN_PROGRESS),
            participated: count(STATUS_PARTICIPATED),
        }
    }

    /// Number of certifications under a filter chip
    pub fn category_count(&self, category_id: &str) -> usize {
        if category_id == ALL_CERTIFICATIONS {
            return self.certifications.len();
        }
        self.certifications
            .iter()
            .filter(|c| c.category == category_id)
            .count()
    }

    /// Certifications matching a filter chip
    pub fn filtered(&self, category_id: &str) -> Vec<&Certification> {
        self.certifications
            .iter()
            .filter(|c| category_id == ALL_CERTIFICATIONS || c.category == category_id)
            .collect()
    }
}
