//! Catalog filtering and search
//!
//! Two independent predicates combined by AND: category equality (with
//! `All` matching everything) and a case-insensitive substring search over
//! title, description, tech entries and topics.

use crate::project::DisplayProject;

/// The pseudo-category that matches every project
pub const ALL_CATEGORIES: &str = "All";

/// User-selected filter state for the catalog page
#[derive(Debug, Clone)]
pub struct CatalogFilter {
    pub category: String,
    pub search: String,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
        }
    }
}

impl CatalogFilter {
    pub fn new(category: Option<String>, search: Option<String>) -> Self {
        Self {
            category: category.unwrap_or_else(|| ALL_CATEGORIES.to_string()),
            search: search.unwrap_or_default(),
        }
    }

    /// Check whether a project passes both predicates
    pub fn matches(&self, project: &DisplayProject) -> bool {
        let matches_category = self.category == ALL_CATEGORIES
            || project.category.to_string() == self.category;

        let term = self.search.to_lowercase();
        let matches_search = term.is_empty()
            || project.title.to_lowercase().contains(&term)
            || project.description.to_lowercase().contains(&term)
            || project.tech.iter().any(|t| t.to_lowercase().contains(&term))
            || project
                .topics
                .iter()
                .any(|t| t.to_lowercase().contains(&term));

        matches_category && matches_search
    }
}

/// Apply a filter to the catalog, preserving order
pub fn filter_projects<'a>(
    projects: &'a [DisplayProject],
    filter: &CatalogFilter,
) -> Vec<&'a DisplayProject> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Filter values available for the current result set: `All` plus the
/// distinct categories present, in order of first appearance
pub fn available_categories(projects: &[DisplayProject]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for project in projects {
        let name = project.category.to_string();
        if !categories.contains(&name) {
            categories.push(name);
        }
    }
    categories
}
