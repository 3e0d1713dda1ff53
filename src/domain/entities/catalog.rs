//! Ordered, read-only project catalog and its category filter.

use serde::{Deserialize, Serialize};

use super::project::{Project, ProjectCategory, ProjectId};

/// Category selection for the project list. Independent of the active view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Every catalog entry.
    #[default]
    All,
    /// Only entries in one category.
    Category(ProjectCategory),
}

impl CategoryFilter {
    /// All filter values in tab order (`All` first).
    #[must_use]
    pub fn tabs() -> Vec<Self> {
        let mut tabs = vec![Self::All];
        tabs.extend(ProjectCategory::ALL.map(Self::Category));
        tabs
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Category(category) => category.label(),
        }
    }

    /// Returns whether a project passes the filter.
    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => project.category() == category,
        }
    }
}

/// The static project catalog. Never changes within a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Creates a catalog from an ordered project list.
    #[must_use]
    pub const fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Returns every entry in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    /// Returns the entries passing the filter, preserving catalog order.
    #[must_use]
    pub fn filtered(&self, filter: CategoryFilter) -> Vec<&Project> {
        self.projects.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn by_id(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id() == id)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::project::ProjectStatus;

    fn make_project(id: &str, category: ProjectCategory) -> Project {
        Project::new(
            id,
            id,
            format!("Project {id}"),
            category,
            1_000.0,
            100.0,
            "rWallet1111111111111111111",
            ProjectStatus::Active,
        )
    }

    fn make_catalog() -> ProjectCatalog {
        ProjectCatalog::new(vec![
            make_project("p-1", ProjectCategory::DeFi),
            make_project("p-2", ProjectCategory::Charity),
            make_project("p-3", ProjectCategory::DeFi),
            make_project("p-4", ProjectCategory::Education),
        ])
    }

    #[test]
    fn test_all_filter_returns_catalog_unchanged() {
        let catalog = make_catalog();
        let filtered = catalog.filtered(CategoryFilter::All);
        assert_eq!(filtered.len(), 4);
        let ids: Vec<_> = filtered.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, ["p-1", "p-2", "p-3", "p-4"]);
    }

    #[test]
    fn test_category_filter_preserves_relative_order() {
        let catalog = make_catalog();
        let defi = catalog.filtered(CategoryFilter::Category(ProjectCategory::DeFi));
        let ids: Vec<_> = defi.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, ["p-1", "p-3"]);
    }

    #[test]
    fn test_category_filter_matches_field_exactly() {
        let catalog = make_catalog();
        let charity = catalog.filtered(CategoryFilter::Category(ProjectCategory::Charity));
        assert!(charity.iter().all(|p| p.category() == ProjectCategory::Charity));
        assert_eq!(charity.len(), 1);
    }

    #[test]
    fn test_by_id() {
        let catalog = make_catalog();
        assert!(catalog.by_id(&ProjectId::from("p-2")).is_some());
        assert!(catalog.by_id(&ProjectId::from("missing")).is_none());
    }

    #[test]
    fn test_filter_tabs_start_with_all() {
        let tabs = CategoryFilter::tabs();
        assert_eq!(tabs[0], CategoryFilter::All);
        assert_eq!(tabs.len(), 6);
    }
}
