//! Share link construction.

use crate::domain::entities::Project;

/// Default site base used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://fortunadao.xyz";

/// Builds canonical share links for catalog entries.
#[derive(Debug, Clone)]
pub struct ShareService {
    base_url: String,
}

impl ShareService {
    /// Creates a service with the given site base, trimming a trailing slash.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Returns the share URL for a project.
    #[must_use]
    pub fn project_url(&self, project: &Project) -> String {
        format!("{}/projects/{}", self.base_url, project.slug())
    }
}

impl Default for ShareService {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ProjectCategory, ProjectStatus};

    fn make_project(slug: &str) -> Project {
        Project::new(
            "p-1",
            slug,
            "Test",
            ProjectCategory::DeFi,
            1_000.0,
            0.0,
            "rWallet1111111111111111111",
            ProjectStatus::Active,
        )
    }

    #[test]
    fn test_project_url() {
        let service = ShareService::new("https://example.org");
        assert_eq!(
            service.project_url(&make_project("solar-grids")),
            "https://example.org/projects/solar-grids"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let service = ShareService::new("https://example.org/");
        assert_eq!(
            service.project_url(&make_project("a")),
            "https://example.org/projects/a"
        );
    }
}
