//! UI screens.

mod about_screen;
mod app;
mod create_proposal_screen;
mod dashboard_screen;
pub(crate) mod format;
mod governance_screen;
mod home_screen;
mod project_screen;
mod projects_screen;
mod submit_project_screen;

pub use about_screen::{AboutAction, AboutScreen};
pub use app::{App, Screen, ViewKind};
pub use create_proposal_screen::{CreateProposalAction, CreateProposalScreen};
pub use dashboard_screen::{DashboardAction, DashboardScreen};
pub use governance_screen::{GovernanceAction, GovernanceScreen};
pub use home_screen::{HomeAction, HomeScreen};
pub use project_screen::{ProjectAction, ProjectScreen};
pub use projects_screen::{ProjectsAction, ProjectsScreen};
pub use submit_project_screen::{SubmitProjectAction, SubmitProjectScreen};
