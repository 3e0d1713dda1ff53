//! Entity definitions.

mod catalog;
mod project;
mod proposal;
mod user;

pub use catalog::{CategoryFilter, ProjectCatalog};
pub use project::{Project, ProjectCategory, ProjectId, ProjectStatus, Socials, TeamMember};
pub use proposal::{Proposal, ProposalId, ProposalStatus, filter_by_status};
pub use user::{Activity, ActivityKind, Donation, User};
