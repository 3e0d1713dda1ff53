//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{CategoryFilter, Project, ProjectCatalog, Proposal, User};
pub use errors::SubmitError;
pub use ports::SubmissionPort;
