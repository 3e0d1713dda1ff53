//! Fortuna - a terminal dashboard for a community funding DAO.
//!
//! This crate renders the Fortuna DAO front end in the terminal: a project
//! catalog, per-project detail pages, a donor dashboard, governance
//! proposals, and submission forms. All data is bundled demo data; wallet
//! sessions and submissions are simulated.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "fortuna";
