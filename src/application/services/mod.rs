//! Application services.

mod share_service;

pub use share_service::{DEFAULT_BASE_URL, ShareService};
