//! Infrastructure layer.
//!
//! Adapters for the outside world: configuration files, the system
//! clipboard, the submission sink, and the bundled demo dataset.

pub mod clipboard;
pub mod config;
pub mod mock_data;
pub mod submission;

pub use clipboard::ClipboardService;
pub use config::{AppConfig, CliArgs, StorageManager};
pub use submission::LoggingSubmissionService;
