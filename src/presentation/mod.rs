//! Presentation layer: terminal UI, widgets, and event handling.

/// Event classification helpers.
pub mod events;
/// Screens and the application orchestrator.
pub mod ui;
/// Reusable widgets shared across screens.
pub mod widgets;

pub use ui::App;
