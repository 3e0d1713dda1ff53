use arboard::Clipboard;
use tracing::{error, warn};

/// Fire-and-forget system clipboard writes.
///
/// Failures are logged and never surfaced to the caller; the UI only shows
/// a transient "copied" flag regardless of the outcome.
#[derive(Clone, Default)]
pub struct ClipboardService {}

impl ClipboardService {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        tokio::task::spawn_blocking(move || match Clipboard::new() {
            Ok(mut cb) => {
                if let Err(e) = cb.set_text(text) {
                    error!("Failed to set clipboard text: {}", e);
                }
            }
            Err(e) => {
                warn!("Failed to initialize clipboard for copy: {}", e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_text_does_not_block_or_panic() {
        let service = ClipboardService::new();
        service.set_text("rN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH");
    }
}
