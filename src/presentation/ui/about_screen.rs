//! About screen.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::presentation::events::EventHandler;
use crate::presentation::widgets::KeyHint;

/// Action requested by the about screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutAction {
    None,
    Back,
}

/// Static informational copy about the DAO.
pub struct AboutScreen;

impl AboutScreen {
    pub const KEY_HINTS: [KeyHint; 2] = [("↑↓", "Scroll"), ("Esc", "Home")];

    /// Creates the screen.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Handles key event, returns action.
    #[must_use]
    pub fn handle_key(&self, key: KeyEvent) -> AboutAction {
        if EventHandler::is_back_event(&key) {
            AboutAction::Back
        } else {
            AboutAction::None
        }
    }
}

impl Default for AboutScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl StatefulWidget for &AboutScreen {
    type State = u16;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut u16) {
        let lines = vec![
            Line::styled(
                "About Fortuna",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::raw(
                "Fortuna is a community-governed funding organization built on the \
                 XRP Ledger. Donors back projects directly, project teams unlock \
                 funds milestone by milestone, and FORT holders steer the treasury \
                 through open proposals.",
            ),
            Line::raw(""),
            Line::styled("Mission", Style::default().add_modifier(Modifier::BOLD)),
            Line::raw(
                "  Make public-goods funding transparent: every donation, payout \
                 and vote is recorded on-ledger where anyone can audit it.",
            ),
            Line::raw(""),
            Line::styled("The FORT token", Style::default().add_modifier(Modifier::BOLD)),
            Line::raw(
                "  FORT is earned by donating and spent as voting weight. It does \
                 not pay out; it only governs.",
            ),
            Line::raw(""),
            Line::styled("This preview", Style::default().add_modifier(Modifier::BOLD)),
            Line::raw(
                "  This build runs entirely on bundled demo data. No wallets are \
                 contacted and no transactions are sent.",
            ),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((*scroll, 0))
            .render(area, buf);
    }
}
