//! Proposal creation form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};
use tui_textarea::TextArea;

use crate::application::use_cases::TITLE_MAX;
use crate::domain::ports::ProposalDraft;
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::{
    KeyHint, TextInput, edit_textarea, render_textarea, textarea_text,
};

/// Action requested by the proposal form.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateProposalAction {
    None,
    Consumed,
    Submit(ProposalDraft),
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Title,
    Description,
}

/// Two-field proposal form, submitted with `Ctrl+S`.
pub struct CreateProposalScreen {
    title: TextInput,
    description: TextArea<'static>,
    focus: FormField,
    error: Option<String>,
}

impl CreateProposalScreen {
    pub const KEY_HINTS: [KeyHint; 3] = [
        ("Tab", "Next field"),
        ("C-s", "Submit"),
        ("Esc", "Cancel"),
    ];

    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        let mut title = TextInput::new("Title")
            .placeholder("What should the DAO decide?")
            .char_limit(TITLE_MAX);
        title.set_focused(true);

        let mut description = TextArea::default();
        description.set_placeholder_text("Motivation and expected outcome");

        Self {
            title,
            description,
            focus: FormField::Title,
            error: None,
        }
    }

    /// Shows a validation or rejection message inline.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Title,
        };
        self.title.set_focused(self.focus == FormField::Title);
    }

    /// Handles key event, returns action.
    #[must_use]
    pub fn handle_key(&mut self, key: KeyEvent) -> CreateProposalAction {
        if EventHandler::is_back_event(&key) {
            return CreateProposalAction::Cancel;
        }
        if EventHandler::is_submit_event(&key) {
            return CreateProposalAction::Submit(ProposalDraft {
                title: self.title.value().to_string(),
                description: textarea_text(&self.description),
            });
        }
        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            self.toggle_focus();
            return CreateProposalAction::Consumed;
        }

        let consumed = match self.focus {
            FormField::Title => self.title.handle_key(key),
            FormField::Description => edit_textarea(&mut self.description, key),
        };

        if consumed {
            CreateProposalAction::Consumed
        } else {
            CreateProposalAction::None
        }
    }
}

impl Default for CreateProposalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &CreateProposalScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title_area, description_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .areas(area);

        (&self.title).render(title_area, buf);

        let description_focused = self.focus == FormField::Description;
        let description_block = Block::default()
            .borders(Borders::ALL)
            .border_style(if description_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            })
            .title("Description");
        let description_inner = description_block.inner(description_area);
        description_block.render(description_area, buf);
        render_textarea(&self.description, description_focused, description_inner, buf);

        let status = self.error.as_ref().map_or_else(
            || {
                Line::styled(
                    "Ctrl+S submits the proposal to the DAO.",
                    Style::default().fg(Color::DarkGray),
                )
            },
            |error| Line::styled(format!("✗ {error}"), Style::default().fg(Color::Red)),
        );
        Paragraph::new(status).render(status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut CreateProposalScreen, text: &str) {
        for c in text.chars() {
            let _ = screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_submit_carries_both_fields() {
        let mut screen = CreateProposalScreen::new();
        type_text(&mut screen, "Shorter voting period");
        let _ = screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "Cut it to 7 days.");

        let chord = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        match screen.handle_key(chord) {
            CreateProposalAction::Submit(draft) => {
                assert_eq!(draft.title, "Shorter voting period");
                assert_eq!(draft.description, "Cut it to 7 days.");
            }
            other => panic!("expected Submit, got {other:?}"),
        }
    }

    #[test]
    fn test_title_respects_limit() {
        let mut screen = CreateProposalScreen::new();
        type_text(&mut screen, &"x".repeat(TITLE_MAX + 20));
        assert_eq!(screen.title.value().chars().count(), TITLE_MAX);
    }

    #[test]
    fn test_escape_cancels() {
        let mut screen = CreateProposalScreen::new();
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), CreateProposalAction::Cancel);
    }
}
